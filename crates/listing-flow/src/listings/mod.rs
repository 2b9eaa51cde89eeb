//! Listing records: flow detection, per-step validation, and display extraction.
//!
//! Everything in here is synchronous and side-effect free apart from tracing
//! output; the static rule tables are built once and shared read-only.

pub mod classifier;
pub(crate) mod coerce;
pub mod display;
pub mod domain;
pub mod extract;
pub mod import;
pub mod record;
pub mod router;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use classifier::{detect, Detection, DetectionSignal, FlowClassifier};
pub use display::{classify_field_kind, render_field_value, FieldKind, Formatter};
pub use domain::FlowType;
pub use extract::{FieldLocator, FieldPath, LocationDetails, Pricing, RoomDetails};
pub use import::{parse_records, PropertyImportError};
pub use record::PropertyRecord;
pub use router::listing_router;
pub use validation::{validate_field, validate_step, FieldRule, FieldValidator, ValidationResult};
pub use view::{DisplayField, PropertyView};
