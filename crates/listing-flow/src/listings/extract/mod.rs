//! Value lookup across the historical shapes of `property_details`.
//!
//! The same logical field may live in a flow step, in a legacy section object,
//! directly on `property_details`, or as a column on the record. Lookups walk
//! an ordered list of [`FieldPath`]s and take the first non-empty hit.

mod sections;

pub use sections::{amenities, location, pricing, room_details, LocationDetails, Pricing, RoomDetails};

use super::classifier::FlowClassifier;
use super::domain::FlowType;
use super::record::PropertyRecord;
use serde_json::Value;

/// Section objects written by wizard versions that predate `steps`.
pub const LEGACY_SECTIONS: &[&str] = &[
    "basicDetails",
    "location",
    "rentalDetails",
    "saleDetails",
    "pgDetails",
    "flatmateDetails",
    "coworkingDetails",
    "landDetails",
    "features",
];

/// One candidate location for a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath<'a> {
    /// `property_details.steps.<step>.<key>`
    Step { step: &'a str, key: &'a str },
    /// Every step of `flow`, in wizard order.
    FlowSteps { flow: FlowType, key: &'a str },
    /// Every step present on the record, in record order.
    AnyStep(&'a str),
    /// `property_details.<section>.<key>`
    Section { section: &'a str, key: &'a str },
    /// `property_details.<key>`
    Details(&'a str),
    /// A top-level record column.
    Column(&'a str),
    /// The record's `price` column.
    RecordPrice,
}

impl FieldPath<'_> {
    pub fn resolve(&self, record: &PropertyRecord) -> Option<Value> {
        match *self {
            FieldPath::Step { step, key } => record.step(step).and_then(|s| present(s.get(key))),
            FieldPath::FlowSteps { flow, key } => flow
                .step_ids()
                .iter()
                .find_map(|step| record.step(step).and_then(|s| present(s.get(key)))),
            FieldPath::AnyStep(key) => record.steps().and_then(|steps| {
                steps
                    .values()
                    .filter_map(Value::as_object)
                    .find_map(|step| present(step.get(key)))
            }),
            FieldPath::Section { section, key } => {
                record.section(section).and_then(|s| present(s.get(key)))
            }
            FieldPath::Details(key) => present(record.details().get(key)),
            FieldPath::Column(key) => present(record.column(key)),
            FieldPath::RecordPrice => record.price.map(Value::from),
        }
    }
}

/// First non-empty value along `paths`.
pub fn first_non_empty(record: &PropertyRecord, paths: &[FieldPath<'_>]) -> Option<Value> {
    paths.iter().find_map(|path| path.resolve(record))
}

/// Standard cascade for `keys` (aliases of one logical field): preferred step,
/// the flow's steps, any step, legacy sections, `property_details`, then columns.
/// Location wins over alias order.
pub fn cascade<'a>(
    flow: FlowType,
    preferred_step: Option<&'a str>,
    keys: &[&'a str],
) -> Vec<FieldPath<'a>> {
    let mut paths = Vec::new();
    if let Some(step) = preferred_step {
        paths.extend(keys.iter().map(|&key| FieldPath::Step { step, key }));
    }
    paths.extend(keys.iter().map(|&key| FieldPath::FlowSteps { flow, key }));
    paths.extend(keys.iter().map(|&key| FieldPath::AnyStep(key)));
    for &section in LEGACY_SECTIONS {
        paths.extend(keys.iter().map(|&key| FieldPath::Section { section, key }));
    }
    paths.extend(keys.iter().map(|&key| FieldPath::Details(key)));
    paths.extend(keys.iter().map(|&key| FieldPath::Column(key)));
    paths
}

/// Looks up fields of one record with its flow fixed.
#[derive(Debug, Clone, Copy)]
pub struct FieldLocator<'r> {
    record: &'r PropertyRecord,
    flow: FlowType,
}

impl<'r> FieldLocator<'r> {
    pub fn new(record: &'r PropertyRecord) -> Self {
        Self::with_flow(record, FlowClassifier.detect(record))
    }

    pub fn with_flow(record: &'r PropertyRecord, flow: FlowType) -> Self {
        Self { record, flow }
    }

    pub fn flow(&self) -> FlowType {
        self.flow
    }

    pub fn record(&self) -> &'r PropertyRecord {
        self.record
    }

    /// Step id of this flow ending in `suffix`, e.g. `location`.
    pub fn step_named(&self, suffix: &str) -> Option<&'static str> {
        self.flow
            .step_ids()
            .iter()
            .copied()
            .find(|step| step.strip_prefix(self.flow.step_prefix()) == Some(suffix))
    }

    pub fn find(&self, keys: &[&str]) -> Option<Value> {
        first_non_empty(self.record, &cascade(self.flow, None, keys))
    }

    pub fn find_in(&self, preferred_step: &str, keys: &[&str]) -> Option<Value> {
        first_non_empty(self.record, &cascade(self.flow, Some(preferred_step), keys))
    }

    /// Cascade ending at the record's `price` column.
    pub fn find_price(&self, preferred_step: &str, keys: &[&str]) -> Option<Value> {
        let mut paths = cascade(self.flow, Some(preferred_step), keys);
        paths.push(FieldPath::RecordPrice);
        first_non_empty(self.record, &paths)
    }
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|value| !is_empty(value)).cloned()
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(raw) => raw.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
