//! Infers the listing flow of a property record.
//!
//! Records were written by several generations of the listing wizard and carry
//! no single authoritative discriminator, so detection walks a cascade of
//! progressively weaker signals and always lands on a flow.

use super::domain::FlowType;
use super::record::PropertyRecord;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Which signal in the cascade decided the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSignal {
    ExplicitHint,
    StepPrefix,
    Characteristic,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub flow: FlowType,
    pub signal: DetectionSignal,
}

/// Stateless classifier over property records.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowClassifier;

impl FlowClassifier {
    pub fn detect(&self, record: &PropertyRecord) -> FlowType {
        self.explain(record).flow
    }

    /// Classifies raw JSON, including `null` and non-record values.
    pub fn detect_value(&self, value: &Value) -> FlowType {
        self.detect(&PropertyRecord::from_value(value))
    }

    pub fn explain(&self, record: &PropertyRecord) -> Detection {
        let detection = explicit_hint(record)
            .map(|flow| Detection {
                flow,
                signal: DetectionSignal::ExplicitHint,
            })
            .or_else(|| {
                step_prefix(record).map(|flow| Detection {
                    flow,
                    signal: DetectionSignal::StepPrefix,
                })
            })
            .or_else(|| {
                characteristic(record).map(|flow| Detection {
                    flow,
                    signal: DetectionSignal::Characteristic,
                })
            })
            .unwrap_or(Detection {
                flow: FlowType::default(),
                signal: DetectionSignal::Default,
            });

        debug!(
            record_id = %record.id,
            flow = %detection.flow,
            signal = ?detection.signal,
            "classified listing flow"
        );
        detection
    }
}

pub fn detect(record: &PropertyRecord) -> FlowType {
    FlowClassifier.detect(record)
}

fn explicit_hint(record: &PropertyRecord) -> Option<FlowType> {
    let details = record.details();
    let candidates = [
        details
            .get("flow")
            .and_then(Value::as_object)
            .and_then(|flow| flow.get("flowType")),
        details.get("flowType"),
        record.column("flowType"),
        record.column("flow_type"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find_map(FlowType::from_hint)
}

fn step_prefix(record: &PropertyRecord) -> Option<FlowType> {
    let first = record.steps()?.keys().next()?;
    FlowType::from_step_id(first)
}

fn characteristic(record: &PropertyRecord) -> Option<FlowType> {
    let details = record.details();
    let step_keys: Vec<&str> = record
        .steps()
        .map(|steps| steps.keys().map(String::as_str).collect())
        .unwrap_or_default();
    let any_step_contains = |needle: &str| step_keys.iter().any(|key| key.contains(needle));

    if has_object(details, "pgDetails") || any_step_contains("pg_details") {
        return Some(FlowType::ResidentialPgHostel);
    }
    if has_object(details, "flatmateDetails") || any_step_contains("flatmate") {
        return Some(FlowType::ResidentialFlatmates);
    }
    if has_object(details, "coworkingDetails") || any_step_contains("coworking") {
        return Some(FlowType::CommercialCoworking);
    }

    let land_basic = details
        .get("basicDetails")
        .and_then(|basic| basic.get("propertyType"))
        .and_then(Value::as_str)
        == Some("Land");
    if has_object(details, "landDetails") || land_basic || any_step_contains("land") {
        return Some(FlowType::LandSale);
    }

    None
}

fn has_object(details: &Map<String, Value>, key: &str) -> bool {
    details.get(key).map(Value::is_object).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(value: Value) -> Detection {
        FlowClassifier.explain(&PropertyRecord::from_value(&value))
    }

    #[test]
    fn unknown_hint_falls_through_to_step_prefix() {
        let detection = classify(json!({
            "property_details": {
                "flowType": "villa",
                "steps": { "com_sale_basic_details": {} }
            }
        }));

        assert_eq!(detection.flow, FlowType::CommercialSale);
        assert_eq!(detection.signal, DetectionSignal::StepPrefix);
    }

    #[test]
    fn top_level_snake_case_hint_is_honoured() {
        let detection = classify(json!({ "flow_type": "commercial_coworking" }));
        assert_eq!(detection.flow, FlowType::CommercialCoworking);
        assert_eq!(detection.signal, DetectionSignal::ExplicitHint);
    }

    #[test]
    fn only_first_step_key_is_consulted() {
        let detection = classify(json!({
            "property_details": {
                "steps": {
                    "land_sale_location": {},
                    "res_rent_basic_details": {}
                }
            }
        }));
        assert_eq!(detection.flow, FlowType::LandSale);
    }

    #[test]
    fn land_property_type_in_basic_details() {
        let detection = classify(json!({
            "property_details": { "basicDetails": { "propertyType": "Land" } }
        }));
        assert_eq!(detection.flow, FlowType::LandSale);
        assert_eq!(detection.signal, DetectionSignal::Characteristic);
    }

    #[test]
    fn pg_signal_outranks_flatmate_signal() {
        let detection = classify(json!({
            "property_details": {
                "flatmateDetails": {},
                "pgDetails": { "capacity": 2 }
            }
        }));
        assert_eq!(detection.flow, FlowType::ResidentialPgHostel);
    }

    #[test]
    fn pg_details_must_be_an_object() {
        let detection = classify(json!({ "property_details": { "pgDetails": "yes" } }));
        assert_eq!(detection.signal, DetectionSignal::Default);
        assert_eq!(detection.flow, FlowType::ResidentialRent);
    }
}
