use crate::listings::coerce::{date_from_value, integer_from_value, is_blank, number_from_value};
use crate::listings::domain::FlowType;
use serde_json::{Map, Value};

const BATHROOM_STEPS: &[(FlowType, &[&str])] = &[
    (FlowType::ResidentialRent, &["res_rent_features"]),
    (FlowType::CommercialRent, &["com_rent_features"]),
    (FlowType::CommercialSale, &["com_sale_features"]),
    (FlowType::ResidentialPgHostel, &["res_pg_features"]),
    (FlowType::ResidentialFlatmates, &["res_flat_features"]),
];

/// Whether the bathrooms count blocks the given flow and step.
pub fn bathrooms_required(flow: Option<FlowType>, step: &str) -> bool {
    // Sale listings collect the bathroom count in their features step.
    if flow == Some(FlowType::ResidentialSale) && step == "res_sale_basic_details" {
        return false;
    }

    let Some(flow) = flow else {
        return false;
    };
    BATHROOM_STEPS
        .iter()
        .any(|(candidate, steps)| *candidate == flow && steps.contains(&step))
}

pub(crate) fn bathrooms(value: &Value, context: &Map<String, Value>) -> Option<String> {
    let flow = context
        .get("flowType")
        .and_then(Value::as_str)
        .and_then(FlowType::from_hint);
    let step = context
        .get("currentStep")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if is_blank(value) {
        return bathrooms_required(flow, step).then(|| "Bathrooms is required".to_string());
    }
    bounded_integer(value, "Bathrooms", 0, 20)
}

pub(crate) fn floor(value: &Value, context: &Map<String, Value>) -> Option<String> {
    let floor = match integer_from_value(value) {
        Some(floor) => floor,
        None => return Some("Floor must be a valid number".to_string()),
    };
    if !(-2..=200).contains(&floor) {
        return Some("Floor must be between -2 and 200".to_string());
    }

    let total = context.get("totalFloors").and_then(integer_from_value);
    match total {
        Some(total) if floor > total => Some("Floor cannot be greater than total floors".to_string()),
        _ => None,
    }
}

pub(crate) fn total_floors(value: &Value, _context: &Map<String, Value>) -> Option<String> {
    bounded_integer(value, "Total floors", 1, 200)
}

pub(crate) fn built_up_area(value: &Value, _context: &Map<String, Value>) -> Option<String> {
    match integer_from_value(value) {
        None => Some("Built-up area must be a valid number".to_string()),
        Some(area) if area <= 0 => Some("Built-up area must be greater than 0".to_string()),
        Some(area) if area > 1_000_000 => {
            Some("Built-up area cannot exceed 1000000 sq ft".to_string())
        }
        Some(_) => None,
    }
}

pub(crate) fn capacity(value: &Value, _context: &Map<String, Value>) -> Option<String> {
    bounded_integer(value, "Capacity", 1, 20)
}

pub(crate) fn total_seats(value: &Value, _context: &Map<String, Value>) -> Option<String> {
    bounded_integer(value, "Total seats", 1, 5000)
}

pub(crate) fn plot_area(value: &Value, _context: &Map<String, Value>) -> Option<String> {
    bounded_integer(value, "Plot area", 1, 100_000_000)
}

pub(crate) fn security_deposit(value: &Value, context: &Map<String, Value>) -> Option<String> {
    let deposit = number_from_value(value)?;
    let rent = context
        .get("rentAmount")
        .and_then(number_from_value)
        .filter(|rent| *rent > 0.0)?;
    (deposit > rent * 24.0)
        .then(|| "Security deposit cannot exceed 24 months of rent".to_string())
}

pub(crate) fn calendar_date(value: &Value, _context: &Map<String, Value>) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    date_from_value(value)
        .is_none()
        .then(|| "Please enter a valid date".to_string())
}

fn bounded_integer(value: &Value, label: &str, min: i64, max: i64) -> Option<String> {
    match integer_from_value(value) {
        None => Some(format!("{label} must be a valid number")),
        Some(number) if number < min || number > max => {
            Some(format!("{label} must be between {min} and {max}"))
        }
        Some(_) => None,
    }
}
