//! Per-step validation of listing wizard form data.

mod custom;
mod rules;
mod steps;

pub use custom::bathrooms_required;
pub use rules::{known_fields, rule_for, CustomCheck, FieldPattern, FieldRule};
pub use steps::{default_fields, fields_for, known_steps, DEFAULT_RULE_SET};

use super::coerce::{is_blank, number_from_value};
use super::domain::FlowType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Outcome of validating one wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
    /// Step id whose field table applied, or `default` for unrecognized steps.
    pub rule_set: String,
}

/// Stateless validator over the static field and step tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_step(&self, step_id: &str, form_data: &Value) -> ValidationResult {
        let (fields, rule_set) = match steps::fields_for(step_id) {
            Some(fields) => (fields, step_id.to_string()),
            None => {
                warn!(step_id, "unrecognized step id, applying default rule set");
                (steps::default_fields(), DEFAULT_RULE_SET.to_string())
            }
        };

        let values = step_values(step_id, form_data);
        let context = step_context(step_id, form_data, &values);

        let mut errors = BTreeMap::new();
        for field in fields {
            let value = values.get(*field).unwrap_or(&Value::Null);
            if let Some(message) = self.validate_field(field, value, &context) {
                errors.insert((*field).to_string(), message);
            }
        }

        // Optional extras the form carried for this step are checked too.
        for (field, value) in &values {
            if fields.contains(&field.as_str()) || is_blank(value) {
                continue;
            }
            if let Some(message) = self.validate_field(field, value, &context) {
                errors.insert(field.clone(), message);
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            rule_set,
        }
    }

    /// Error message for one field, or `None` when valid or unknown.
    pub fn validate_field(
        &self,
        field: &str,
        value: &Value,
        context: &Map<String, Value>,
    ) -> Option<String> {
        let rule = rules::rule_for(field)?;
        check_rule(rule, value, context)
    }
}

pub fn validate_step(step_id: &str, form_data: &Value) -> ValidationResult {
    FieldValidator.validate_step(step_id, form_data)
}

pub fn validate_field(field: &str, value: &Value, context: &Map<String, Value>) -> Option<String> {
    FieldValidator.validate_field(field, value, context)
}

fn check_rule(rule: &FieldRule, value: &Value, context: &Map<String, Value>) -> Option<String> {
    if is_blank(value) {
        if rule.required {
            return Some(format!("{} is required", rule.label));
        }
        // Built-in checks are skipped, but a custom check may still require the field.
        return rule.custom.and_then(|check| check(value, context));
    }

    if let Value::String(text) = value {
        let length = text.trim().chars().count();
        if let Some(min) = rule.min_length {
            if length < min {
                return Some(format!(
                    "{} must be at least {} characters",
                    rule.label, min
                ));
            }
        }
        if let Some(max) = rule.max_length {
            if length > max {
                return Some(format!("{} must not exceed {} characters", rule.label, max));
            }
        }
    }

    if let Some(number) = number_from_value(value) {
        if let Some(min) = rule.min {
            if number < min {
                return Some(format!("{} must be at least {}", rule.label, bound(min)));
            }
        }
        if let Some(max) = rule.max {
            if number > max {
                return Some(format!("{} must not exceed {}", rule.label, bound(max)));
            }
        }
    }

    if let (Some(pattern), Value::String(text)) = (rule.pattern, value) {
        if let Some(regex) = rules::compiled_pattern(pattern.source) {
            if !regex.is_match(text.trim()) {
                return Some(match pattern.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", rule.label),
                });
            }
        }
    }

    rule.custom.and_then(|check| check(value, context))
}

fn bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Field values for the step: `form.steps.<step_id>` when present, else the form itself.
fn step_values(step_id: &str, form_data: &Value) -> Map<String, Value> {
    form_data
        .get("steps")
        .and_then(|steps| steps.get(step_id))
        .and_then(Value::as_object)
        .or_else(|| form_data.as_object())
        .cloned()
        .unwrap_or_default()
}

fn step_context(step_id: &str, form_data: &Value, values: &Map<String, Value>) -> Map<String, Value> {
    let mut context = values.clone();

    if !context.contains_key("flowType") {
        let flow = form_data
            .get("flowType")
            .or_else(|| form_data.get("flow").and_then(|flow| flow.get("flowType")))
            .and_then(Value::as_str)
            .and_then(FlowType::from_hint)
            .or_else(|| FlowType::from_step_id(step_id));
        if let Some(flow) = flow {
            context.insert("flowType".to_string(), Value::from(flow.as_str()));
        }
    }
    context
        .entry("currentStep")
        .or_insert_with(|| Value::from(step_id));

    context
}
