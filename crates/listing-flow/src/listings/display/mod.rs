//! Locale-aware rendering of listing field values.
//!
//! Rendering is total: anything that cannot be shown degrades to a placeholder
//! so a half-filled historical record never breaks a listing page.

mod format;
mod kind;

pub use format::{boolean_like, group_indian, grouped_integer, humanize_key, plain_number};
pub use kind::{classify_field_kind, FieldKind};

use super::coerce::{date_from_value, integer_from_value, is_blank, number_from_value};
use crate::config::DisplayConfig;
use format::{truthy_keys, yes_no};
use kind::has_boolean_keyword;
use serde_json::Value;
use std::sync::OnceLock;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const INVALID_DATE: &str = "Invalid date";

/// Renders values with a fixed set of locale settings.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: DisplayConfig,
}

impl Formatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Renders `value` using the treatment implied by `field_key`.
    pub fn render(&self, value: &Value, field_key: &str) -> String {
        let kind = classify_field_kind(field_key);

        if let Some(flag) = self.boolean_override(kind, field_key, value) {
            return yes_no(flag).to_string();
        }

        match kind {
            FieldKind::Currency => self.currency(value),
            FieldKind::Phone => self.phone(value),
            FieldKind::Date => self.date(value),
            FieldKind::Area => self.area(value, None),
            FieldKind::Capacity => self.capacity(value),
            FieldKind::Boolean | FieldKind::Text => self.text(value),
        }
    }

    fn boolean_override(&self, kind: FieldKind, field_key: &str, value: &Value) -> Option<bool> {
        match (kind, value) {
            // A JSON boolean is never a price or a date.
            (FieldKind::Currency | FieldKind::Date | FieldKind::Boolean, Value::Bool(flag)) => {
                Some(*flag)
            }
            (FieldKind::Boolean, _) => boolean_like(value),
            (FieldKind::Currency | FieldKind::Date, Value::String(_))
                if has_boolean_keyword(field_key) =>
            {
                boolean_like(value)
            }
            _ => None,
        }
    }

    /// `₹15,00,000`; anything non-numeric renders as zero.
    pub fn currency(&self, value: &Value) -> String {
        let amount = number_from_value(value).unwrap_or(0.0);
        let grouped = grouped_integer(amount.abs());
        if amount.round() < 0.0 {
            format!("-{}{}", self.config.currency_symbol, grouped)
        } else {
            format!("{}{}", self.config.currency_symbol, grouped)
        }
    }

    /// `+91 98765 43210` for national or country-prefixed numbers, else the input as given.
    pub fn phone(&self, value: &Value) -> String {
        let raw = match value {
            Value::String(raw) if !raw.trim().is_empty() => raw.clone(),
            Value::Number(number) => number.to_string(),
            _ => return self.text(value),
        };

        let code = &self.config.phone_country_code;
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let national = if digits.len() == 10 {
            Some(digits.as_str())
        } else if digits.len() == 10 + code.len() && digits.starts_with(code.as_str()) {
            Some(&digits[code.len()..])
        } else {
            None
        };

        match national {
            Some(number) => format!("+{} {} {}", code, &number[..5], &number[5..]),
            None => raw,
        }
    }

    /// `DD/MM/YYYY`, `Not specified` when absent, `Invalid date` when unparseable.
    pub fn date(&self, value: &Value) -> String {
        if is_blank(value) {
            return NOT_SPECIFIED.to_string();
        }
        match date_from_value(value) {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Grouped whole number with a unit suffix; `unit` overrides the configured default.
    pub fn area(&self, value: &Value, unit: Option<&str>) -> String {
        let area = number_from_value(value)
            .or_else(|| integer_from_value(value).map(|n| n as f64))
            .filter(|area| *area > 0.0);
        let unit = unit
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .unwrap_or(self.config.area_unit.as_str());

        match area {
            Some(area) => format!("{} {}", grouped_integer(area), unit),
            None => self.config.placeholder.clone(),
        }
    }

    /// `1 Person` / `N Persons`.
    pub fn capacity(&self, value: &Value) -> String {
        match integer_from_value(value) {
            Some(1) => "1 Person".to_string(),
            Some(count) if count > 1 => format!("{count} Persons"),
            _ => self.config.placeholder.clone(),
        }
    }

    /// Generic rendering; empty, zero, and empty collections collapse to the placeholder.
    pub fn text(&self, value: &Value) -> String {
        let rendered = match value {
            Value::Null => String::new(),
            Value::Bool(flag) => yes_no(*flag).to_string(),
            Value::Number(number) => match number.as_f64() {
                Some(n) if n != 0.0 => plain_number(n),
                _ => String::new(),
            },
            Value::String(raw) => raw.trim().to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| self.text(item))
                .filter(|item| *item != self.config.placeholder)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Object(map) => truthy_keys(map).join(", "),
        };

        if rendered.is_empty() {
            self.config.placeholder.clone()
        } else {
            rendered
        }
    }
}

fn default_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();
    FORMATTER.get_or_init(Formatter::default)
}

/// Renders a field value with the default (Indian) locale settings.
pub fn render_field_value(value: &Value, field_key: &str) -> String {
    default_formatter().render(value, field_key)
}
