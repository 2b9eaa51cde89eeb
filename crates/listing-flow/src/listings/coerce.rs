//! Loose-typing helpers shared by validation and display.
//!
//! Wizard forms submit numbers as either JSON numbers or strings, and dates in
//! whatever shape the widget of the day produced.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// `null`, blank strings, and empty arrays count as "no value".
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(raw) => raw.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Numeric view of a JSON value; numeric strings are accepted.
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Integer parse that reads the leading digits of a string, so `"12th"` is 12
/// and `"1.5"` is 1. Numbers are truncated toward zero.
pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.is_finite()).map(|n| n.trunc() as i64)),
        Value::String(raw) => leading_integer(raw.trim()),
        _ => None,
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Calendar date carried by a JSON value.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, `YYYY/MM/DD`, naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, and epoch milliseconds.
pub fn date_from_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(number) => number.as_i64().and_then(date_from_millis),
        Value::String(raw) => parse_date(raw),
        _ => None,
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) && trimmed.len() >= 10 {
        return trimmed.parse::<i64>().ok().and_then(date_from_millis);
    }

    None
}

fn date_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!([])));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(false)));
        assert!(!is_blank(&json!({})));
    }

    #[test]
    fn integer_parse_reads_leading_digits() {
        assert_eq!(integer_from_value(&json!("12th")), Some(12));
        assert_eq!(integer_from_value(&json!(" 7 ")), Some(7));
        assert_eq!(integer_from_value(&json!("1.9")), Some(1));
        assert_eq!(integer_from_value(&json!("-2")), Some(-2));
        assert_eq!(integer_from_value(&json!(3.7)), Some(3));
        assert_eq!(integer_from_value(&json!("ground")), None);
        assert_eq!(integer_from_value(&json!(true)), None);
    }

    #[test]
    fn dates_in_wizard_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date");
        assert_eq!(date_from_value(&json!("2025-03-15")), Some(expected));
        assert_eq!(date_from_value(&json!("2025/03/15")), Some(expected));
        assert_eq!(
            date_from_value(&json!("2025-03-15T10:30:00+05:30")),
            Some(expected)
        );
        assert_eq!(date_from_value(&json!("2025-03-15T10:30:00.000")), Some(expected));
        assert_eq!(date_from_value(&json!(1742035800000_i64)), Some(expected));
        assert_eq!(date_from_value(&json!("not-a-date")), None);
        assert_eq!(date_from_value(&json!("2025-02-30")), None);
    }
}
