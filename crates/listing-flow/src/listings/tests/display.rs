use serde_json::{json, Value};

use crate::config::DisplayConfig;
use crate::listings::display::{classify_field_kind, render_field_value, FieldKind, Formatter};

#[test]
fn currency_rendering_is_deterministic() {
    let first = render_field_value(&json!(1500000), "expectedPrice");
    let second = render_field_value(&json!(1500000), "expectedPrice");
    assert_eq!(first, "₹15,00,000");
    assert_eq!(first, second);
}

#[test]
fn missing_and_malformed_values_degrade_to_placeholders() {
    assert_eq!(render_field_value(&Value::Null, "availableFrom"), "Not specified");
    assert_eq!(render_field_value(&json!("not-a-date"), "availableFrom"), "Invalid date");
    assert_eq!(render_field_value(&Value::Null, "amenities"), "-");
    assert_eq!(render_field_value(&json!({ "weird": [1, 2] }), "rentAmount"), "₹0");
}

#[test]
fn keyword_priority_follows_dispatch_order() {
    // "availableRent" hits the currency family before the date family.
    assert_eq!(classify_field_kind("availableRent"), FieldKind::Currency);
    assert_eq!(classify_field_kind("contactDate"), FieldKind::Phone);
    assert_eq!(classify_field_kind("availableFrom"), FieldKind::Date);
    assert_eq!(classify_field_kind("LIFT"), FieldKind::Boolean);
    assert_eq!(classify_field_kind("facing"), FieldKind::Text);
}

#[test]
fn epoch_millis_render_as_calendar_dates() {
    // 2024-03-15T00:00:00Z
    assert_eq!(
        render_field_value(&json!(1710460800000_i64), "possessionDate"),
        "15/03/2024"
    );
}

#[test]
fn configured_formatter_keeps_the_same_dispatch() {
    let formatter = Formatter::new(DisplayConfig {
        currency_symbol: "$".to_string(),
        ..DisplayConfig::default()
    });

    assert_eq!(formatter.render(&json!(1500000), "expectedPrice"), "$15,00,000");
    assert_eq!(formatter.render(&json!("yes"), "parking"), "Yes");
    assert_eq!(formatter.render(&Value::Null, "availableFrom"), "Not specified");
}
