use serde::Serialize;

/// Display treatment chosen from a field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Currency,
    Phone,
    Date,
    Boolean,
    Area,
    Capacity,
    Text,
}

const CURRENCY_KEYWORDS: &[&str] = &["price", "rent", "deposit", "cost", "amount", "charge"];
const PHONE_KEYWORDS: &[&str] = &["phone", "mobile", "contact"];
const DATE_KEYWORDS: &[&str] = &["date", "from", "available", "possession"];
const BOOLEAN_KEYWORDS: &[&str] = &[
    "available",
    "negotiable",
    "parking",
    "furnished",
    "lift",
    "security",
];
const AREA_KEYWORDS: &[&str] = &["area", "sqft", "size"];
const CAPACITY_KEYWORDS: &[&str] = &["capacity", "occupancy", "seats"];

/// Maps a field key to its display kind by case-insensitive keyword match.
///
/// Listing keys were never normalized across wizard versions, so the match is
/// deliberately fuzzy and the first keyword family that hits wins.
pub fn classify_field_kind(field_key: &str) -> FieldKind {
    let key = field_key.to_ascii_lowercase();
    let hits = |keywords: &[&str]| keywords.iter().any(|keyword| key.contains(keyword));

    if hits(CURRENCY_KEYWORDS) {
        FieldKind::Currency
    } else if hits(PHONE_KEYWORDS) {
        FieldKind::Phone
    } else if hits(DATE_KEYWORDS) {
        FieldKind::Date
    } else if hits(BOOLEAN_KEYWORDS) {
        FieldKind::Boolean
    } else if hits(AREA_KEYWORDS) {
        FieldKind::Area
    } else if hits(CAPACITY_KEYWORDS) {
        FieldKind::Capacity
    } else {
        FieldKind::Text
    }
}

/// Whether a key also belongs to the yes/no family, used when a date-like key
/// carries a boolean.
pub(crate) fn has_boolean_keyword(field_key: &str) -> bool {
    let key = field_key.to_ascii_lowercase();
    BOOLEAN_KEYWORDS.iter().any(|keyword| key.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_priority() {
        assert_eq!(classify_field_kind("expectedPrice"), FieldKind::Currency);
        assert_eq!(classify_field_kind("securityDeposit"), FieldKind::Currency);
        assert_eq!(classify_field_kind("maintenanceCharges"), FieldKind::Currency);
        assert_eq!(classify_field_kind("contactNumber"), FieldKind::Phone);
        assert_eq!(classify_field_kind("availableFrom"), FieldKind::Date);
        assert_eq!(classify_field_kind("possessionStatus"), FieldKind::Date);
        assert_eq!(classify_field_kind("priceNegotiable"), FieldKind::Currency);
        assert_eq!(classify_field_kind("isNegotiable"), FieldKind::Boolean);
        assert_eq!(classify_field_kind("PARKING"), FieldKind::Boolean);
        assert_eq!(classify_field_kind("builtUpArea"), FieldKind::Area);
        assert_eq!(classify_field_kind("totalSeats"), FieldKind::Capacity);
        assert_eq!(classify_field_kind("amenities"), FieldKind::Text);
    }

    #[test]
    fn boolean_keyword_lookup() {
        assert!(has_boolean_keyword("isAvailable"));
        assert!(has_boolean_keyword("availableFrom"));
        assert!(!has_boolean_keyword("possessionDate"));
    }
}
