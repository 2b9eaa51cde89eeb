use super::custom;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::error;

/// Predicate run last for a field; receives the value and the step context.
pub type CustomCheck = fn(&Value, &Map<String, Value>) -> Option<String>;

#[derive(Debug, Clone, Copy)]
pub struct FieldPattern {
    pub source: &'static str,
    pub message: Option<&'static str>,
}

/// Static validation specification for one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub label: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<FieldPattern>,
    pub custom: Option<CustomCheck>,
}

impl FieldRule {
    fn required(label: &'static str) -> Self {
        Self {
            label,
            required: true,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            pattern: None,
            custom: None,
        }
    }

    fn optional(label: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(label)
        }
    }

    fn with_length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    fn with_range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    fn with_pattern(self, source: &'static str, message: Option<&'static str>) -> Self {
        Self {
            pattern: Some(FieldPattern { source, message }),
            ..self
        }
    }

    fn with_custom(self, check: CustomCheck) -> Self {
        Self {
            custom: Some(check),
            ..self
        }
    }
}

static FIELD_RULES: OnceLock<HashMap<&'static str, FieldRule>> = OnceLock::new();
static PATTERNS: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();

pub(crate) const PIN_CODE_PATTERN: &str = r"^[1-9][0-9]{5}$";
const MOBILE_PATTERN: &str = r"^(\+91[- ]?)?[6-9][0-9]{9}$";

pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    field_rules().get(field)
}

/// Every field name with a rule, for diagnostics and tests.
pub fn known_fields() -> Vec<&'static str> {
    let mut fields: Vec<_> = field_rules().keys().copied().collect();
    fields.sort_unstable();
    fields
}

/// Compiled pattern for a rule's source. Invalid sources are logged and skipped.
pub(crate) fn compiled_pattern(source: &str) -> Option<&'static Regex> {
    PATTERNS
        .get_or_init(|| {
            let mut compiled = HashMap::new();
            for rule in field_rules().values() {
                let Some(pattern) = rule.pattern else {
                    continue;
                };
                match Regex::new(pattern.source) {
                    Ok(regex) => {
                        compiled.insert(pattern.source, regex);
                    }
                    Err(err) => {
                        error!(pattern = pattern.source, error = %err, "invalid field pattern")
                    }
                }
            }
            compiled
        })
        .get(source)
}

fn field_rules() -> &'static HashMap<&'static str, FieldRule> {
    FIELD_RULES.get_or_init(|| {
        let rules: Vec<(&'static str, FieldRule)> = vec![
            // Basic details
            ("propertyType", FieldRule::required("Property type")),
            ("bhkType", FieldRule::required("BHK type")),
            (
                "floor",
                FieldRule::required("Floor").with_custom(custom::floor),
            ),
            (
                "totalFloors",
                FieldRule::required("Total floors").with_custom(custom::total_floors),
            ),
            (
                "builtUpArea",
                FieldRule::required("Built-up area").with_custom(custom::built_up_area),
            ),
            (
                "carpetArea",
                FieldRule::optional("Carpet area").with_range(1.0, 1_000_000.0),
            ),
            ("propertyAge", FieldRule::required("Property age")),
            ("facing", FieldRule::optional("Facing")),
            // Required-ness is decided per flow and step, see `custom::bathrooms`.
            (
                "bathrooms",
                FieldRule::optional("Bathrooms").with_custom(custom::bathrooms),
            ),
            (
                "balconies",
                FieldRule::optional("Balconies").with_range(0.0, 20.0),
            ),
            ("furnishing", FieldRule::required("Furnishing")),
            // Location
            (
                "address",
                FieldRule::required("Address").with_length(5, 200),
            ),
            (
                "locality",
                FieldRule::required("Locality").with_length(2, 100),
            ),
            (
                "landmark",
                FieldRule::optional("Landmark").with_max_length(100),
            ),
            ("city", FieldRule::required("City").with_length(2, 50)),
            ("state", FieldRule::required("State").with_length(2, 50)),
            (
                "pinCode",
                FieldRule::required("PIN code").with_pattern(
                    PIN_CODE_PATTERN,
                    Some("PIN code must be exactly 6 digits"),
                ),
            ),
            (
                "latitude",
                FieldRule::optional("Latitude").with_range(-90.0, 90.0),
            ),
            (
                "longitude",
                FieldRule::optional("Longitude").with_range(-180.0, 180.0),
            ),
            // Rental terms
            (
                "rentAmount",
                FieldRule::required("Rent amount").with_range(1.0, 10_000_000.0),
            ),
            (
                "securityDeposit",
                FieldRule::required("Security deposit")
                    .with_min(0.0)
                    .with_custom(custom::security_deposit),
            ),
            (
                "maintenanceCharges",
                FieldRule::optional("Maintenance charges").with_min(0.0),
            ),
            ("rentNegotiable", FieldRule::optional("Rent negotiable")),
            (
                "availableFrom",
                FieldRule::required("Available from").with_custom(custom::calendar_date),
            ),
            ("preferredTenants", FieldRule::required("Preferred tenants")),
            ("leaseDuration", FieldRule::required("Lease duration")),
            (
                "lockInPeriod",
                FieldRule::optional("Lock-in period").with_range(0.0, 120.0),
            ),
            // Sale terms
            (
                "expectedPrice",
                FieldRule::required("Expected price").with_range(1.0, 10_000_000_000.0),
            ),
            ("priceNegotiable", FieldRule::optional("Price negotiable")),
            ("ownershipType", FieldRule::required("Ownership type")),
            ("possessionStatus", FieldRule::required("Possession status")),
            (
                "possessionDate",
                FieldRule::optional("Possession date").with_custom(custom::calendar_date),
            ),
            // PG / flatmates
            ("roomType", FieldRule::required("Room type")),
            ("genderPreference", FieldRule::required("Gender preference")),
            (
                "capacity",
                FieldRule::required("Capacity").with_custom(custom::capacity),
            ),
            ("foodIncluded", FieldRule::optional("Food included")),
            // Coworking
            ("spaceType", FieldRule::required("Space type")),
            (
                "totalSeats",
                FieldRule::required("Total seats").with_custom(custom::total_seats),
            ),
            (
                "pricePerSeat",
                FieldRule::required("Price per seat").with_min(1.0),
            ),
            (
                "operatingHours",
                FieldRule::optional("Operating hours").with_max_length(100),
            ),
            // Land
            ("landType", FieldRule::required("Land type")),
            (
                "plotArea",
                FieldRule::required("Plot area").with_custom(custom::plot_area),
            ),
            ("areaUnit", FieldRule::optional("Area unit")),
            (
                "roadWidth",
                FieldRule::optional("Road width").with_range(0.0, 500.0),
            ),
            ("boundaryWall", FieldRule::optional("Boundary wall")),
            // Features
            ("amenities", FieldRule::optional("Amenities")),
            ("parking", FieldRule::optional("Parking")),
            ("powerBackup", FieldRule::optional("Power backup")),
            ("waterSupply", FieldRule::optional("Water supply")),
            (
                "description",
                FieldRule::optional("Description").with_length(30, 2000),
            ),
            (
                "contactNumber",
                FieldRule::optional("Contact number").with_pattern(
                    MOBILE_PATTERN,
                    Some("Contact number must be a valid 10-digit mobile number"),
                ),
            ),
        ];

        rules.into_iter().collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        for field in known_fields() {
            let rule = rule_for(field).expect("rule present");
            if let Some(pattern) = rule.pattern {
                assert!(
                    compiled_pattern(pattern.source).is_some(),
                    "pattern for {field} failed to compile"
                );
            }
        }
    }

    #[test]
    fn bathrooms_is_optional_at_table_level() {
        let rule = rule_for("bathrooms").expect("bathrooms rule");
        assert!(!rule.required);
        assert!(rule.custom.is_some());
    }
}
