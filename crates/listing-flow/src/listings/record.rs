use super::coerce::number_from_value;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

const ID_KEYS: [&str; 1] = ["id"];
const OWNER_KEYS: [&str; 2] = ["ownerId", "owner_id"];
const PRICE_KEYS: [&str; 1] = ["price"];
const DETAILS_KEYS: [&str; 2] = ["propertyDetails", "property_details"];

/// Property row as stored by the listing backend.
///
/// `property_details` is always an object here: string payloads are decoded on
/// construction and anything unparseable becomes an empty object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: String,
    pub owner_id: String,
    pub price: Option<f64>,
    pub property_details: Map<String, Value>,
    #[serde(skip)]
    extra: Map<String, Value>,
}

impl PropertyRecord {
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        price: Option<f64>,
        property_details: &Value,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            price,
            property_details: normalize_details(property_details),
            extra: Map::new(),
        }
    }

    /// Builds a record from any JSON value. Non-object input yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::new("", "", None, &Value::Null);
        };

        let id = first_key(object, &ID_KEYS)
            .map(scalar_to_string)
            .unwrap_or_default();
        let owner_id = first_key(object, &OWNER_KEYS)
            .map(scalar_to_string)
            .unwrap_or_default();
        let price = first_key(object, &PRICE_KEYS).and_then(number_from_value);
        let property_details = first_key(object, &DETAILS_KEYS)
            .map(normalize_details)
            .unwrap_or_default();

        let extra = object
            .iter()
            .filter(|(key, _)| {
                let key = key.as_str();
                !ID_KEYS.contains(&key)
                    && !OWNER_KEYS.contains(&key)
                    && !PRICE_KEYS.contains(&key)
                    && !DETAILS_KEYS.contains(&key)
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            id,
            owner_id,
            price,
            property_details,
            extra,
        }
    }

    /// Adds a top-level column such as `flowType` or `city`.
    pub fn with_column(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.property_details
    }

    /// Looks up a top-level column other than the id, owner, price, and details fields.
    pub fn column(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn steps(&self) -> Option<&Map<String, Value>> {
        self.property_details.get("steps").and_then(Value::as_object)
    }

    pub fn step(&self, step_id: &str) -> Option<&Map<String, Value>> {
        self.steps()
            .and_then(|steps| steps.get(step_id))
            .and_then(Value::as_object)
    }

    /// A named object directly under `property_details`, e.g. `basicDetails`.
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.property_details.get(name).and_then(Value::as_object)
    }
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self::from_value(&Value::Null)
    }
}

impl<'de> Deserialize<'de> for PropertyRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Coerces `property_details` into an object, decoding JSON strings.
pub fn normalize_details(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                debug!("property_details string did not decode to an object");
                Map::new()
            }
            Err(err) => {
                debug!(error = %err, "property_details string is not valid JSON");
                Map::new()
            }
        },
        _ => Map::new(),
    }
}

fn first_key<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(raw) => raw.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_string_encoded_details() {
        let record = PropertyRecord::from_value(&json!({
            "id": "p-1",
            "owner_id": "u-9",
            "price": "25000",
            "property_details": "{\"flowType\":\"commercial_rent\"}"
        }));

        assert_eq!(record.id, "p-1");
        assert_eq!(record.owner_id, "u-9");
        assert_eq!(record.price, Some(25000.0));
        assert_eq!(
            record.details().get("flowType"),
            Some(&json!("commercial_rent"))
        );
    }

    #[test]
    fn malformed_details_become_empty_object() {
        let record = PropertyRecord::from_value(&json!({
            "id": 42,
            "propertyDetails": "{not json"
        }));

        assert_eq!(record.id, "42");
        assert!(record.details().is_empty());
        assert!(record.steps().is_none());
    }

    #[test]
    fn keeps_unknown_columns_for_fallback_lookups() {
        let record = PropertyRecord::from_value(&json!({
            "id": "p-2",
            "flow_type": "land_sale",
            "city": "Pune"
        }));

        assert_eq!(record.column("flow_type"), Some(&json!("land_sale")));
        assert_eq!(record.column("city"), Some(&json!("Pune")));
        assert!(record.column("id").is_none());
    }

    #[test]
    fn non_object_input_is_an_empty_record() {
        let record: PropertyRecord = serde_json::from_value(json!([1, 2, 3])).expect("decode");
        assert_eq!(record, PropertyRecord::default());
    }
}
