//! Reader for the listing table export (`id,owner_id,price,property_details`).

use super::record::PropertyRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum PropertyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for PropertyImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyImportError::Io(err) => write!(f, "failed to open listing export: {err}"),
            PropertyImportError::Csv(err) => write!(f, "failed to parse listing export: {err}"),
        }
    }
}

impl std::error::Error for PropertyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropertyImportError::Io(err) => Some(err),
            PropertyImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PropertyImportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PropertyImportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub fn parse_records<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, PropertyImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ListingRow>() {
        let row = row?;
        let price = row.price.as_deref().and_then(|raw| raw.trim().parse::<f64>().ok());
        let details = row
            .property_details
            .map(Value::String)
            .unwrap_or(Value::Null);
        records.push(PropertyRecord::new(row.id, row.owner_id, price, &details));
    }

    tracing::debug!(count = records.len(), "parsed listing export");
    Ok(records)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<PropertyRecord>, PropertyImportError> {
    let file = File::open(path)?;
    parse_records(file)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    owner_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    property_details: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
