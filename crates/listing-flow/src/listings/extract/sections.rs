use super::FieldLocator;
use crate::listings::coerce::{integer_from_value, number_from_value};
use crate::listings::display::{boolean_like, humanize_key};
use crate::listings::domain::FlowType;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationDetails {
    pub address: Option<String>,
    pub locality: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationDetails {
    /// `address, locality, city, state - pin`, skipping missing parts.
    pub fn display_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.locality, &self.city, &self.state]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();

        match (parts.is_empty(), &self.pin_code) {
            (true, None) => None,
            (true, Some(pin)) => Some(pin.clone()),
            (false, None) => Some(parts.join(", ")),
            (false, Some(pin)) => Some(format!("{} - {}", parts.join(", "), pin)),
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

pub fn location(locator: &FieldLocator<'_>) -> LocationDetails {
    let step = locator.step_named("location");
    let text = |keys: &[&str]| lookup(locator, step, keys).and_then(|value| text_value(&value));
    let coordinate = |keys: &[&str]| lookup(locator, step, keys).and_then(|v| number_from_value(&v));

    LocationDetails {
        address: text(&["address", "fullAddress", "streetAddress"]),
        locality: text(&["locality", "subLocality", "neighbourhood"]),
        landmark: text(&["landmark"]),
        city: text(&["city"]),
        state: text(&["state"]),
        pin_code: text(&["pinCode", "pincode", "pin_code", "zipCode"]),
        latitude: coordinate(&["latitude", "lat"]),
        longitude: coordinate(&["longitude", "lng", "lon"]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pricing {
    pub label: &'static str,
    pub key: &'static str,
    pub amount: f64,
    pub security_deposit: Option<f64>,
    pub maintenance: Option<f64>,
    pub negotiable: Option<bool>,
}

struct Headline {
    label: &'static str,
    key: &'static str,
    aliases: &'static [&'static str],
}

fn headline_for(flow: FlowType) -> Headline {
    match flow {
        FlowType::CommercialCoworking => Headline {
            label: "Price per Seat",
            key: "pricePerSeat",
            aliases: &["pricePerSeat", "seatPrice", "rentAmount"],
        },
        flow if flow.is_sale() => Headline {
            label: "Expected Price",
            key: "expectedPrice",
            aliases: &["expectedPrice", "salePrice", "price"],
        },
        _ => Headline {
            label: "Monthly Rent",
            key: "rentAmount",
            aliases: &["rentAmount", "monthlyRent", "rent"],
        },
    }
}

/// Headline price and surrounding charges; missing amounts resolve to zero.
pub fn pricing(locator: &FieldLocator<'_>) -> Pricing {
    let flow = locator.flow();
    let headline = headline_for(flow);
    let step = flow.pricing_step();

    let amount = locator
        .find_price(step, headline.aliases)
        .and_then(|value| number_from_value(&value))
        .unwrap_or(0.0);
    let number = |keys: &[&str]| {
        locator
            .find_in(step, keys)
            .and_then(|value| number_from_value(&value))
    };
    let negotiable = locator
        .find_in(step, &["rentNegotiable", "priceNegotiable", "negotiable"])
        .and_then(|value| boolean_like(&value));

    Pricing {
        label: headline.label,
        key: headline.key,
        amount,
        security_deposit: number(&["securityDeposit", "deposit"]),
        maintenance: number(&["maintenanceCharges", "maintenance", "maintenanceCost"]),
        negotiable,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoomDetails {
    pub property_type: Option<String>,
    pub bhk_type: Option<String>,
    pub room_type: Option<String>,
    pub bathrooms: Option<i64>,
    pub balconies: Option<i64>,
    pub floor: Option<String>,
    pub total_floors: Option<i64>,
    pub built_up_area: Option<f64>,
    pub area_unit: Option<String>,
    pub capacity: Option<i64>,
}

pub fn room_details(locator: &FieldLocator<'_>) -> RoomDetails {
    let basic = locator.step_named("basic_details");
    let features = locator.step_named("features");
    let text = |step: Option<&str>, keys: &[&str]| {
        lookup(locator, step, keys).and_then(|value| text_value(&value))
    };
    let integer = |step: Option<&str>, keys: &[&str]| {
        lookup(locator, step, keys).and_then(|value| integer_from_value(&value))
    };

    let area_keys: &[&str] = if locator.flow() == FlowType::LandSale {
        &["plotArea", "landArea", "area"]
    } else {
        &["builtUpArea", "superBuiltUpArea", "carpetArea", "area"]
    };

    RoomDetails {
        property_type: text(basic, &["propertyType"]),
        bhk_type: text(basic, &["bhkType", "bhk"]),
        room_type: text(basic, &["roomType", "sharingType"]),
        bathrooms: integer(features.or(basic), &["bathrooms", "bathroomCount"]),
        balconies: integer(features.or(basic), &["balconies", "balconyCount"]),
        floor: text(basic, &["floor", "floorNumber"]),
        total_floors: integer(basic, &["totalFloors", "floors"]),
        built_up_area: lookup(locator, basic, area_keys).and_then(|value| {
            number_from_value(&value).or_else(|| integer_from_value(&value).map(|n| n as f64))
        }),
        area_unit: text(basic, &["areaUnit", "unit"]),
        capacity: integer(None, &["capacity", "occupancy", "totalSeats"]),
    }
}

/// Amenity names from arrays, flag objects, or comma-separated strings.
pub fn amenities(locator: &FieldLocator<'_>) -> Vec<String> {
    let step = locator.step_named("features");
    let Some(value) = lookup(locator, step, &["amenities", "facilities"]) else {
        return Vec::new();
    };

    let names: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name.trim().to_string()),
                Value::Object(entry) => entry
                    .get("name")
                    .or_else(|| entry.get("label"))
                    .and_then(Value::as_str)
                    .map(|name| name.trim().to_string()),
                _ => None,
            })
            .collect(),
        Value::Object(flags) => flags
            .iter()
            .filter(|(_, enabled)| {
                boolean_like(enabled).unwrap_or(false) || enabled.as_f64().unwrap_or(0.0) > 0.0
            })
            .map(|(name, _)| humanize_key(name))
            .collect(),
        Value::String(list) => list.split(',').map(|name| name.trim().to_string()).collect(),
        _ => Vec::new(),
    };

    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        if !name.is_empty() && !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

fn lookup(locator: &FieldLocator<'_>, step: Option<&str>, keys: &[&str]) -> Option<Value> {
    match step {
        Some(step) => locator.find_in(step, keys),
        None => locator.find(keys),
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw.trim().to_string()).filter(|raw| !raw.is_empty()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
