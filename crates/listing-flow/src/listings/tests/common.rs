use axum::response::Response;
use serde_json::{json, Value};

use crate::listings::record::PropertyRecord;

pub(super) fn rent_record() -> PropertyRecord {
    PropertyRecord::from_value(&json!({
        "id": "prop-rent-1",
        "ownerId": "owner-7",
        "price": 18000,
        "propertyDetails": {
            "steps": {
                "res_rent_basic_details": {
                    "propertyType": "Apartment",
                    "bhkType": "2BHK",
                    "floor": 3,
                    "totalFloors": 12,
                    "builtUpArea": 1150,
                    "propertyAge": "1-3 years"
                },
                "res_rent_location": {
                    "address": "Flat 302, Sunshine Residency",
                    "locality": "Kothrud",
                    "city": "Pune",
                    "state": "Maharashtra",
                    "pinCode": "411038"
                },
                "res_rent_features": {
                    "rentAmount": 22000,
                    "securityDeposit": 66000,
                    "availableFrom": "2025-08-01",
                    "furnishing": "Semi-furnished",
                    "preferredTenants": "Family",
                    "bathrooms": 2,
                    "parking": "yes",
                    "amenities": ["Lift", "Power Backup", "Lift"]
                }
            }
        }
    }))
}

pub(super) fn sale_record() -> PropertyRecord {
    PropertyRecord::from_value(&json!({
        "id": "prop-sale-1",
        "owner_id": "owner-9",
        "property_details": {
            "flow": { "flowType": "residential_sale" },
            "steps": {
                "res_sale_basic_details": {
                    "propertyType": "Villa",
                    "bhkType": "4BHK",
                    "builtUpArea": 3200,
                    "areaUnit": "sqft"
                },
                "res_sale_location": {
                    "locality": "Whitefield",
                    "city": "Bengaluru"
                },
                "res_sale_sale_details": {
                    "expectedPrice": 15000000,
                    "priceNegotiable": true,
                    "possessionDate": "2026-01-15"
                }
            }
        }
    }))
}

pub(super) fn coworking_record() -> PropertyRecord {
    PropertyRecord::from_value(&json!({
        "id": "prop-cow-1",
        "owner_id": "owner-3",
        "property_details": {
            "coworkingDetails": { "totalSeats": 40 },
            "location": { "city": "Hyderabad", "locality": "HITEC City" },
            "pricePerSeat": 7500
        }
    }))
}

/// Pre-steps record carrying its details as a JSON string.
pub(super) fn legacy_land_record() -> PropertyRecord {
    let details = json!({
        "basicDetails": { "propertyType": "Land", "plotArea": 2400 },
        "location": { "city": "Nashik", "pinCode": "422001" }
    })
    .to_string();
    PropertyRecord::new("prop-land-1", "owner-1", Some(3_500_000.0), &Value::String(details))
}

pub(super) fn location_form(address: &str) -> Value {
    json!({
        "steps": {
            "res_rent_location": {
                "address": address,
                "city": "Pune",
                "state": "MH",
                "pinCode": "411001",
                "locality": "Kothrud"
            }
        }
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn json_request(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request builds")
}
