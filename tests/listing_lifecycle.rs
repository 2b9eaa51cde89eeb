use listing_flow::listings::{
    detect, parse_records, render_field_value, validate_step, FlowType, PropertyRecord,
    PropertyView,
};
use serde_json::json;

/// A flatmates listing submitted step by step, then read back as an export row.
#[test]
fn submitted_steps_validate_and_render() {
    let steps = json!({
        "res_flat_basic_details": {
            "propertyType": "Apartment",
            "bhkType": "3BHK",
            "floor": 2,
            "totalFloors": 7
        },
        "res_flat_location": {
            "address": "B-12, Green Meadows",
            "locality": "Indiranagar",
            "city": "Bengaluru",
            "state": "Karnataka",
            "pinCode": "560038"
        },
        "res_flat_flatmate_details": {
            "rentAmount": 14000,
            "securityDeposit": 28000,
            "roomType": "Private room",
            "genderPreference": "Any",
            "availableFrom": "2025-10-01"
        },
        "res_flat_features": {
            "furnishing": "Furnished"
        }
    });
    let form = json!({ "steps": steps });

    let features = validate_step("res_flat_features", &form);
    assert_eq!(
        features.errors.get("bathrooms").map(String::as_str),
        Some("Bathrooms is required")
    );

    let mut form = form;
    form["steps"]["res_flat_features"]["bathrooms"] = json!(2);
    for step in FlowType::ResidentialFlatmates.step_ids() {
        let result = validate_step(step, &form);
        assert!(result.is_valid, "{step}: {:?}", result.errors);
    }

    let details = json!({ "steps": form["steps"].clone() }).to_string();
    let csv = format!(
        "id,owner_id,price,property_details\nflat-1,owner-2,14000,\"{}\"\n",
        details.replace('"', "\"\"")
    );
    let records = parse_records(csv.as_bytes()).expect("export parses");
    let record: &PropertyRecord = &records[0];

    assert_eq!(detect(record), FlowType::ResidentialFlatmates);
    let view = PropertyView::build(record);
    assert_eq!(view.headline_price, "₹14,000");
    assert_eq!(
        view.location_line,
        "B-12, Green Meadows, Indiranagar, Bengaluru, Karnataka - 560038"
    );
    assert_eq!(
        render_field_value(&json!("2025-10-01"), "availableFrom"),
        "01/10/2025"
    );
}
