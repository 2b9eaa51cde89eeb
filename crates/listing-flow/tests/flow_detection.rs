use listing_flow::listings::{detect, DetectionSignal, FlowClassifier, FlowType, PropertyRecord};
use serde_json::json;

#[test]
fn step_prefixes_map_to_every_flow() {
    let cases = [
        ("res_rent_basic_details", FlowType::ResidentialRent),
        ("res_sale_sale_details", FlowType::ResidentialSale),
        ("res_pg_pg_details", FlowType::ResidentialPgHostel),
        ("res_flat_flatmate_details", FlowType::ResidentialFlatmates),
        ("com_rent_rental", FlowType::CommercialRent),
        ("com_sale_location", FlowType::CommercialSale),
        ("com_cow_features", FlowType::CommercialCoworking),
        ("land_sale_land_features", FlowType::LandSale),
    ];

    for (step, expected) in cases {
        let record = PropertyRecord::from_value(&json!({
            "propertyDetails": { "steps": { step: {} } }
        }));
        let detection = FlowClassifier.explain(&record);
        assert_eq!(detection.flow, expected, "step {step}");
        assert_eq!(detection.signal, DetectionSignal::StepPrefix);
    }
}

#[test]
fn string_encoded_details_are_decoded_before_detection() {
    let record = PropertyRecord::from_value(&json!({
        "id": "p-1",
        "propertyDetails": "{\"flowType\":\"commercial_rent\"}"
    }));
    assert_eq!(detect(&record), FlowType::CommercialRent);
}

#[test]
fn flow_hints_tolerate_formatting_noise() {
    let record = PropertyRecord::from_value(&json!({
        "propertyDetails": { "flow": { "flowType": " Residential-Flatmates " } }
    }));
    assert_eq!(detect(&record), FlowType::ResidentialFlatmates);
}

#[test]
fn nothing_recognizable_defaults_to_residential_rent() {
    let detection = FlowClassifier.explain(&PropertyRecord::from_value(&json!({
        "propertyDetails": { "steps": { "wizard_v0_intro": {} } }
    })));
    assert_eq!(detection.flow, FlowType::ResidentialRent);
    assert_eq!(detection.signal, DetectionSignal::Default);
}
