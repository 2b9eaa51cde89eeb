use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_RULE_SET: &str = "default";

const LOCATION_FIELDS: &[&str] = &["address", "locality", "city", "state", "pinCode"];

/// Fields checked per wizard step, in the order the form lays them out.
///
/// This table is shared with the listing wizard; changing an entry changes
/// which submissions are blocked.
const STEP_FIELDS: &[(&str, &[&str])] = &[
    (
        "res_rent_basic_details",
        &["propertyType", "bhkType", "floor", "totalFloors", "builtUpArea", "propertyAge"],
    ),
    ("res_rent_location", LOCATION_FIELDS),
    (
        "res_rent_features",
        &["rentAmount", "securityDeposit", "availableFrom", "furnishing", "preferredTenants", "bathrooms"],
    ),
    (
        "res_sale_basic_details",
        &["propertyType", "bhkType", "floor", "totalFloors", "builtUpArea", "propertyAge", "bathrooms"],
    ),
    ("res_sale_location", LOCATION_FIELDS),
    (
        "res_sale_sale_details",
        &["expectedPrice", "ownershipType", "possessionStatus", "possessionDate"],
    ),
    ("res_sale_features", &["furnishing", "bathrooms"]),
    (
        "res_pg_basic_details",
        &["propertyType", "roomType", "genderPreference"],
    ),
    ("res_pg_location", LOCATION_FIELDS),
    (
        "res_pg_pg_details",
        &["rentAmount", "securityDeposit", "capacity", "availableFrom"],
    ),
    ("res_pg_features", &["furnishing", "bathrooms"]),
    (
        "res_flat_basic_details",
        &["propertyType", "bhkType", "floor", "totalFloors"],
    ),
    ("res_flat_location", LOCATION_FIELDS),
    (
        "res_flat_flatmate_details",
        &["rentAmount", "securityDeposit", "roomType", "genderPreference", "availableFrom"],
    ),
    ("res_flat_features", &["furnishing", "bathrooms"]),
    (
        "com_rent_basic_details",
        &["propertyType", "builtUpArea", "floor", "totalFloors", "propertyAge"],
    ),
    ("com_rent_location", LOCATION_FIELDS),
    (
        "com_rent_rental",
        &["rentAmount", "securityDeposit", "leaseDuration", "availableFrom"],
    ),
    ("com_rent_features", &["furnishing", "bathrooms"]),
    (
        "com_sale_basic_details",
        &["propertyType", "builtUpArea", "floor", "totalFloors", "propertyAge"],
    ),
    ("com_sale_location", LOCATION_FIELDS),
    (
        "com_sale_sale_details",
        &["expectedPrice", "ownershipType", "possessionStatus"],
    ),
    ("com_sale_features", &["furnishing", "bathrooms"]),
    (
        "com_cow_basic_details",
        &["propertyType", "spaceType", "totalSeats"],
    ),
    ("com_cow_location", LOCATION_FIELDS),
    (
        "com_cow_features",
        &["pricePerSeat", "availableFrom", "operatingHours"],
    ),
    (
        "land_sale_basic_details",
        &["propertyType", "landType", "plotArea", "expectedPrice"],
    ),
    ("land_sale_location", LOCATION_FIELDS),
    (
        "land_sale_land_features",
        &["roadWidth", "boundaryWall", "description"],
    ),
];

const DEFAULT_FIELDS: &[&str] = &["propertyType", "address", "city", "state"];

static STEP_MAP: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();

/// Field list for a recognized step id.
pub fn fields_for(step_id: &str) -> Option<&'static [&'static str]> {
    STEP_MAP
        .get_or_init(|| STEP_FIELDS.iter().copied().collect())
        .get(step_id)
        .copied()
}

/// Fields applied to step ids missing from the table.
pub fn default_fields() -> &'static [&'static str] {
    DEFAULT_FIELDS
}

pub fn known_steps() -> impl Iterator<Item = &'static str> {
    STEP_FIELDS.iter().map(|(step, _)| *step)
}
