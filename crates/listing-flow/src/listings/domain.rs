use serde::{Deserialize, Serialize};
use std::fmt;

/// The listing wizards a property record can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowType {
    ResidentialRent,
    ResidentialSale,
    #[serde(rename = "residential_pghostel")]
    ResidentialPgHostel,
    ResidentialFlatmates,
    CommercialRent,
    CommercialSale,
    CommercialCoworking,
    LandSale,
}

impl FlowType {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::ResidentialRent,
            Self::ResidentialSale,
            Self::ResidentialPgHostel,
            Self::ResidentialFlatmates,
            Self::CommercialRent,
            Self::CommercialSale,
            Self::CommercialCoworking,
            Self::LandSale,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ResidentialRent => "residential_rent",
            Self::ResidentialSale => "residential_sale",
            Self::ResidentialPgHostel => "residential_pghostel",
            Self::ResidentialFlatmates => "residential_flatmates",
            Self::CommercialRent => "commercial_rent",
            Self::CommercialSale => "commercial_sale",
            Self::CommercialCoworking => "commercial_coworking",
            Self::LandSale => "land_sale",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ResidentialRent => "Residential Rent",
            Self::ResidentialSale => "Residential Sale",
            Self::ResidentialPgHostel => "PG/Hostel",
            Self::ResidentialFlatmates => "Flatmates",
            Self::CommercialRent => "Commercial Rent",
            Self::CommercialSale => "Commercial Sale",
            Self::CommercialCoworking => "Coworking",
            Self::LandSale => "Land Sale",
        }
    }

    /// Step-id prefix shared by every wizard step of the flow.
    pub const fn step_prefix(self) -> &'static str {
        match self {
            Self::ResidentialRent => "res_rent_",
            Self::ResidentialSale => "res_sale_",
            Self::ResidentialPgHostel => "res_pg_",
            Self::ResidentialFlatmates => "res_flat_",
            Self::CommercialRent => "com_rent_",
            Self::CommercialSale => "com_sale_",
            Self::CommercialCoworking => "com_cow_",
            Self::LandSale => "land_sale_",
        }
    }

    /// Wizard steps in the order the listing form presents them.
    pub const fn step_ids(self) -> &'static [&'static str] {
        match self {
            Self::ResidentialRent => &[
                "res_rent_basic_details",
                "res_rent_location",
                "res_rent_features",
            ],
            Self::ResidentialSale => &[
                "res_sale_basic_details",
                "res_sale_location",
                "res_sale_sale_details",
                "res_sale_features",
            ],
            Self::ResidentialPgHostel => &[
                "res_pg_basic_details",
                "res_pg_location",
                "res_pg_pg_details",
                "res_pg_features",
            ],
            Self::ResidentialFlatmates => &[
                "res_flat_basic_details",
                "res_flat_location",
                "res_flat_flatmate_details",
                "res_flat_features",
            ],
            Self::CommercialRent => &[
                "com_rent_basic_details",
                "com_rent_location",
                "com_rent_rental",
                "com_rent_features",
            ],
            Self::CommercialSale => &[
                "com_sale_basic_details",
                "com_sale_location",
                "com_sale_sale_details",
                "com_sale_features",
            ],
            Self::CommercialCoworking => &[
                "com_cow_basic_details",
                "com_cow_location",
                "com_cow_features",
            ],
            Self::LandSale => &[
                "land_sale_basic_details",
                "land_sale_location",
                "land_sale_land_features",
            ],
        }
    }

    /// Step that carries the headline price for the flow.
    pub const fn pricing_step(self) -> &'static str {
        match self {
            Self::ResidentialRent => "res_rent_features",
            Self::ResidentialSale => "res_sale_sale_details",
            Self::ResidentialPgHostel => "res_pg_pg_details",
            Self::ResidentialFlatmates => "res_flat_flatmate_details",
            Self::CommercialRent => "com_rent_rental",
            Self::CommercialSale => "com_sale_sale_details",
            Self::CommercialCoworking => "com_cow_features",
            Self::LandSale => "land_sale_basic_details",
        }
    }

    pub const fn is_sale(self) -> bool {
        matches!(
            self,
            Self::ResidentialSale | Self::CommercialSale | Self::LandSale
        )
    }

    /// Parses a flow hint, tolerating case, dashes, and spaces.
    pub fn from_hint(raw: &str) -> Option<Self> {
        let normalized = raw
            .trim()
            .to_ascii_lowercase()
            .replace(['-', ' '], "_");
        Self::ordered()
            .into_iter()
            .find(|flow| flow.as_str() == normalized)
    }

    /// Longest-prefix match of a step id against the known flow prefixes.
    pub fn from_step_id(step_id: &str) -> Option<Self> {
        // `res_pg_` and `res_flat_` are checked before the shorter residential prefixes.
        const PREFIXES: [(&str, FlowType); 8] = [
            ("res_pg_", FlowType::ResidentialPgHostel),
            ("res_flat_", FlowType::ResidentialFlatmates),
            ("res_rent_", FlowType::ResidentialRent),
            ("res_sale_", FlowType::ResidentialSale),
            ("com_rent_", FlowType::CommercialRent),
            ("com_sale_", FlowType::CommercialSale),
            ("com_cow_", FlowType::CommercialCoworking),
            ("land_sale_", FlowType::LandSale),
        ];

        PREFIXES
            .iter()
            .find(|(prefix, _)| step_id.starts_with(prefix))
            .map(|(_, flow)| *flow)
    }
}

impl Default for FlowType {
    fn default() -> Self {
        Self::ResidentialRent
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
