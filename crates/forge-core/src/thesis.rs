use serde::{Deserialize, Serialize};

use crate::rating::Rating;

/// A research-proposal record as held in memory.
///
/// The identifier is server-assigned; it never exists before a successful
/// create. Wire-format naming (snake_case, Mongo `_id`) is a gateway concern
/// and lives in `forge-api`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thesis {
    pub id: String,
    pub topic_name: String,
    pub main_area: String,
    pub secondary_area: Option<String>,
    pub personal_interest: Rating,
    pub business_potential: Rating,
    pub open_source_contribution: Rating,
    pub scientific_value: Rating,
    pub topic_description: String,
    pub external_link: Option<String>,
    pub owner_id: String,
}

/// The create/update submission shape: a `Thesis` minus identifier and owner.
///
/// Ratings are raw integers here so that validation can reject out-of-range
/// input instead of silently clamping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisDraft {
    pub topic_name: String,
    pub main_area: String,
    pub secondary_area: Option<String>,
    pub personal_interest: i64,
    pub business_potential: i64,
    pub open_source_contribution: i64,
    pub scientific_value: i64,
    pub topic_description: String,
    pub external_link: Option<String>,
}

impl Default for ThesisDraft {
    fn default() -> Self {
        Self {
            topic_name: String::new(),
            main_area: String::new(),
            secondary_area: None,
            personal_interest: i64::from(Rating::MIDPOINT.get()),
            business_potential: i64::from(Rating::MIDPOINT.get()),
            open_source_contribution: i64::from(Rating::MIDPOINT.get()),
            scientific_value: i64::from(Rating::MIDPOINT.get()),
            topic_description: String::new(),
            external_link: None,
        }
    }
}

impl ThesisDraft {
    /// Pre-populate a draft from an existing thesis (the edit path).
    #[must_use]
    pub fn from_existing(thesis: &Thesis) -> Self {
        Self {
            topic_name: thesis.topic_name.clone(),
            main_area: thesis.main_area.clone(),
            secondary_area: thesis.secondary_area.clone(),
            personal_interest: i64::from(thesis.personal_interest.get()),
            business_potential: i64::from(thesis.business_potential.get()),
            open_source_contribution: i64::from(thesis.open_source_contribution.get()),
            scientific_value: i64::from(thesis.scientific_value.get()),
            topic_description: thesis.topic_description.clone(),
            external_link: thesis.external_link.clone(),
        }
    }
}
