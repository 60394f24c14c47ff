//! Wire-format mapping.
//!
//! The backend speaks snake_case with Mongo-style `_id`; the in-memory model
//! is the `forge-core` domain types. This module is the single owner of the
//! translation, in both directions. No gateway builds a body or reads a
//! response except through these types.

use forge_core::{Rating, Thesis, ThesisDraft, User};
use serde::{Deserialize, Serialize};

/// A thesis as the server returns it.
///
/// Ratings decode through [`Rating`], so out-of-range server values clamp
/// instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub topic_name: String,
    pub main_area: String,
    #[serde(default)]
    pub secondary_area: Option<String>,
    pub personal_interest: Rating,
    pub business_potential: Rating,
    pub open_source_contribution: Rating,
    pub scientific_value: Rating,
    pub topic_description: String,
    #[serde(default)]
    pub external_links: Option<String>,
    #[serde(default)]
    pub user_id: String,
}

impl From<ThesisRecord> for Thesis {
    fn from(record: ThesisRecord) -> Self {
        Self {
            id: record.id,
            topic_name: record.topic_name,
            main_area: record.main_area,
            secondary_area: record.secondary_area.filter(|s| !s.is_empty()),
            personal_interest: record.personal_interest,
            business_potential: record.business_potential,
            open_source_contribution: record.open_source_contribution,
            scientific_value: record.scientific_value,
            topic_description: record.topic_description,
            external_link: record.external_links.filter(|s| !s.is_empty()),
            owner_id: record.user_id,
        }
    }
}

/// Body of a create submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesisPayload {
    pub topic_name: String,
    pub main_area: String,
    pub secondary_area: Option<String>,
    pub personal_interest: i64,
    pub business_potential: i64,
    pub open_source_contribution: i64,
    pub scientific_value: i64,
    pub topic_description: String,
    pub external_links: Option<String>,
    pub user_id: String,
}

impl ThesisPayload {
    #[must_use]
    pub fn from_draft(draft: &ThesisDraft, owner_id: &str) -> Self {
        Self {
            topic_name: draft.topic_name.clone(),
            main_area: draft.main_area.clone(),
            secondary_area: draft.secondary_area.clone(),
            personal_interest: draft.personal_interest,
            business_potential: draft.business_potential,
            open_source_contribution: draft.open_source_contribution,
            scientific_value: draft.scientific_value,
            topic_description: draft.topic_description.clone(),
            external_links: draft.external_link.clone(),
            user_id: owner_id.to_string(),
        }
    }
}

/// A user profile as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            image: record.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_draft() -> ThesisDraft {
        ThesisDraft {
            topic_name: "Adaptive batch sizing for stream processors".into(),
            main_area: "Distributed Systems".into(),
            secondary_area: Some("Machine Learning".into()),
            personal_interest: 5,
            business_potential: 2,
            open_source_contribution: 4,
            scientific_value: 3,
            topic_description: "Investigating how batch sizes can adapt to load.".into(),
            external_link: Some("https://example.com/paper".into()),
        }
    }

    #[test]
    fn payload_uses_snake_case_wire_names() {
        let payload = ThesisPayload::from_draft(&sample_draft(), "u1");
        let json = serde_json::to_value(&payload).expect("should encode");

        assert_eq!(json["topic_name"], "Adaptive batch sizing for stream processors");
        assert_eq!(json["main_area"], "Distributed Systems");
        assert_eq!(json["secondary_area"], "Machine Learning");
        assert_eq!(json["personal_interest"], 5);
        assert_eq!(json["open_source_contribution"], 4);
        assert_eq!(json["topic_description"], "Investigating how batch sizes can adapt to load.");
        assert_eq!(json["external_links"], "https://example.com/paper");
        assert_eq!(json["user_id"], "u1");
        // The draft has no identifier; the payload must not invent one.
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn record_decodes_wire_names_into_domain() {
        let json = serde_json::json!({
            "_id": "t1",
            "topic_name": "Adaptive batch sizing for stream processors",
            "main_area": "Distributed Systems",
            "secondary_area": "Machine Learning",
            "personal_interest": 5,
            "business_potential": 2,
            "open_source_contribution": 4,
            "scientific_value": 3,
            "topic_description": "Investigating how batch sizes can adapt to load.",
            "external_links": "https://example.com/paper",
            "user_id": "u1"
        });

        let record: ThesisRecord = serde_json::from_value(json).expect("should decode");
        let thesis = Thesis::from(record);
        assert_eq!(thesis.id, "t1");
        assert_eq!(thesis.owner_id, "u1");
        assert_eq!(thesis.personal_interest, Rating::clamped(5));
        assert_eq!(thesis.external_link.as_deref(), Some("https://example.com/paper"));
    }

    #[test]
    fn draft_round_trips_through_the_wire_mapping() {
        let draft = sample_draft();
        let payload = ThesisPayload::from_draft(&draft, "u1");

        // Simulate the server echoing the payload back with an id attached.
        let mut json = serde_json::to_value(&payload).expect("should encode");
        json["_id"] = serde_json::Value::String("t42".into());

        let record: ThesisRecord = serde_json::from_value(json).expect("should decode");
        let thesis = Thesis::from(record);

        assert_eq!(thesis.topic_name, draft.topic_name);
        assert_eq!(thesis.main_area, draft.main_area);
        assert_eq!(thesis.secondary_area, draft.secondary_area);
        assert_eq!(i64::from(thesis.personal_interest.get()), draft.personal_interest);
        assert_eq!(i64::from(thesis.business_potential.get()), draft.business_potential);
        assert_eq!(
            i64::from(thesis.open_source_contribution.get()),
            draft.open_source_contribution
        );
        assert_eq!(i64::from(thesis.scientific_value.get()), draft.scientific_value);
        assert_eq!(thesis.topic_description, draft.topic_description);
        assert_eq!(thesis.external_link, draft.external_link);
        assert_eq!(thesis.id, "t42");
        assert_eq!(thesis.owner_id, "u1");
    }

    #[test]
    fn empty_wire_strings_become_none_in_domain() {
        let json = serde_json::json!({
            "_id": "t1",
            "topic_name": "Some topic name",
            "main_area": "Data Science",
            "secondary_area": "",
            "personal_interest": 3,
            "business_potential": 3,
            "open_source_contribution": 3,
            "scientific_value": 3,
            "topic_description": "A description of sufficient length here.",
            "external_links": "",
            "user_id": "u1"
        });

        let thesis = Thesis::from(serde_json::from_value::<ThesisRecord>(json).expect("decodes"));
        assert_eq!(thesis.secondary_area, None);
        assert_eq!(thesis.external_link, None);
    }

    #[test]
    fn out_of_range_server_ratings_clamp_on_decode() {
        let json = serde_json::json!({
            "_id": "t1",
            "topic_name": "Some topic name",
            "main_area": "Data Science",
            "personal_interest": 0,
            "business_potential": 9,
            "open_source_contribution": 3,
            "scientific_value": 3,
            "topic_description": "A description of sufficient length here.",
            "user_id": "u1"
        });

        let thesis = Thesis::from(serde_json::from_value::<ThesisRecord>(json).expect("decodes"));
        assert_eq!(thesis.personal_interest.get(), 1);
        assert_eq!(thesis.business_potential.get(), 5);
    }

    #[test]
    fn user_record_maps_mongo_id() {
        let json = serde_json::json!({
            "_id": "u1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com"
        });

        let user = User::from(serde_json::from_value::<UserRecord>(json).expect("decodes"));
        assert_eq!(user.id, "u1");
        assert_eq!(user.image, None);
    }
}
