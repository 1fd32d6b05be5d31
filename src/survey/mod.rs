//! Survey response data model.
//!
//! A [`SurveyResponse`] is one respondent's complete set of answers as read
//! from the remote store. Answer fields are kept as loosely-typed JSON so a
//! missing, null, or never-seen field always reads as "no answer" rather
//! than a decode failure; scorers and the layout composer treat absence as a
//! zero/default contribution.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Canonical survey field names.
pub mod fields {
    pub const WHO: &str = "q1_who";
    pub const LEVEL: &str = "q2_level";
    pub const GENDER: &str = "q3_gender";
    pub const TEXTURE: &str = "q4_texture";
    pub const FLAVOUR: &str = "q5_flavour";
    pub const SNACK: &str = "q6_snack";
    pub const SPICY: &str = "q7_spicy";
    pub const FRUIT: &str = "q8_fruit";
    pub const TRIED_NEW: &str = "q9_new";
    pub const NEW_FOOD_REACTION: &str = "q10_new_food";
    pub const VEGETABLES: &str = "q11_veg";
    pub const SUGARY_DRINKS: &str = "q12_drinks";
    pub const FRIED_FOOD: &str = "q13_fried";
    pub const FAMILY_DINNERS: &str = "q14_family";
    pub const BREAKFAST_DAYS: &str = "q16_breakfast";
    pub const SCHOOL_FOOD: &str = "q17_school";
    pub const CUISINES: &str = "q18_cuisine";
    pub const ADVENTUROUS_FOODS: &str = "q19_adv";
    pub const SUBSTITUTE_WILLINGNESS: &str = "q20_substitute";
    pub const INTRODUCED_BY: &str = "q21_intro";
    pub const FOOD_CONVERSATIONS: &str = "q22_convo";
    pub const POST_MEAL_FEELING: &str = "q23_feel";
    pub const HEALTHY_MEANING: &str = "q24_healthy";
    pub const ONE_IMPROVEMENT: &str = "q25_improve";
}

/// One respondent's survey submission. Immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    /// Unique respondent identifier.
    pub id: Uuid,
    /// Submission timestamp, when present on the row.
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Optional contact email for the report mailout.
    #[serde(default)]
    pub email: Option<String>,
    /// All remaining answer fields, keyed by question column name.
    #[serde(flatten)]
    pub answers: HashMap<String, Value>,
}

impl SurveyResponse {
    /// Decode a single row. Used per row at the batch boundary so one
    /// malformed record never aborts the whole batch.
    pub fn from_row(row: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(row)
    }

    /// Single-choice answer for `field`, or `None` when absent, null, or
    /// blank.
    pub fn answer(&self, field: &str) -> Option<&str> {
        match self.answers.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Multi-select answer for `field` as a list of non-empty strings.
    /// Absent, null, or non-array values read as an empty list.
    pub fn answer_list(&self, field: &str) -> Vec<&str> {
        match self.answers.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.trim().is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// School level (e.g. "P3"), when answered.
    pub fn level(&self) -> Option<&str> {
        self.answer(fields::LEVEL)
    }

    /// First 8 hex characters of the id, used in output file names.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// Trimmed email, when present and non-blank.
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use serde_json::json;

    /// Build a response from `(field, value)` pairs for tests.
    pub fn response_with(pairs: &[(&str, Value)]) -> SurveyResponse {
        let mut answers = HashMap::new();
        for (field, value) in pairs {
            answers.insert((*field).to_string(), value.clone());
        }
        SurveyResponse {
            id: Uuid::new_v4(),
            submitted_at: None,
            email: None,
            answers,
        }
    }

    /// A representative, fully-answered response.
    pub fn sample_response() -> SurveyResponse {
        response_with(&[
            (fields::WHO, json!("Child with parent")),
            (fields::LEVEL, json!("P4")),
            (fields::GENDER, json!("Girl")),
            (fields::TEXTURE, json!("Crunchy & Crispy")),
            (fields::FLAVOUR, json!("Savoury / Umami")),
            (fields::SNACK, json!("Seaweed Snack")),
            (fields::TRIED_NEW, json!("Yes, definitely!")),
            (fields::NEW_FOOD_REACTION, json!("Ask what it is first")),
            (fields::CUISINES, json!(["Japanese", "Thai", "Indian"])),
            (fields::ADVENTUROUS_FOODS, json!(["Sushi", "Kimchi"])),
            (fields::SUBSTITUTE_WILLINGNESS, json!("Definitely yes!")),
            (fields::HEALTHY_MEANING, json!(["Eating more vegetables"])),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_row_decodes_flattened_answers() {
        let row = json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "submitted_at": "2026-03-14T08:30:00Z",
            "email": "kid@example.com",
            "q5_flavour": "Sweet",
            "q18_cuisine": ["Japanese", "Thai"],
        });
        let resp = SurveyResponse::from_row(row).unwrap();
        assert_eq!(resp.answer(fields::FLAVOUR), Some("Sweet"));
        assert_eq!(resp.answer_list(fields::CUISINES), vec!["Japanese", "Thai"]);
        assert_eq!(resp.short_id(), "3fa85f64");
        assert!(resp.submitted_at.is_some());
    }

    #[test]
    fn test_missing_and_null_fields_read_as_absent() {
        let row = json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "q5_flavour": null,
            "q6_snack": "",
        });
        let resp = SurveyResponse::from_row(row).unwrap();
        assert_eq!(resp.answer(fields::FLAVOUR), None);
        assert_eq!(resp.answer(fields::SNACK), None);
        assert_eq!(resp.answer(fields::TEXTURE), None);
        assert!(resp.answer_list(fields::CUISINES).is_empty());
    }

    #[test]
    fn test_malformed_row_is_a_decode_error() {
        let row = json!({ "id": "not-a-uuid" });
        assert!(SurveyResponse::from_row(row).is_err());
    }

    #[test]
    fn test_email_blank_is_none() {
        let row = json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "email": "   ",
        });
        let resp = SurveyResponse::from_row(row).unwrap();
        assert_eq!(resp.email(), None);
    }
}
