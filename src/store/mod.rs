//! Remote survey store client (Supabase REST).
//!
//! Fetches rows from the survey table ordered by submission time, with
//! optional level/date/id filters. Rows are returned as raw JSON and decoded
//! one by one at the batch boundary, so a single malformed record is skipped
//! rather than failing the whole fetch.

use serde_json::Value;

use crate::config::StoreConfig;
use crate::errors::FetchError;
use crate::survey::SurveyResponse;

/// Optional filters applied server-side to the fetch.
#[derive(Debug, Clone, Default)]
pub struct ResponseFilter {
    /// School level, e.g. "P3".
    pub level: Option<String>,
    /// Only responses submitted on or after this date (YYYY-MM-DD).
    pub since: Option<String>,
    /// Single respondent UUID.
    pub id: Option<String>,
}

/// REST client for the survey store.
pub struct SurveyStore {
    config: StoreConfig,
    http: reqwest::Client,
}

impl SurveyStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Full request URL for a filter. Exposed for query-construction tests.
    pub fn endpoint(&self, filter: &ResponseFilter) -> String {
        let mut url = format!(
            "{}/rest/v1/{}?select=*&order=submitted_at.asc",
            self.config.url, self.config.table
        );
        if let Some(level) = &filter.level {
            url.push_str(&format!("&q2_level=eq.{level}"));
        }
        if let Some(since) = &filter.since {
            url.push_str(&format!("&submitted_at=gte.{since}"));
        }
        if let Some(id) = &filter.id {
            url.push_str(&format!("&id=eq.{id}"));
        }
        url
    }

    /// Fetch all matching rows as raw JSON values.
    pub async fn fetch_rows(&self, filter: &ResponseFilter) -> Result<Vec<Value>, FetchError> {
        let url = self.endpoint(filter);
        tracing::debug!("fetching {url}");
        let body: Value = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(FetchError::Payload {
                message: format!("expected a JSON array of rows, got {other}"),
            }),
        }
    }
}

/// Decode raw rows into responses, skipping and logging malformed ones.
///
/// Returns the decoded responses and the number of rows skipped.
pub fn decode_rows(rows: Vec<Value>) -> (Vec<SurveyResponse>, usize) {
    let mut responses = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows {
        let id_hint = row
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("<no id>")
            .to_string();
        match SurveyResponse::from_row(row) {
            Ok(response) => responses.push(response),
            Err(err) => {
                skipped += 1;
                tracing::error!("skipping malformed row {id_hint}: {err}");
            }
        }
    }
    (responses, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> SurveyStore {
        SurveyStore::new(StoreConfig {
            url: "https://example.supabase.co".to_string(),
            api_key: "key".to_string(),
            table: "survey_responses".to_string(),
        })
    }

    #[test]
    fn test_endpoint_without_filters() {
        let url = store().endpoint(&ResponseFilter::default());
        assert_eq!(
            url,
            "https://example.supabase.co/rest/v1/survey_responses?select=*&order=submitted_at.asc"
        );
    }

    #[test]
    fn test_endpoint_with_all_filters() {
        let filter = ResponseFilter {
            level: Some("P3".to_string()),
            since: Some("2026-03-01".to_string()),
            id: Some("3fa85f64-5717-4562-b3fc-2c963f66afa6".to_string()),
        };
        let url = store().endpoint(&filter);
        assert!(url.contains("&q2_level=eq.P3"));
        assert!(url.contains("&submitted_at=gte.2026-03-01"));
        assert!(url.contains("&id=eq.3fa85f64-5717-4562-b3fc-2c963f66afa6"));
    }

    #[test]
    fn test_decode_rows_skips_malformed() {
        let rows = vec![
            json!({ "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "q5_flavour": "Sweet" }),
            json!({ "id": "not-a-uuid" }),
            json!({ "id": "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee" }),
        ];
        let (responses, skipped) = decode_rows(rows);
        assert_eq!(responses.len(), 2);
        assert_eq!(skipped, 1);
    }
}
