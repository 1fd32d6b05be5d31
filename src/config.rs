//! Environment-based configuration for the remote survey store.

use crate::errors::FetchError;

/// Connection settings for the Supabase REST endpoint.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base project URL, e.g. `https://<project>.supabase.co`.
    pub url: String,
    /// Publishable API key sent as `apikey` and bearer token.
    pub api_key: String,
    /// Table holding survey responses.
    pub table: String,
}

impl StoreConfig {
    /// Read configuration from `SUPABASE_URL` and `SUPABASE_KEY`.
    ///
    /// The table name defaults to `survey_responses` and can be overridden
    /// with `SURVEY_TABLE`.
    pub fn from_env() -> Result<Self, FetchError> {
        let url = require_env("SUPABASE_URL")?;
        let api_key = require_env("SUPABASE_KEY")?;
        let table =
            std::env::var("SURVEY_TABLE").unwrap_or_else(|_| "survey_responses".to_string());
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            table,
        })
    }
}

fn require_env(name: &str) -> Result<String, FetchError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FetchError::MissingConfig {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_is_an_error() {
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_KEY");
        let err = StoreConfig::from_env().unwrap_err();
        assert!(matches!(err, FetchError::MissingConfig { .. }));
    }
}
