use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::time::Duration;

use crate::config::SaveConfig;
use crate::domain::FieldRecord;

const USER_AGENT: &str = "fieldacre/0.1.0 (https://github.com/fieldacre/fieldacre)";

/// Response from the field-persistence endpoint
#[derive(Debug, Deserialize)]
pub struct SavedField {
    pub id: String,
    #[serde(default)]
    pub area_in_acres: Option<f64>,
}

/// Persist a field record to the configured backend.
///
/// Single POST, no retries; the caller decides whether a failed save is
/// worth repeating.
///
/// # Returns
/// * `Ok(SavedField)` - The stored record's id as assigned by the backend
/// * `Err` - On connection failure or non-success status
pub fn save_field(config: &SaveConfig, record: &FieldRecord) -> Result<SavedField> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to create HTTP client")?;

    let mut request = client.post(&config.endpoint).json(record);
    if let Some(ref token) = config.api_token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .with_context(|| format!("Failed to reach field endpoint: {}", config.endpoint))?;

    if !response.status().is_success() {
        bail!(
            "Field endpoint returned error status {} for '{}'",
            response.status(),
            record.name
        );
    }

    response
        .json()
        .context("Failed to parse field endpoint response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved_field_response() {
        let json = r#"{"id":"f7c1e2","area_in_acres":0.8638}"#;
        let saved: SavedField = serde_json::from_str(json).unwrap();
        assert_eq!(saved.id, "f7c1e2");
        assert!((saved.area_in_acres.unwrap() - 0.8638).abs() < 1e-9);
    }

    #[test]
    fn test_parse_saved_field_without_echo() {
        let saved: SavedField = serde_json::from_str(r#"{"id":"f7c1e2"}"#).unwrap();
        assert!(saved.area_in_acres.is_none());
    }
}
