//! Google Sheets values client
//!
//! Reads a whole tab through the `spreadsheets.values.get` endpoint using an
//! API key.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use shared::Grid;

use super::FeedSource;
use crate::config::SheetsConfig;
use crate::error::{AppError, AppResult};

/// Sheets API client bound to one spreadsheet tab
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    config: SheetsConfig,
}

/// Sheets API response for a value range
#[derive(Debug, Deserialize)]
struct ValueRangeResponse {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl SheetsClient {
    /// Create a new SheetsClient
    pub fn new(config: SheetsConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// URL of the configured tab's values
    pub fn values_url(&self) -> AppResult<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| AppError::Configuration(format!("Invalid sheets base URL: {}", e)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::Configuration("Sheets base URL cannot hold a path".to_string())
            })?;
            segments.pop_if_empty().extend([
                "spreadsheets",
                self.config.location.as_str(),
                "values",
                self.config.sheet_name.as_str(),
            ]);
        }
        url.query_pairs_mut()
            .append_pair("key", &self.config.access_key);
        Ok(url)
    }
}

#[async_trait]
impl FeedSource for SheetsClient {
    async fn fetch_grid(&self) -> AppResult<Grid> {
        if !self.config.is_configured() {
            return Err(AppError::FeedUnavailable(
                "spreadsheet location and access key are not configured".to_string(),
            ));
        }

        let url = self.values_url()?;
        tracing::info!(
            "Fetching certificate sheet {} / {}",
            self.config.location,
            self.config.sheet_name
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::FeedUnavailable(format!("Sheets request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::FeedUnavailable(format!(
                "Failed to fetch sheet data: {} - {}",
                status, body
            )));
        }

        let data: ValueRangeResponse = response.json().await.map_err(|e| {
            AppError::FeedUnavailable(format!("Failed to parse sheet response: {}", e))
        })?;

        let grid = into_grid(data.values);
        tracing::debug!("Sheet returned {} rows", grid.len());
        Ok(grid)
    }
}

/// Stringify cells; formatted values are already strings but numbers and
/// booleans can appear with other render options.
fn into_grid(values: Vec<Vec<Value>>) -> Grid {
    values
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect()
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => (if b { "TRUE" } else { "FALSE" }).to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> SheetsConfig {
        SheetsConfig {
            location: "sheet-123".to_string(),
            access_key: "key&1".to_string(),
            sheet_name: "Certificates".to_string(),
            base_url: "https://sheets.googleapis.com/v4".to_string(),
        }
    }

    #[test]
    fn test_values_url() {
        let client = SheetsClient::new(config()).unwrap();
        assert_eq!(
            client.values_url().unwrap().as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Certificates?key=key%261"
        );
    }

    #[test]
    fn test_values_url_encodes_sheet_name() {
        let client = SheetsClient::new(SheetsConfig {
            sheet_name: "Spring Cohort".to_string(),
            base_url: "https://sheets.googleapis.com/v4/".to_string(),
            ..config()
        })
        .unwrap();
        assert_eq!(
            client.values_url().unwrap().path(),
            "/v4/spreadsheets/sheet-123/values/Spring%20Cohort"
        );
    }

    #[test]
    fn test_response_without_values_is_empty_grid() {
        let data: ValueRangeResponse =
            serde_json::from_value(json!({"range": "Certificates!A1:Z1000"})).unwrap();
        assert!(into_grid(data.values).is_empty());
    }

    #[test]
    fn test_cells_are_stringified() {
        let data: ValueRangeResponse = serde_json::from_value(json!({
            "values": [["Certificate ID", "Is Verified"], ["CERT-1", true], [42, null]]
        }))
        .unwrap();
        let grid = into_grid(data.values);
        assert_eq!(grid[1], vec!["CERT-1", "TRUE"]);
        assert_eq!(grid[2], vec!["42", ""]);
    }

    #[tokio::test]
    async fn test_unconfigured_client_is_unavailable() {
        let client = SheetsClient::new(SheetsConfig::default()).unwrap();
        let err = client.fetch_grid().await.unwrap_err();
        assert!(matches!(err, AppError::FeedUnavailable(_)));
    }
}
