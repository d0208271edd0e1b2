//! Tier (a): the authenticated structured read of the spreadsheet.
//!
//! Only constructed when an API key is configured; the proxy treats its
//! absence as the tier not existing rather than branching at request time.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::proxy::grid_to_csv;

pub struct SheetsApi {
    client: Client,
    sheet_id: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsApi {
    /// Capability-checked constructor: None when no key is configured.
    pub fn from_config(config: &Config, client: &Client) -> Option<Self> {
        let api_key = config.sheets_api_key.clone()?;
        Some(Self {
            client: client.clone(),
            sheet_id: config.sheet_id.clone(),
            api_key,
        })
    }

    /// Read the sheet grid and render it as CSV.
    pub async fn try_fetch(&self) -> Result<String> {
        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/A:L?key={}",
            self.sheet_id, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the sheets values API")?;

        if !response.status().is_success() {
            anyhow::bail!("Sheets API returned status: {}", response.status());
        }

        let range: ValueRange = response
            .json()
            .await
            .context("Sheets API response is not a value range")?;

        if range.values.is_empty() {
            anyhow::bail!("Sheets API returned an empty grid");
        }

        Ok(grid_to_csv(&range.values))
    }
}
