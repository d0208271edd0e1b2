//! Tier-1 listing source: the CSV proxy endpoint.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::models::Listing;
use crate::sources::csv::parse_listing_rows;
use crate::sources::traits::ListingSource;

/// Fetches the CSV that the sheet proxy serves and parses it into listings.
pub struct SheetSource {
    client: Client,
    url: String,
}

impl SheetSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl ListingSource for SheetSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Fetching listing CSV from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch listing CSV")?;

        if !response.status().is_success() {
            anyhow::bail!("Listing endpoint returned status: {}", response.status());
        }

        let body = response.text().await.context("Failed to read CSV body")?;

        // The upstream export intermittently serves a login/consent page
        // instead of data; treat any HTML-looking body as a failed tier.
        if is_html_document(&body) {
            anyhow::bail!("Listing endpoint served an HTML document instead of CSV");
        }

        Ok(parse_listing_rows(&body))
    }

    fn source_name(&self) -> &'static str {
        "sheet-proxy"
    }
}

/// Content sniff for the silent-HTML failure mode.
pub fn is_html_document(body: &str) -> bool {
    let head: String = body.chars().take(512).collect::<String>().to_lowercase();
    head.contains("<!doctype") || head.contains("<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_sniff() {
        assert!(is_html_document("<!DOCTYPE html><html><body>로그인</body></html>"));
        assert!(is_html_document("\n  <html lang=\"ko\">"));
        assert!(!is_html_document(",단지명,동\n,단지A,101동"));
    }
}
