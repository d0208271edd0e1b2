//! Tier (b): the anonymous CSV-export fetch, retried with backoff.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::warn;

const EXPORT_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Fetch the sheet's CSV export, retrying up to three times with 1s/2s/4s
/// backoff. Each attempt's body is sniffed; auth/consent HTML served in
/// place of data counts as a failed attempt.
pub async fn fetch_export_csv(client: &Client, url: &str) -> Result<String> {
    let mut backoff = INITIAL_BACKOFF;
    let mut last_error = None;

    for attempt in 1..=EXPORT_ATTEMPTS {
        match fetch_once(client, url).await {
            Ok(csv) => return Ok(csv),
            Err(e) => {
                if attempt < EXPORT_ATTEMPTS {
                    warn!(
                        "Sheet export attempt {attempt}/{EXPORT_ATTEMPTS} failed: {e:#}, retrying in {}s",
                        backoff.as_secs()
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow::anyhow!("sheet export fetch failed")))
}

async fn fetch_once(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to reach sheet export")?;

    if !response.status().is_success() {
        anyhow::bail!("Sheet export returned status: {}", response.status());
    }

    let body = response.text().await.context("Failed to read export body")?;

    if !csv_looks_valid(&body) {
        anyhow::bail!("Sheet export body does not look like CSV");
    }

    Ok(body)
}

/// Plausibility check: no HTML markers and at least two comma-bearing lines.
pub fn csv_looks_valid(body: &str) -> bool {
    let lower = body.to_lowercase();
    if lower.contains("<!doctype") || lower.contains("<html") {
        return false;
    }

    body.lines().filter(|line| line.contains(',')).take(2).count() >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_csv() {
        assert!(csv_looks_valid(",단지명,동,종류\n,단지A,101동,매매"));
    }

    #[test]
    fn test_rejects_html() {
        assert!(!csv_looks_valid("<!DOCTYPE html><html>로그인이 필요합니다</html>"));
        assert!(!csv_looks_valid("<HTML><body>a,b\nc,d</body>"));
    }

    #[test]
    fn test_rejects_too_few_data_lines() {
        assert!(!csv_looks_valid("just one line, with a comma"));
        assert!(!csv_looks_valid("no delimiters here\nnone here either"));
        assert!(!csv_looks_valid(""));
    }
}
