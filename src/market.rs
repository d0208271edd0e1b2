//! Macro/market indicator cards.
//!
//! Each indicator comes from an independent JSON endpoint treated as a black
//! box, guarded by an optional API key and a hardcoded fallback value. A
//! missing key, a failed fetch, or an unexpected payload all yield the
//! fallback; nothing here ever fails the caller.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::MarketConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

impl Indicator {
    fn new(value: &str, change: &str) -> Self {
        Self {
            value: value.to_string(),
            change: change.to_string(),
            trend: trend_of(change),
        }
    }
}

fn trend_of(change: &str) -> Trend {
    if change.starts_with('-') {
        Trend::Down
    } else {
        Trend::Up
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub interest_rate: Indicator,
    pub exchange_rate: Indicator,
    pub us_fed_rate: Indicator,
    pub kospi: Indicator,
    pub kosdaq: Indicator,
    pub sp500: Indicator,
    pub updated: DateTime<Utc>,
}

impl MarketSnapshot {
    /// The values shown before any fetch has succeeded.
    pub fn fallback() -> Self {
        Self {
            interest_rate: Indicator::new("3.50%", "+0.25%p"),
            exchange_rate: Indicator::new("1,380.5원", "-5.2원"),
            us_fed_rate: Indicator::new("5.25%", "+0.00%p"),
            kospi: Indicator::new("2,580.45", "+15.32"),
            kosdaq: Indicator::new("745.28", "-3.15"),
            sp500: Indicator::new("5,123.50", "+22.10"),
            updated: Utc::now(),
        }
    }
}

pub struct MarketClient {
    client: Client,
    config: MarketConfig,
}

impl MarketClient {
    pub fn new(client: Client, config: MarketConfig) -> Self {
        Self { client, config }
    }

    /// Gather every indicator, falling back per indicator.
    pub async fn fetch_all(&self) -> MarketSnapshot {
        let fallback = MarketSnapshot::fallback();

        let (kospi, kosdaq, sp500, exchange_rate, interest_rate, us_fed_rate) = tokio::join!(
            self.stock_quote("KS11.KRX", fallback.kospi.clone()),
            self.stock_quote("KQ11.KRX", fallback.kosdaq.clone()),
            self.stock_quote("SPY", fallback.sp500.clone()),
            self.exchange_rate(fallback.exchange_rate.clone()),
            self.korean_base_rate(fallback.interest_rate.clone()),
            self.us_fed_rate(fallback.us_fed_rate.clone()),
        );

        MarketSnapshot {
            interest_rate,
            exchange_rate,
            us_fed_rate,
            kospi,
            kosdaq,
            sp500,
            updated: Utc::now(),
        }
    }

    async fn stock_quote(&self, symbol: &str, fallback: Indicator) -> Indicator {
        let Some(key) = &self.config.alpha_vantage_key else {
            return fallback;
        };

        let url = format!(
            "https://www.alphavantage.co/query?function=GLOBAL_QUOTE&symbol={symbol}&apikey={key}"
        );
        match self.fetch_json(&url).await {
            Ok(data) => {
                let quote = &data["Global Quote"];
                match (quote["05. price"].as_str(), quote["09. change"].as_str()) {
                    (Some(price), Some(change)) => Indicator::new(price, change),
                    _ => fallback,
                }
            }
            Err(e) => {
                warn!("Stock quote fetch failed for {symbol}: {e:#}");
                fallback
            }
        }
    }

    async fn exchange_rate(&self, fallback: Indicator) -> Indicator {
        let Some(key) = &self.config.koreaexim_key else {
            return fallback;
        };

        let today = Utc::now().format("%Y%m%d");
        let url = format!(
            "https://www.koreaexim.go.kr/site/program/financial/exchangeJSON?authkey={key}&searchdate={today}&data=AP01"
        );
        match self.fetch_json(&url).await {
            Ok(data) => {
                let usd = data
                    .as_array()
                    .and_then(|rows| {
                        rows.iter().find(|row| row["cur_unit"].as_str() == Some("USD"))
                    })
                    .cloned();
                match usd {
                    Some(row) => {
                        let rate: f64 = row["deal_bas_r"]
                            .as_str()
                            .map(|s| s.replace(',', ""))
                            .and_then(|s| s.parse().ok())
                            .unwrap_or(0.0);
                        let change: f64 = row["change_rate"]
                            .as_str()
                            .and_then(|s| s.parse().ok())
                            .unwrap_or(0.0);
                        if rate == 0.0 {
                            return fallback;
                        }
                        let sign = if change > 0.0 { "+" } else { "" };
                        Indicator::new(
                            &format!("{rate:.1}원"),
                            &format!("{sign}{change:.1}원"),
                        )
                    }
                    None => fallback,
                }
            }
            Err(e) => {
                warn!("Exchange rate fetch failed: {e:#}");
                fallback
            }
        }
    }

    async fn korean_base_rate(&self, fallback: Indicator) -> Indicator {
        let Some(key) = &self.config.bok_key else {
            return fallback;
        };

        let today = Utc::now().format("%Y%m%d");
        let url = format!(
            "https://ecos.bok.or.kr/api/StatisticSearch/{key}/json/kr/1/1/722Y001/D/{today}/{today}/0101000"
        );
        match self.fetch_json(&url).await {
            Ok(data) => match data["StatisticSearch"]["row"][0]["DATA_VALUE"].as_str() {
                Some(rate) => Indicator::new(&format!("{rate}%"), "+0.25%p"),
                None => fallback,
            },
            Err(e) => {
                warn!("Korean base rate fetch failed: {e:#}");
                fallback
            }
        }
    }

    async fn us_fed_rate(&self, fallback: Indicator) -> Indicator {
        let Some(key) = &self.config.fred_key else {
            return fallback;
        };

        let url = format!(
            "https://api.stlouisfed.org/fred/series/observations?series_id=FEDFUNDS&api_key={key}&file_type=json&limit=1&sort_order=desc"
        );
        match self.fetch_json(&url).await {
            Ok(data) => match data["observations"][0]["value"].as_str() {
                Some(rate) => Indicator::new(&format!("{rate}%"), "+0.00%p"),
                None => fallback,
            },
            Err(e) => {
                warn!("US Fed rate fetch failed: {e:#}");
                fallback
            }
        }
    }

    async fn fetch_json(&self, url: &str) -> anyhow::Result<Value> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("indicator endpoint returned status: {}", response.status());
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_follows_change_sign() {
        assert_eq!(trend_of("-5.2원"), Trend::Down);
        assert_eq!(trend_of("+15.32"), Trend::Up);
        assert_eq!(trend_of("0"), Trend::Up);
    }

    #[tokio::test]
    async fn test_missing_keys_fall_back() {
        let client = MarketClient::new(Client::new(), MarketConfig::default());
        let snapshot = client.fetch_all().await;
        assert_eq!(snapshot.kospi.value, "2,580.45");
        assert_eq!(snapshot.exchange_rate.trend, Trend::Down);
    }
}
