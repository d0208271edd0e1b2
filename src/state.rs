use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::history::SearchHistory;
use crate::market::{MarketClient, MarketSnapshot};
use crate::models::Listing;
use crate::proxy::SheetProxy;
use crate::sources::{resolve_listings, BackupSource, SheetSource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub proxy: Arc<SheetProxy>,
    pub listings: Arc<RwLock<Vec<Listing>>>,
    pub market: Arc<RwLock<MarketSnapshot>>,
    pub history: Arc<SearchHistory>,
    pub market_client: Arc<MarketClient>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", config.data_dir))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (compatible; YeoyeoBot/1.0)")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            proxy: Arc::new(SheetProxy::new(&config, http_client.clone())),
            // Seeded with the built-in records so the board is never empty,
            // even before the first refresh lands.
            listings: Arc::new(RwLock::new(crate::sources::fallback_listings())),
            market: Arc::new(RwLock::new(MarketSnapshot::fallback())),
            history: Arc::new(SearchHistory::with_file(config.history_path())),
            market_client: Arc::new(MarketClient::new(
                http_client.clone(),
                config.market.clone(),
            )),
            http_client,
            config,
        })
    }

    /// One refresh cycle: re-resolve listings and market data, replacing the
    /// displayed snapshots wholesale. Overlapping cycles are tolerated; the
    /// last write wins.
    pub async fn refresh(&self) {
        let sheet = SheetSource::new(self.http_client.clone(), self.config.listings_csv_url());
        let backup = BackupSource::new(self.config.backup_path());

        let listings = resolve_listings(&sheet, &backup).await;
        *self.listings.write().await = listings;

        let snapshot = self.market_client.fetch_all().await;
        *self.market.write().await = snapshot;
    }
}
