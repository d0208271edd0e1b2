use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sheet the brokerage maintains its listing board in.
const DEFAULT_SHEET_ID: &str = "1Ajn0VVRqQfpjEimzmW7yorf7ecL9RKpXWpsCNj2QhsE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the backup file and search history live
    pub data_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Spreadsheet document id
    pub sheet_id: String,
    /// API key enabling the structured sheets-API tier
    pub sheets_api_key: Option<String>,
    /// Override for where the listing resolver fetches CSV from;
    /// defaults to this service's own proxy route
    pub listings_url: Option<String>,
    /// Seconds between background listing/market refreshes
    pub refresh_interval_secs: u64,
    /// Market indicator API keys
    pub market: MarketConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketConfig {
    pub alpha_vantage_key: Option<String>,
    pub koreaexim_key: Option<String>,
    pub bok_key: Option<String>,
    pub fred_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            bind_addr: "127.0.0.1:8787".to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheets_api_key: None,
            listings_url: None,
            refresh_interval_secs: 60 * 60,
            market: MarketConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("YEOYEO_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("YEOYEO_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(id) = std::env::var("YEOYEO_SHEET_ID") {
            config.sheet_id = id;
        }
        if let Ok(key) = std::env::var("GOOGLE_SHEETS_API_KEY") {
            config.sheets_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("YEOYEO_LISTINGS_URL") {
            config.listings_url = Some(url);
        }
        if let Ok(val) = std::env::var("YEOYEO_REFRESH_SECS") {
            if let Ok(v) = val.parse() {
                config.refresh_interval_secs = v;
            }
        }
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_KEY") {
            config.market.alpha_vantage_key = Some(key);
        }
        if let Ok(key) = std::env::var("KOREAEXIM_KEY") {
            config.market.koreaexim_key = Some(key);
        }
        if let Ok(key) = std::env::var("BOK_KEY") {
            config.market.bok_key = Some(key);
        }
        if let Ok(key) = std::env::var("FRED_KEY") {
            config.market.fred_key = Some(key);
        }

        config
    }

    /// Anonymous CSV export URL for the configured sheet.
    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid=0",
            self.sheet_id
        )
    }

    /// Where the listing resolver looks for CSV.
    pub fn listings_csv_url(&self) -> String {
        self.listings_url
            .clone()
            .unwrap_or_else(|| format!("http://{}/api/sheets", self.bind_addr))
    }

    pub fn backup_path(&self) -> PathBuf {
        self.data_dir.join("backup_listings.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("search_history.json")
    }
}
