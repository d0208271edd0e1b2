//! Tier-2 listing source: a pre-shaped backup JSON document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::models::Listing;
use crate::sources::traits::ListingSource;

/// Reads listings from the static backup file in the data directory.
pub struct BackupSource {
    path: PathBuf,
}

impl BackupSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for BackupSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        let payload = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read backup listings from {:?}", self.path))?;

        serde_json::from_str(&payload).context("Backup listings file is not valid JSON")
    }

    fn source_name(&self) -> &'static str {
        "backup-file"
    }
}
