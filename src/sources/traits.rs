use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources.
/// This allows easy addition of new feeds (another sheet, a partner API, etc)
/// in the future.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings from the source.
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source.
    fn source_name(&self) -> &'static str;
}
