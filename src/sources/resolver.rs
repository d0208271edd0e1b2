//! Tiered listing resolution.
//!
//! The upstream spreadsheet export is not a committed API, so listings are
//! resolved through a fallback chain: the sheet proxy, then the backup
//! file, then built-in records. Every failure is absorbed here; callers
//! always get a usable list.

use tracing::{info, warn};

use crate::models::Listing;
use crate::sources::backup::BackupSource;
use crate::sources::sheet::SheetSource;
use crate::sources::traits::ListingSource;

/// Walk the tiers until one yields a non-empty listing set.
pub async fn resolve_listings(sheet: &SheetSource, backup: &BackupSource) -> Vec<Listing> {
    match sheet.fetch().await {
        Ok(listings) if !listings.is_empty() => {
            info!("Loaded {} listings from {}", listings.len(), sheet.source_name());
            return listings;
        }
        Ok(_) => warn!("{} returned no rows, trying backup", sheet.source_name()),
        Err(e) => warn!("{} failed: {e:#}, trying backup", sheet.source_name()),
    }

    match backup.fetch().await {
        Ok(listings) if !listings.is_empty() => {
            info!("Loaded {} listings from {}", listings.len(), backup.source_name());
            return listings;
        }
        Ok(_) => warn!("{} is empty, using built-in listings", backup.source_name()),
        Err(e) => warn!("{} failed: {e:#}, using built-in listings", backup.source_name()),
    }

    fallback_listings()
}

/// Built-in listings, the terminal tier. Representative records spanning
/// the transaction types so the board is never empty.
pub fn fallback_listings() -> Vec<Listing> {
    fn listing(
        kind: &str,
        complex: &str,
        size: &str,
        unit: &str,
        price: &str,
        features: &str,
        category: &str,
    ) -> Listing {
        Listing {
            kind: kind.to_string(),
            complex: complex.to_string(),
            size: size.to_string(),
            unit: unit.to_string(),
            price: price.to_string(),
            features: features.to_string(),
            category: category.to_string(),
        }
    }

    vec![
        listing(
            "아파트",
            "유니시티 4단지",
            "35평",
            "405동 고층",
            "8억 5,000",
            "남향, 공원뷰, 풀옵션",
            "unicity",
        ),
        listing(
            "아파트",
            "유니시티 3단지",
            "41평",
            "301동 중층",
            "10억 2,000",
            "코너, 조망 우수, 올수리",
            "unicity",
        ),
        listing(
            "아파트",
            "유니시티 1단지",
            "30평",
            "110동 로얄층",
            "7억 8,000",
            "역세권, 채광 좋음",
            "unicity",
        ),
        listing(
            "상가",
            "유니시티 어반브릭스",
            "15평",
            "1층 코너",
            "5,000/250",
            "유동인구 많음",
            "all",
        ),
        listing(
            "오피스텔",
            "힐스테이트 에비뉴",
            "25평",
            "A동 15층",
            "3억 2,000",
            "풀퍼니시드, 업무 최적",
            "all",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_listings_shape() {
        let listings = fallback_listings();
        assert!(listings.len() >= 5);
        // Spans more than one transaction/property kind.
        let kinds: std::collections::HashSet<&str> =
            listings.iter().map(|l| l.kind.as_str()).collect();
        assert!(kinds.len() >= 3);
        // Every field present on every record.
        assert!(listings.iter().all(|l| !l.complex.is_empty() && !l.price.is_empty()));
    }
}
