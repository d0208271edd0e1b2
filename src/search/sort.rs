//! Listing ordering.

use serde::{Deserialize, Serialize};

use crate::models::{Area, Listing, Price};

/// Sort keys offered by the listing board. `Recent` keeps the input order,
/// which already encodes recency upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    SizeAsc,
    SizeDesc,
    #[default]
    Recent,
}

/// Return a newly ordered copy of `listings`. All sorts are stable, so
/// listings comparing equal keep their relative input order.
pub fn sort_listings(listings: &[Listing], sort_by: SortOption) -> Vec<Listing> {
    let mut sorted = listings.to_vec();

    match sort_by {
        SortOption::PriceAsc => sorted.sort_by_key(|l| Price::parse(&l.price)),
        SortOption::PriceDesc => {
            sorted.sort_by(|a, b| Price::parse(&b.price).cmp(&Price::parse(&a.price)))
        }
        SortOption::SizeAsc => sorted.sort_by_key(|l| Area::parse(&l.size)),
        SortOption::SizeDesc => {
            sorted.sort_by(|a, b| Area::parse(&b.size).cmp(&Area::parse(&a.size)))
        }
        SortOption::Recent => {}
    }

    sorted
}
