//! Integration tests for the listing pipeline.
//!
//! These exercise the CSV-to-search flow end to end without touching the
//! network: the proxy's fallback CSV feeds the row parser, and the resolver
//! is driven against an unreachable endpoint to walk the tiers.

use yeoyeo_realty::history::SearchHistory;
use yeoyeo_realty::models::parse_price;
use yeoyeo_realty::proxy::FALLBACK_CSV;
use yeoyeo_realty::search::{
    search_listings, search_suggestions, sort_listings, SortOption,
};
use yeoyeo_realty::sources::csv::parse_listing_rows;
use yeoyeo_realty::sources::{fallback_listings, resolve_listings, BackupSource, SheetSource};

#[test]
fn test_fallback_csv_through_search_and_sort() {
    let listings = parse_listing_rows(FALLBACK_CSV);
    assert_eq!(listings.len(), 5);

    // Compact query without spaces: transaction kind + complex + size.
    let hits = search_listings(&listings, "아파트3단지41평");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].complex, "유니시티 3단지");

    // Cheapest narrowing lands on the deposit-priced shop unit.
    let cheapest = search_listings(&listings, "최저가");
    assert_eq!(cheapest.len(), 1);
    assert_eq!(cheapest[0].price, "5,000/250");

    // Price ascending ends at the most expensive apartment.
    let sorted = sort_listings(&listings, SortOption::PriceAsc);
    assert_eq!(sorted.last().map(|l| l.complex.as_str()), Some("유니시티 3단지"));
    assert!(parse_price(&sorted[0].price) <= parse_price(&sorted[4].price));
}

#[test]
fn test_suggestions_from_parsed_listings() {
    let listings = parse_listing_rows(FALLBACK_CSV);
    let suggestions = search_suggestions(&listings, "ㅇㄴㅅㅌ", 5);
    assert!(suggestions.contains(&"유니시티 4단지".to_string()));
    assert!(!suggestions.contains(&"힐스테이트 에비뉴".to_string()));
}

#[tokio::test]
async fn test_resolver_falls_back_to_backup_file() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("backup_listings.json");
    std::fs::write(
        &backup_path,
        serde_json::to_string(&fallback_listings()).unwrap(),
    )
    .unwrap();

    // Nothing listens on port 1; tier 1 fails fast.
    let sheet = SheetSource::new(reqwest::Client::new(), "http://127.0.0.1:1/api/sheets");
    let backup = BackupSource::new(&backup_path);

    let listings = resolve_listings(&sheet, &backup).await;
    assert_eq!(listings, fallback_listings());
}

#[tokio::test]
async fn test_resolver_bottoms_out_at_builtin_listings() {
    let sheet = SheetSource::new(reqwest::Client::new(), "http://127.0.0.1:1/api/sheets");
    let backup = BackupSource::new("/nonexistent/backup_listings.json");

    let listings = resolve_listings(&sheet, &backup).await;
    assert_eq!(listings, fallback_listings());
}

#[test]
fn test_search_history_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let history = SearchHistory::with_file(dir.path().join("search_history.json"));

    history.save("유니시티");
    history.save("41평");
    history.save("유니시티");

    assert_eq!(history.get_all(), vec!["유니시티", "41평"]);

    history.clear();
    assert!(history.get_all().is_empty());
}
