//! Autocomplete suggestions for the search input.

use crate::models::Listing;
use crate::search::chosung::matches_search;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Distinct complex names and kinds matching the raw (untokenized) query, in
/// listing iteration order, capped at `limit`. Blank queries suggest nothing.
pub fn search_suggestions(listings: &[Listing], query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();
    for listing in listings {
        if matches_search(&listing.complex, query) && !suggestions.contains(&listing.complex) {
            suggestions.push(listing.complex.clone());
        }
        if matches_search(&listing.kind, query) && !suggestions.contains(&listing.kind) {
            suggestions.push(listing.kind.clone());
        }
    }

    suggestions.truncate(limit);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(kind: &str, complex: &str) -> Listing {
        Listing {
            kind: kind.to_string(),
            complex: complex.to_string(),
            ..Listing::default()
        }
    }

    #[test]
    fn test_blank_query_suggests_nothing() {
        let listings = vec![listing("아파트", "유니시티 1단지")];
        assert!(search_suggestions(&listings, "", 5).is_empty());
    }

    #[test]
    fn test_deduplicates_in_first_seen_order() {
        let listings = vec![
            listing("아파트", "유니시티 4단지"),
            listing("아파트", "유니시티 3단지"),
            listing("오피스텔", "유니시티 4단지"),
        ];
        let suggestions = search_suggestions(&listings, "유니시티", 5);
        assert_eq!(suggestions, vec!["유니시티 4단지", "유니시티 3단지"]);
    }

    #[test]
    fn test_kind_is_suggested_too() {
        let listings = vec![listing("아파트", "유니시티 1단지")];
        let suggestions = search_suggestions(&listings, "아파트", 5);
        assert_eq!(suggestions, vec!["아파트"]);
    }

    #[test]
    fn test_limit_caps_output() {
        let listings: Vec<Listing> = (1..=8)
            .map(|i| listing("아파트", &format!("유니시티 {i}단지")))
            .collect();
        let suggestions = search_suggestions(&listings, "유니시티", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(suggestions.len(), 5);
    }

    #[test]
    fn test_chosung_query_suggests() {
        let listings = vec![listing("상가", "유니시티 어반브릭스")];
        let suggestions = search_suggestions(&listings, "ㅇㄴㅅㅌ", 5);
        assert_eq!(suggestions, vec!["유니시티 어반브릭스"]);
    }
}
