//! Listing search: multi-term AND filtering plus price-extremum narrowing.

use crate::models::{Listing, Price};
use crate::search::chosung::matches_search;
use crate::search::tokenizer::tokenize_query;

/// Trailing unit glyphs stripped for the one-shot retry when a term fails
/// direct matching ("41평" should still hit a size stored as "41").
const UNIT_SUFFIXES: [char; 4] = ['평', '동', '층', '호'];

/// Filter `listings` by a free-text query.
///
/// A blank query returns the input unchanged. Every tokenized term must
/// match at least one of the six searchable fields; when the query carried a
/// superlative keyword the result is narrowed to the cheapest/priciest
/// entries afterwards (skipped when one listing or none survived).
pub fn search_listings(listings: &[Listing], query: &str) -> Vec<Listing> {
    if query.trim().is_empty() {
        return listings.to_vec();
    }

    let parsed = tokenize_query(query);

    let mut filtered: Vec<Listing> = if parsed.terms.is_empty() {
        listings.to_vec()
    } else {
        listings
            .iter()
            .filter(|listing| parsed.terms.iter().all(|term| term_matches(listing, term)))
            .cloned()
            .collect()
    };

    // Extremum narrowing only makes sense over two or more candidates.
    // When both flags are set the narrowings apply in sequence, min first.
    if filtered.len() > 1 {
        if parsed.wants_cheapest {
            narrow_to_extremum(&mut filtered, Extremum::Min);
        }
        if parsed.wants_priciest {
            narrow_to_extremum(&mut filtered, Extremum::Max);
        }
    }

    filtered
}

#[derive(Clone, Copy)]
enum Extremum {
    Min,
    Max,
}

fn narrow_to_extremum(listings: &mut Vec<Listing>, extremum: Extremum) {
    let prices = listings.iter().map(|l| Price::parse(&l.price));
    let target = match extremum {
        Extremum::Min => prices.min(),
        Extremum::Max => prices.max(),
    };
    if let Some(target) = target {
        listings.retain(|l| Price::parse(&l.price) == target);
    }
}

/// One term against the six searchable fields, retrying once with a trailing
/// unit glyph stripped.
fn term_matches(listing: &Listing, term: &str) -> bool {
    let fields = [
        &listing.complex,
        &listing.kind,
        &listing.size,
        &listing.features,
        &listing.unit,
        &listing.price,
    ];

    if fields.iter().any(|field| matches_search(field, term)) {
        return true;
    }

    if let Some(stripped) = strip_unit_suffix(term) {
        return fields.iter().any(|field| matches_search(field, stripped));
    }

    false
}

fn strip_unit_suffix(term: &str) -> Option<&str> {
    let stripped = term.strip_suffix(&UNIT_SUFFIXES[..])?;
    (!stripped.is_empty()).then_some(stripped)
}
