//! Free-text query tokenizer.
//!
//! Turns raw input like "매매1단지41평 최저가" into AND-search terms plus
//! price-extremum flags. Superlative keywords are pulled out first; compact
//! queries typed without spaces are split at script transitions.

/// Keywords meaning "cheapest". Longer variants listed before their
/// substrings so removal never leaves fragments behind.
const CHEAPEST_KEYWORDS: [&str; 6] = ["최저가", "최저", "가장싼", "제일싼", "저렴한", "싼"];

/// Keywords meaning "most expensive".
const PRICIEST_KEYWORDS: [&str; 5] = ["최고가", "최고", "가장비싼", "제일비싼", "비싼"];

/// A tokenized query: search terms plus the extremum flags extracted from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub terms: Vec<String>,
    pub wants_cheapest: bool,
    pub wants_priciest: bool,
}

/// Tokenize a raw query.
///
/// Superlative keywords are removed (replaced by a space) and recorded as
/// flags. The remainder splits on whitespace when any is present; otherwise
/// spaces are inserted at Hangul→digit and Hangul↔Latin transitions, so
/// "매매1단지41평" and "매매 1단지 41평" tokenize identically.
pub fn tokenize_query(query: &str) -> ParsedQuery {
    let mut text = query.to_string();
    let mut parsed = ParsedQuery::default();

    // The priciest family must be scanned first: "비싼" contains "싼", so
    // the other order would read "가장비싼" as a cheapest request.
    for keyword in PRICIEST_KEYWORDS {
        if text.contains(keyword) {
            parsed.wants_priciest = true;
            text = text.replace(keyword, " ");
        }
    }
    for keyword in CHEAPEST_KEYWORDS {
        if text.contains(keyword) {
            parsed.wants_cheapest = true;
            text = text.replace(keyword, " ");
        }
    }

    let text = text.trim();
    if text.is_empty() {
        return parsed;
    }

    parsed.terms = if text.contains(char::is_whitespace) {
        text.split_whitespace().map(str::to_string).collect()
    } else {
        split_at_script_boundaries(text)
    };

    parsed
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Insert splits where a Hangul syllable is followed by an ASCII digit or
/// letter, or a letter is followed by a syllable. Digit→Hangul is not a
/// boundary, keeping tokens like "1단지" and "41평" whole.
fn split_at_script_boundaries(text: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if let Some(p) = prev {
            let boundary = (is_hangul_syllable(p) && c.is_ascii_alphanumeric())
                || (p.is_ascii_alphabetic() && is_hangul_syllable(c));
            if boundary {
                spaced.push(' ');
            }
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_query_splits_at_script_boundaries() {
        let parsed = tokenize_query("매매1단지41평");
        assert_eq!(parsed.terms, vec!["매매", "1단지", "41평"]);
        assert!(!parsed.wants_cheapest);
        assert!(!parsed.wants_priciest);
    }

    #[test]
    fn test_spaced_query_tokenizes_the_same() {
        let compact = tokenize_query("매매1단지41평");
        let spaced = tokenize_query("매매 1단지 41평");
        assert_eq!(compact.terms, spaced.terms);
    }

    #[test]
    fn test_latin_boundaries() {
        let parsed = tokenize_query("힐스테이트A동");
        assert_eq!(parsed.terms, vec!["힐스테이트", "A", "동"]);
    }

    #[test]
    fn test_cheapest_keyword_extracted() {
        let parsed = tokenize_query("최저가 아파트");
        assert!(parsed.wants_cheapest);
        assert!(!parsed.wants_priciest);
        assert_eq!(parsed.terms, vec!["아파트"]);
    }

    #[test]
    fn test_pure_superlative_query_has_no_terms() {
        let parsed = tokenize_query("최저가");
        assert!(parsed.wants_cheapest);
        assert!(parsed.terms.is_empty());
    }

    #[test]
    fn test_keyword_removed_from_compact_query() {
        let parsed = tokenize_query("최저가매매");
        assert!(parsed.wants_cheapest);
        assert_eq!(parsed.terms, vec!["매매"]);
    }

    #[test]
    fn test_both_keyword_families_set_both_flags() {
        let parsed = tokenize_query("최저가 최고가 유니시티");
        assert!(parsed.wants_cheapest);
        assert!(parsed.wants_priciest);
        assert_eq!(parsed.terms, vec!["유니시티"]);
    }

    #[test]
    fn test_longest_keyword_wins() {
        // "최저가" must not leave a dangling "가" after removal.
        let parsed = tokenize_query("최저가");
        assert!(parsed.terms.is_empty());
        // "가장비싼" must not trip the bare "비싼" into leaving "가장".
        let parsed = tokenize_query("가장비싼 상가");
        assert!(parsed.wants_priciest);
        assert!(!parsed.wants_cheapest);
        assert_eq!(parsed.terms, vec!["상가"]);
        // Nor may the "싼" inside "비싼" read as a cheapest request.
        let parsed = tokenize_query("비싼 상가");
        assert!(parsed.wants_priciest);
        assert!(!parsed.wants_cheapest);
    }
}
