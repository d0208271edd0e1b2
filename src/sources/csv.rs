//! Spreadsheet CSV row parsing.
//!
//! The upstream sheet exports with a leading blank column and fixed column
//! positions; the mapping below mirrors that schema. Schema drift upstream
//! silently shifts fields, so the positions are kept in one place.

use crate::models::Listing;

/// Minimum columns a data row must carry to be mapped.
const MIN_COLUMNS: usize = 11;

const COL_COMPLEX: usize = 1;
const COL_UNIT: usize = 2;
const COL_KIND: usize = 3;
const COL_PRICE: usize = 4;
const COL_SIZE: usize = 5;
const COL_SIZE_ALT: usize = 6;
const COL_FEATURES: usize = 9;

/// Parse a whole CSV export into listings. Row 0 is the header; blank rows,
/// short rows, and rows without a complex name or kind are skipped.
pub fn parse_listing_rows(csv: &str) -> Vec<Listing> {
    let mut listings = Vec::new();

    for line in csv.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = parse_csv_line(line);
        if values.len() < MIN_COLUMNS {
            continue;
        }

        let complex = values[COL_COMPLEX].clone();
        let kind = values[COL_KIND].clone();
        if complex.is_empty() || kind.is_empty() {
            continue;
        }

        // The size column occasionally moves one slot; prefer the primary
        // column and fall back when it is blank. The 평 glyph is stripped so
        // the field compares numerically downstream.
        let size_raw = if values[COL_SIZE].is_empty() {
            values.get(COL_SIZE_ALT).cloned().unwrap_or_default()
        } else {
            values[COL_SIZE].clone()
        };
        let size = size_raw.trim_end_matches('평').trim().to_string();

        listings.push(Listing {
            kind,
            complex,
            size,
            unit: values[COL_UNIT].clone(),
            price: values[COL_PRICE].clone(),
            features: values.get(COL_FEATURES).cloned().unwrap_or_default(),
            category: "unicity".to_string(),
        });
    }

    listings
}

/// Split one CSV line on commas, honoring double-quoted fields (quotes
/// toggle an in-quotes mode; commas inside quotes are literal). Fields are
/// trimmed; the quotes themselves are dropped.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = ",단지명,동,종류,가격,평형,,,,매물특징,,노출";

    #[test]
    fn test_quoted_field_keeps_comma() {
        let fields = parse_csv_line(",단지A,101동,매매,\"3억 2,000\",30평,,,,특징,,FALSE");
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[4], "3억 2,000");
    }

    #[test]
    fn test_row_maps_to_listing() {
        let csv = format!(
            "{HEADER}\n,단지A,101동,매매,\"3억 2,000\",30평,,,,특징,,FALSE"
        );
        let listings = parse_listing_rows(&csv);
        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.complex, "단지A");
        assert_eq!(listing.unit, "101동");
        assert_eq!(listing.kind, "매매");
        assert_eq!(listing.price, "3억 2,000");
        assert_eq!(listing.size, "30");
        assert_eq!(listing.features, "특징");
    }

    #[test]
    fn test_header_and_blank_rows_skipped() {
        let csv = format!("{HEADER}\n\n   \n");
        assert!(parse_listing_rows(&csv).is_empty());
    }

    #[test]
    fn test_short_rows_skipped() {
        let csv = format!("{HEADER}\n,단지A,101동,매매,3억");
        assert!(parse_listing_rows(&csv).is_empty());
    }

    #[test]
    fn test_rows_missing_complex_or_kind_skipped() {
        let csv = format!(
            "{HEADER}\n,,101동,매매,3억,30평,,,,특징,,FALSE\n,단지A,101동,,3억,30평,,,,특징,,FALSE"
        );
        assert!(parse_listing_rows(&csv).is_empty());
    }

    #[test]
    fn test_size_falls_back_to_alternate_column() {
        let csv = format!("{HEADER}\n,단지A,101동,매매,3억,,41평,,,특징,,TRUE");
        let listings = parse_listing_rows(&csv);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].size, "41");
    }
}
