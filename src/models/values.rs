//! Comparable value types derived from the string-encoded listing fields.
//!
//! The spreadsheet carries prices like "8억 5,000" and sizes like "41평".
//! Sorting and extremum narrowing need numbers, so these types apply the
//! tolerant parse rules once and compare exactly. The display string on the
//! listing stays untouched.

use std::cmp::Ordering;

/// Price in ten-thousand-won units (만원).
///
/// "8억 5,000" -> 85,000 / "5,000/250" -> 5,000 (monthly-rent listings are
/// priced by deposit only). Malformed input parses to 0, never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    pub fn parse(price: &str) -> Self {
        let main = price.split('/').next().unwrap_or("");

        if let Some((eok, man)) = main.split_once('억') {
            let eok = leading_float(&eok.trim().replace(',', ""));
            let man = leading_float(&man.trim().replace(',', ""));
            return Price((eok * 10_000.0 + man).round() as i64);
        }

        Price(leading_float(&main.trim().replace(',', "")).round() as i64)
    }

    /// Value in 억 (hundred-million won), the unit the site displays.
    pub fn as_eok(self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    pub fn man_won(self) -> i64 {
        self.0
    }
}

/// Floor area in 평 (pyeong).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Area(f64);

impl Area {
    pub fn parse(size: &str) -> Self {
        let digits: String = size.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
        Area(leading_float(&digits))
    }

    pub fn pyeong(self) -> f64 {
        self.0
    }
}

impl Eq for Area {}

impl Ord for Area {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Area {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Price in 억 as a plain number. 0 for unparseable input.
pub fn parse_price(price: &str) -> f64 {
    Price::parse(price).as_eok()
}

/// Size in 평 as a plain number. 0 for unparseable input.
pub fn parse_size(size: &str) -> f64 {
    Area::parse(size).pyeong()
}

/// Longest leading float of `s`, like JS parseFloat. 0 when there is none.
fn leading_float(s: &str) -> f64 {
    let s = s.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            '-' | '+' if i == 0 => end = 1,
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lump_sum_price() {
        assert_eq!(parse_price("8억 5,000"), 8.5);
        assert_eq!(parse_price("10억 2,000"), 10.2);
        assert_eq!(parse_price("7억 8,000"), 7.8);
        assert_eq!(parse_price("8억"), 8.0);
    }

    #[test]
    fn test_parse_deposit_price() {
        // Deposit only; the monthly part after '/' is ignored.
        assert_eq!(parse_price("5,000/250"), 0.5);
    }

    #[test]
    fn test_parse_price_garbage() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("미정"), 0.0);
        assert_eq!(parse_price("억"), 0.0);
    }

    #[test]
    fn test_price_exact_equality() {
        assert_eq!(Price::parse("8억 5,000"), Price::parse("8억 5,000"));
        assert_eq!(Price::parse("8억 5,000").man_won(), 85_000);
        assert!(Price::parse("7억 8,000") < Price::parse("8억 5,000"));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("41평"), 41.0);
        assert_eq!(parse_size("35"), 35.0);
        assert_eq!(parse_size("30.5평"), 30.5);
        assert_eq!(parse_size(""), 0.0);
        assert_eq!(parse_size("평"), 0.0);
    }

    #[test]
    fn test_leading_float_prefix() {
        // Trailing garbage after the numeric prefix is dropped.
        assert_eq!(leading_float("47(48)"), 47.0);
        assert_eq!(leading_float("30.5.2"), 30.5);
        assert_eq!(leading_float(".5"), 0.5);
    }
}
