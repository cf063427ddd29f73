//! EAN recovery from free-text technical information
//!
//! Dealers paste technical data as `label; value` lines. When a record has
//! no structured EAN, the code is mined from the first line mentioning it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EAN_LINE: Regex = Regex::new("(?i)ean").expect("valid regex");
}

/// Extract the EAN code from a technical-information block
///
/// Takes the first line containing `ean` (case-insensitive) and returns the
/// trimmed segment after its first semicolon. Returns an empty string when
/// no line matches or the matching line has no second segment; a missing
/// EAN is a valid (if lower-quality) feed value, not an error.
pub fn find_ean(technical_info: &str) -> String {
    for line in technical_info.lines() {
        if EAN_LINE.is_match(line) {
            return match line.split(';').nth(1) {
                Some(value) => value.trim().to_string(),
                None => String::new(),
            };
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ean_from_technical_information() {
        let tech_info = "Weight: 1kg\nEAN; 7891234567890\nColor: black";
        assert_eq!(find_ean(tech_info), "7891234567890");
    }

    #[test]
    fn returns_empty_when_no_line_mentions_ean() {
        assert_eq!(find_ean("Weight: 1kg\nColor: black"), "");
        assert_eq!(find_ean(""), "");
    }

    #[test]
    fn returns_empty_when_matching_line_has_no_semicolon() {
        assert_eq!(find_ean("EAN 7891234567890"), "");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(find_ean("ean; 123"), "123");
        assert_eq!(find_ean("Ean; 456"), "456");
    }

    #[test]
    fn takes_segment_between_first_and_second_semicolon() {
        assert_eq!(find_ean("EAN; 7891234567890; extra"), "7891234567890");
    }

    #[test]
    fn only_first_matching_line_counts() {
        let tech_info = "EAN; 111\nEAN; 222";
        assert_eq!(find_ean(tech_info), "111");
    }
}
