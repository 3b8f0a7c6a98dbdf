use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex matching titles that consist only of digits
    /// - Matches: "12345", "0"
    /// - No match: "iPhone 13", "12a45", ""
    pub static ref ALL_DIGITS_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits_regex_matches() {
        assert!(ALL_DIGITS_REGEX.is_match("12345"));
        assert!(ALL_DIGITS_REGEX.is_match("0"));
        assert!(ALL_DIGITS_REGEX.is_match("0123456789"));
    }

    #[test]
    fn test_all_digits_regex_no_match() {
        assert!(!ALL_DIGITS_REGEX.is_match("iPhone 13"));
        assert!(!ALL_DIGITS_REGEX.is_match("12a45"));
        assert!(!ALL_DIGITS_REGEX.is_match("123 456")); // space
        assert!(!ALL_DIGITS_REGEX.is_match("")); // empty
    }
}
