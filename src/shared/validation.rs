use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating reporter phone numbers
    /// Accepts local and international Indonesian formats
    /// - Valid: "081234567890", "+6281234567890", "0211234567"
    /// - Invalid: "abc", "08-1234", "12"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{8,15}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("081234567890"));
        assert!(PHONE_REGEX.is_match("+6281234567890"));
        assert!(PHONE_REGEX.is_match("0211234567"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("abc"));
        assert!(!PHONE_REGEX.is_match("08-1234-5678")); // separators
        assert!(!PHONE_REGEX.is_match("12")); // too short
        assert!(!PHONE_REGEX.is_match("0812345678901234567")); // too long
        assert!(!PHONE_REGEX.is_match("")); // empty
    }
}
