//! Regex-based contact field extraction over the raw text.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

/// 3-3-4 digit groups, each separator optional and one of `-`, `.` or whitespace.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("Invalid phone regex"));

/// First email address anywhere in `text`.
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL.find(text).map(|m| m.as_str())
}

/// First North-American style phone number anywhere in `text`.
pub fn find_phone(text: &str) -> Option<&str> {
    PHONE.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_simple() {
        assert_eq!(
            find_email("contact: john@example.com today"),
            Some("john@example.com")
        );
    }

    #[test]
    fn test_email_with_plus_and_subdomain() {
        assert_eq!(
            find_email("j.doe+jobs@mail.uni.edu"),
            Some("j.doe+jobs@mail.uni.edu")
        );
    }

    #[test]
    fn test_email_first_match_wins() {
        assert_eq!(
            find_email("a@first.io then b@second.io"),
            Some("a@first.io")
        );
    }

    #[test]
    fn test_email_requires_alpha_tld() {
        assert_eq!(find_email("user@host.1"), None);
        assert_eq!(find_email("no address here"), None);
    }

    #[test]
    fn test_phone_separators() {
        assert_eq!(find_phone("555-123-4567"), Some("555-123-4567"));
        assert_eq!(find_phone("555.123.4567"), Some("555.123.4567"));
        assert_eq!(find_phone("555 123 4567"), Some("555 123 4567"));
        assert_eq!(find_phone("call 5551234567"), Some("5551234567"));
    }

    #[test]
    fn test_phone_needs_word_boundaries() {
        assert_eq!(find_phone("id 12345551234567"), None);
        assert_eq!(find_phone("(555) 123-4567"), None);
    }

    #[test]
    fn test_phone_first_match_wins() {
        assert_eq!(
            find_phone("cell 555-123-4567, work 555-987-6543"),
            Some("555-123-4567")
        );
    }
}
