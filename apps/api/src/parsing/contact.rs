//! Email and phone extractors. Both return the first match in document order, or `""`.
//!
//! The phone pattern is intentionally loose: an optional `+`, a digit, then 7 to 15 more
//! digits, spaces or hyphens. Postal codes, long IDs and date ranges written as digits can
//! match it. That false-positive risk is accepted, not filtered.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d -]{7,15}").expect("valid phone regex"));

pub fn extract_email(text: &str) -> String {
    EMAIL_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Trailing separators swallowed by the greedy tail are dropped from the match.
pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERN
        .find(text)
        .map(|m| m.as_str().trim_end_matches([' ', '-']).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Smith Email: john@example.com Phone: +1 555-123-4567";

    #[test]
    fn test_email_found_in_sample() {
        assert_eq!(extract_email(SAMPLE), "john@example.com");
    }

    #[test]
    fn test_email_first_match_wins() {
        let text = "primary: a.b+tag@mail.co.uk backup: other@example.org";
        assert_eq!(extract_email(text), "a.b+tag@mail.co.uk");
    }

    #[test]
    fn test_email_requires_alphabetic_tld() {
        assert_eq!(extract_email("reach me at user@host.c0m"), "");
        assert_eq!(extract_email("user@host.x is too short"), "");
    }

    #[test]
    fn test_email_absent_without_at_sign() {
        assert_eq!(extract_email("No contact details here, only 555 1234 567"), "");
    }

    #[test]
    fn test_phone_found_in_sample() {
        assert_eq!(extract_phone(SAMPLE), "+1 555-123-4567");
    }

    #[test]
    fn test_phone_trailing_space_is_trimmed() {
        let text = "Tel 98765 43210 Skills Python";
        assert_eq!(extract_phone(text), "98765 43210");
    }

    #[test]
    fn test_phone_needs_at_least_eight_characters() {
        assert_eq!(extract_phone("Room 1234567"), "");
        assert_eq!(extract_phone("Room 12345678"), "12345678");
    }

    #[test]
    fn test_phone_is_permissive_with_postal_codes() {
        // Known limitation: a long enough digit run matches even when it is not a phone.
        let text = "Jaipur 302017 2022 Graduate";
        assert_eq!(extract_phone(text), "302017 2022");
    }

    #[test]
    fn test_phone_absent_without_digits() {
        assert_eq!(extract_phone("Call me maybe"), "");
    }
}
