//! Email well-formedness check.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Checks that an address has the shape `local@domain.tld`.
///
/// This is a well-formedness check for form feedback, not RFC-compliant
/// address validation.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_addresses() {
        assert!(is_email_valid("a@b.com"));
        assert!(is_email_valid("first.last@mail.example.org"));
        assert!(is_email_valid("user+tag@sub.domain.io"));
    }

    #[test]
    fn test_missing_at_sign() {
        assert!(!is_email_valid("no-at-sign.com"));
    }

    #[test]
    fn test_missing_dot_after_domain() {
        assert!(!is_email_valid("a@b"));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(!is_email_valid(""));
        assert!(!is_email_valid("   "));
        assert!(!is_email_valid("a b@c.com"));
        assert!(!is_email_valid("a@b .com"));
    }

    #[test]
    fn test_multiple_at_signs() {
        assert!(!is_email_valid("a@@b.com"));
        assert!(!is_email_valid("a@b@c.com"));
    }

    #[test]
    fn test_empty_segments() {
        assert!(!is_email_valid("@b.com"));
        assert!(!is_email_valid("a@.com"));
        assert!(!is_email_valid("a@b."));
    }
}
