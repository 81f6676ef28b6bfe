//! Character variety checks - lowercase, uppercase, digits, special chars.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

/// The exact set of characters that count as "special". Changing this set
/// changes which passwords earn the special-character point.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

fn class_check(
    password: &SecretString,
    pred: impl Fn(char) -> bool,
    hint: &'static str,
) -> CheckOutcome {
    if password.expose_secret().chars().any(pred) {
        CheckOutcome::met(1)
    } else {
        CheckOutcome::unmet(hint)
    }
}

/// Awards one point if the password contains an ASCII lowercase letter.
pub fn lowercase_check(password: &SecretString) -> CheckOutcome {
    class_check(password, |c| c.is_ascii_lowercase(), "Add lowercase letters")
}

/// Awards one point if the password contains an ASCII uppercase letter.
pub fn uppercase_check(password: &SecretString) -> CheckOutcome {
    class_check(password, |c| c.is_ascii_uppercase(), "Add uppercase letters")
}

/// Awards one point if the password contains an ASCII digit.
pub fn digit_check(password: &SecretString) -> CheckOutcome {
    class_check(password, |c| c.is_ascii_digit(), "Add numbers")
}

/// Awards one point if the password contains a character from
/// [`SPECIAL_CHARS`].
pub fn special_check(password: &SecretString) -> CheckOutcome {
    class_check(password, |c| SPECIAL_CHARS.contains(c), "Add special characters")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_lowercase_check() {
        assert_eq!(lowercase_check(&secret("abc")).award, 1);
        assert_eq!(
            lowercase_check(&secret("ABC123!")),
            CheckOutcome::unmet("Add lowercase letters")
        );
    }

    #[test]
    fn test_uppercase_check() {
        assert_eq!(uppercase_check(&secret("aBc")).award, 1);
        assert_eq!(
            uppercase_check(&secret("abc123!")),
            CheckOutcome::unmet("Add uppercase letters")
        );
    }

    #[test]
    fn test_digit_check() {
        assert_eq!(digit_check(&secret("abc1")).award, 1);
        assert_eq!(
            digit_check(&secret("NoNumbers!")),
            CheckOutcome::unmet("Add numbers")
        );
    }

    #[test]
    fn test_special_check() {
        assert_eq!(special_check(&secret("abc!")).award, 1);
        assert_eq!(
            special_check(&secret("NoSpecial123")),
            CheckOutcome::unmet("Add special characters")
        );
    }

    #[test]
    fn test_special_set_is_exact() {
        // Every listed character earns the point on its own
        for c in SPECIAL_CHARS.chars() {
            let outcome = special_check(&secret(&c.to_string()));
            assert_eq!(outcome.award, 1, "expected {:?} to count as special", c);
        }
        // Space and tilde are outside the set
        assert_eq!(special_check(&secret("a b")).award, 0);
        assert_eq!(special_check(&secret("a~b")).award, 0);
    }

    #[test]
    fn test_classes_are_ascii_only() {
        // Non-ASCII letters and digits do not satisfy the class checks
        assert_eq!(lowercase_check(&secret("ü")).award, 0);
        assert_eq!(uppercase_check(&secret("Ü")).award, 0);
        assert_eq!(digit_check(&secret("٣")).award, 0);
    }
}
