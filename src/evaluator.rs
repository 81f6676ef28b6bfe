//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{
    self, CheckOutcome, digit_check, lowercase_check, special_check, uppercase_check,
};
use crate::types::{MAX_SCORE, PasswordStrengthResult, StrengthLevel};

/// Evaluates password strength and returns score, level, and feedback.
///
/// Total function: every input, including the empty string and arbitrary
/// Unicode, produces a result. Pure and synchronous, no side effects.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordStrengthResult` with the clamped score, the derived level,
/// and one feedback hint per unmet criterion.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordStrengthResult {
    if password.expose_secret().is_empty() {
        return PasswordStrengthResult {
            score: 0,
            level: StrengthLevel::Weak,
            feedback: vec!["Password is required".to_string()],
        };
    }

    let mut raw_score: u8 = 0;
    let mut feedback: Vec<String> = Vec::new();

    raw_score += checks::length_tier_check(password).award;

    // Fixed feedback order: lowercase, uppercase, digit, special
    let class_checks: [fn(&SecretString) -> CheckOutcome; 4] = [
        lowercase_check,
        uppercase_check,
        digit_check,
        special_check,
    ];

    for check in class_checks {
        let outcome = check(password);
        raw_score += outcome.award;
        if let Some(hint) = outcome.hint {
            feedback.push(hint.to_string());
        }
    }

    // Level comes from the raw score, before the clamp
    let level = StrengthLevel::from_raw_score(raw_score);

    // The length hint goes last, and only for weak passwords
    if level == StrengthLevel::Weak {
        if let Some(hint) = checks::min_length_hint(password) {
            feedback.push(hint.to_string());
        }
    }

    PasswordStrengthResult {
        score: raw_score.min(MAX_SCORE),
        level,
        feedback,
    }
}

/// Returns `true` when a fresh evaluation classifies the password above
/// [`StrengthLevel::Weak`].
pub fn is_password_valid(password: &SecretString) -> bool {
    evaluate_password_strength(password).level != StrengthLevel::Weak
}
