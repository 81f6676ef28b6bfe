//! Length checks - tiered scoring on password character count.

use super::CheckOutcome;
use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Length tiers that each award one point. Counts are Unicode scalar
/// values, not bytes.
const LENGTH_TIERS: [usize; 3] = [8, 12, 16];

/// Awards one point for each length tier the password reaches.
pub fn length_tier_check(password: &SecretString) -> CheckOutcome {
    let count = password.expose_secret().chars().count();
    let award = LENGTH_TIERS.iter().filter(|&&tier| count >= tier).count() as u8;
    CheckOutcome::met(award)
}

/// Hint shown for weak passwords below the minimum length.
///
/// Returns `None` once the password reaches [`MIN_LENGTH`] characters.
pub fn min_length_hint(password: &SecretString) -> Option<&'static str> {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        Some("Use at least 8 characters")
    } else {
        None
    }
}
