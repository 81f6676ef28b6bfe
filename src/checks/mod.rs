//! Password scoring checks
//!
//! Each check inspects one strength criterion of the password.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_tier_check, min_length_hint};
pub use variety::{
    SPECIAL_CHARS, digit_check, lowercase_check, special_check, uppercase_check,
};

/// Outcome of a single criterion check.
/// - `award` - points contributed to the raw score
/// - `hint` - improvement message when the criterion is unmet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub award: u8,
    pub hint: Option<&'static str>,
}

impl CheckOutcome {
    pub(crate) fn met(award: u8) -> Self {
        CheckOutcome { award, hint: None }
    }

    pub(crate) fn unmet(hint: &'static str) -> Self {
        CheckOutcome {
            award: 0,
            hint: Some(hint),
        }
    }
}
