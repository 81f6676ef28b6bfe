//! Result types for password strength evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the returned score. The current checks top out at 7,
/// the clamp stays as a defensive bound.
pub const MAX_SCORE: u8 = 8;

/// Strength classification derived from the raw score.
///
/// The ordering is total: `Weak < Medium < Strong < VeryStrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Derives the level from the unclamped raw score.
    pub(crate) fn from_raw_score(raw: u8) -> Self {
        match raw {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            5..=6 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        };
        f.write_str(tag)
    }
}

/// Snapshot of one password evaluation.
///
/// Immutable, returned fresh on each call. `feedback` lists one hint per
/// unmet criterion, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub feedback: Vec<String>,
}
