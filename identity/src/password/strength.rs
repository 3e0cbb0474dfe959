use std::fmt;

use serde::Serialize;

use crate::password::rules::MIN_LENGTH;
use crate::password::rules::SPECIAL_CHARS;

/// Length at which a password earns the second length predicate.
pub const COMFORTABLE_LENGTH: usize = 12;

/// Strength band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Map a 0..=6 score onto its band.
    ///
    /// Scores of 2 and below are Weak, 3 and 4 are Medium, 5 and above are
    /// Strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    /// UI color hint for the band.
    pub fn color_hint(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "red",
            StrengthLabel::Medium => "amber",
            StrengthLabel::Strong => "green",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Derived strength of a password.
///
/// Recomputed on demand whenever the password changes; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    pub color: &'static str,
}

/// Score a password by counting satisfied predicates.
///
/// The six predicates are independent: length of at least 8, length of at
/// least 12, an uppercase letter, a lowercase letter, a digit, and a
/// special character from the same set the composition rules use. Total
/// function: every input produces a strength, nothing fails.
///
/// # Arguments
/// * `password` - Plaintext password to score
///
/// # Returns
/// PasswordStrength with score 0..=6, band label, and color hint
pub fn score(password: &str) -> PasswordStrength {
    let length = password.chars().count();

    let predicates = [
        length >= MIN_LENGTH,
        length >= COMFORTABLE_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
    ];

    let score = predicates.iter().filter(|satisfied| **satisfied).count() as u8;
    let label = StrengthLabel::from_score(score);

    PasswordStrength {
        score,
        label,
        color: label.color_hint(),
    }
}
