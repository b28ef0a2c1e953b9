//! Heuristic password strength scoring.
//!
//! Length thresholds are cumulative: a 20-character password earns all four.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..30 => StrengthLevel::Weak,
            30..60 => StrengthLevel::Medium,
            60..80 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    /// Machine-readable tag.
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub label: &'static str,
}

const LENGTH_STEPS: [usize; 4] = [8, 12, 16, 20];
const LENGTH_POINTS: u32 = 20;
const VARIETY_POINTS: u32 = 10;
const LONG_BONUS_OVER: usize = 20;
const LONG_BONUS: u32 = 10;
const MAX_SCORE: u32 = 100;

pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count();
    let mut total: u32 = 0;

    total += LENGTH_STEPS.iter().filter(|&&step| length >= step).count() as u32 * LENGTH_POINTS;

    let variety = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    total += variety.iter().filter(|&&hit| hit).count() as u32 * VARIETY_POINTS;

    if length > LONG_BONUS_OVER {
        total += LONG_BONUS;
    }

    let score = total.min(MAX_SCORE) as u8;
    let level = StrengthLevel::from_score(score);

    StrengthResult {
        score,
        level,
        label: level.label(),
    }
}
