//! Badge label and colour for a backend strength score.
//!
//! Scores come from the backend on a 0-100 scale. They are unrelated to the
//! crack time estimate and the two are never reconciled.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryDangerous,
    Dangerous,
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
    Invulnerable,
}

impl StrengthLabel {
    /// Maps a score to its label. Scores outside `[0, 100]` (and NaN) have none.
    pub fn from_score(score: f64) -> Option<Self> {
        let label = match score {
            s if (0.0..20.0).contains(&s) => Self::VeryDangerous,
            s if (20.0..40.0).contains(&s) => Self::Dangerous,
            s if (40.0..60.0).contains(&s) => Self::VeryWeak,
            s if (60.0..80.0).contains(&s) => Self::Weak,
            s if (80.0..90.0).contains(&s) => Self::Good,
            s if (90.0..95.0).contains(&s) => Self::Strong,
            s if (95.0..99.0).contains(&s) => Self::VeryStrong,
            s if (99.0..=100.0).contains(&s) => Self::Invulnerable,
            _ => return None,
        };
        Some(label)
    }

    pub fn color(self) -> StrengthColor {
        match self {
            Self::VeryDangerous | Self::Dangerous => StrengthColor::Red,
            Self::VeryWeak => StrengthColor::Orange,
            Self::Weak => StrengthColor::Yellow,
            Self::Good | Self::Strong | Self::VeryStrong | Self::Invulnerable => {
                StrengthColor::Green
            }
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::VeryDangerous => "VERY DANGEROUS",
            Self::Dangerous => "DANGEROUS",
            Self::VeryWeak => "VERY WEAK",
            Self::Weak => "WEAK",
            Self::Good => "GOOD",
            Self::Strong => "STRONG",
            Self::VeryStrong => "VERY STRONG",
            Self::Invulnerable => "INVULNERABLE",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthColor {
    Red,
    Orange,
    Yellow,
    Green,
}

impl StrengthColor {
    pub fn from_score(score: f64) -> Option<Self> {
        StrengthLabel::from_score(score).map(StrengthLabel::color)
    }
}
