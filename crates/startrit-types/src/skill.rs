//! Self-declared skill levels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StartritError;

/// Self-declared proficiency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    /// Entry level.
    Beginner,
    /// Working proficiency.
    Intermediate,
    /// Expert proficiency.
    Advanced,
}

impl SkillLevel {
    /// Resolves a free-text label; unrecognized or empty labels mean unset.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// Returns the skill level as a lowercase string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Returns all skill levels in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Beginner, Self::Intermediate, Self::Advanced]
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = StartritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(StartritError::InvalidSkillLevel(s.to_string())),
        }
    }
}
