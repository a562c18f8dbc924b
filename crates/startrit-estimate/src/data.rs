//! Rate card with the pricing constants used by the estimator.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use startrit_types::{Domain, SkillLevel};
use thiserror::Error;

/// Embedded JSON with the standard rate card.
const RATE_CARD_JSON: &str = include_str!("../data/rate_card.json");

/// Static rate card instance.
static RATE_CARD: OnceLock<RateCard> = OnceLock::new();

/// Errors that can occur while loading a rate card.
#[derive(Error, Debug)]
pub enum RateCardError {
    /// Failed to read a rate card file.
    #[error("Failed to read rate card '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse rate card JSON.
    #[error("Failed to parse rate card: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Additive bonus per technology domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainBonuses {
    /// Bonus for [`Domain::Ai`].
    pub ai: f64,
    /// Bonus for [`Domain::Blockchain`].
    pub blockchain: f64,
    /// Bonus for [`Domain::Robotics`].
    pub robotics: f64,
    /// Bonus for [`Domain::Iot`].
    pub iot: f64,
    /// Bonus for [`Domain::Cloud`].
    pub cloud: f64,
    /// Bonus for anything else.
    pub other: f64,
}

/// Additive bonus per skill level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillBonuses {
    /// Bonus for [`SkillLevel::Beginner`].
    pub beginner: f64,
    /// Bonus for [`SkillLevel::Intermediate`].
    pub intermediate: f64,
    /// Bonus for [`SkillLevel::Advanced`].
    pub advanced: f64,
}

/// Pricing constants for the rate estimator.
///
/// All amounts are hourly and in a single, unnamed currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Starting hourly rate before any bonus.
    pub base_rate: f64,
    /// Bonus per year of experience.
    pub per_year_bonus: f64,
    /// Bonus per technology domain.
    pub domain_bonus: DomainBonuses,
    /// Bonus per skill level.
    pub skill_bonus: SkillBonuses,
    /// Completed-project count at which the project bonus stops growing.
    pub project_saturation: f64,
    /// Client rating that leaves the rate unchanged.
    pub rating_midpoint: f64,
    /// Fractional adjustment per rating point away from the midpoint.
    pub rating_step: f64,
}

impl RateCard {
    /// The standard rate card.
    pub const STANDARD: Self = Self {
        base_rate: 10.0,
        per_year_bonus: 2.0,
        domain_bonus: DomainBonuses {
            ai: 30.0,
            blockchain: 25.0,
            robotics: 20.0,
            iot: 15.0,
            cloud: 10.0,
            other: 5.0,
        },
        skill_bonus: SkillBonuses {
            beginner: 0.0,
            intermediate: 10.0,
            advanced: 20.0,
        },
        project_saturation: 50.0,
        rating_midpoint: 3.0,
        rating_step: 0.1,
    };

    /// Returns the global rate card loaded from the embedded JSON.
    ///
    /// Falls back to [`RateCard::STANDARD`] if the embedded data cannot be parsed.
    #[must_use]
    pub fn global() -> &'static Self {
        RATE_CARD.get_or_init(|| {
            Self::from_json(RATE_CARD_JSON).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "embedded rate card invalid, using standard card");
                Self::STANDARD
            })
        })
    }

    /// Creates a rate card from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, RateCardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a rate card from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, RateCardError> {
        let json = std::fs::read_to_string(path).map_err(|source| RateCardError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Returns the additive bonus for a domain.
    #[must_use]
    pub const fn domain_bonus(&self, domain: Domain) -> f64 {
        let bonuses = &self.domain_bonus;
        match domain {
            Domain::Ai => bonuses.ai,
            Domain::Blockchain => bonuses.blockchain,
            Domain::Robotics => bonuses.robotics,
            Domain::Iot => bonuses.iot,
            Domain::Cloud => bonuses.cloud,
            Domain::Other => bonuses.other,
        }
    }

    /// Returns the additive bonus for an optional skill level; unset is zero.
    #[must_use]
    pub const fn skill_bonus(&self, skill: Option<SkillLevel>) -> f64 {
        let bonuses = &self.skill_bonus;
        match skill {
            Some(SkillLevel::Beginner) => bonuses.beginner,
            Some(SkillLevel::Intermediate) => bonuses.intermediate,
            Some(SkillLevel::Advanced) => bonuses.advanced,
            None => 0.0,
        }
    }
}

impl Default for RateCard {
    fn default() -> Self {
        *Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_card_matches_standard() {
        let card = RateCard::from_json(RATE_CARD_JSON).expect("embedded card should parse");
        assert_eq!(card, RateCard::STANDARD);
        assert_eq!(*RateCard::global(), RateCard::STANDARD);
    }

    #[test]
    fn test_domain_bonuses() {
        let card = RateCard::STANDARD;
        assert_eq!(card.domain_bonus(Domain::Ai), 30.0);
        assert_eq!(card.domain_bonus(Domain::Blockchain), 25.0);
        assert_eq!(card.domain_bonus(Domain::Robotics), 20.0);
        assert_eq!(card.domain_bonus(Domain::Iot), 15.0);
        assert_eq!(card.domain_bonus(Domain::Cloud), 10.0);
        assert_eq!(card.domain_bonus(Domain::Other), 5.0);
    }

    #[test]
    fn test_skill_bonuses() {
        let card = RateCard::STANDARD;
        assert_eq!(card.skill_bonus(None), 0.0);
        assert_eq!(card.skill_bonus(Some(SkillLevel::Beginner)), 0.0);
        assert_eq!(card.skill_bonus(Some(SkillLevel::Intermediate)), 10.0);
        assert_eq!(card.skill_bonus(Some(SkillLevel::Advanced)), 20.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RateCard::from_json("{\"base_rate\": 10.0}"),
            Err(RateCardError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = RateCard::from_path(Path::new("/nonexistent/rate_card.json")).unwrap_err();
        assert!(matches!(err, RateCardError::ReadFile { .. }));
    }
}
