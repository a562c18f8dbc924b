//! Technology domain definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StartritError;

/// Declared technology specialization of a freelancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Artificial intelligence and machine learning.
    Ai,
    /// Blockchain and distributed ledgers.
    Blockchain,
    /// Robotics and autonomous systems.
    Robotics,
    /// Internet of things and embedded devices.
    Iot,
    /// Cloud infrastructure.
    Cloud,
    /// Anything else, including an empty declaration.
    #[default]
    Other,
}

impl Domain {
    /// Resolves a free-text label, falling back to [`Domain::Other`].
    ///
    /// Matching is case-insensitive. Surrounding whitespace is also ignored,
    /// so a padded `" AI "` typed into the form still counts as AI.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::recognized()
            .iter()
            .copied()
            .find(|domain| domain.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Self::Other)
    }

    /// Returns the canonical display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Blockchain => "Blockchain",
            Self::Robotics => "Robotics",
            Self::Iot => "IoT",
            Self::Cloud => "Cloud",
            Self::Other => "Other",
        }
    }

    /// Returns true unless this is the [`Domain::Other`] fallback.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Returns the recognized domains in descending bonus order.
    #[must_use]
    pub const fn recognized() -> &'static [Self] {
        &[
            Self::Ai,
            Self::Blockchain,
            Self::Robotics,
            Self::Iot,
            Self::Cloud,
        ]
    }

    /// Returns recognized domains whose label starts with `prefix`.
    ///
    /// Used for autocomplete on the domain field; an empty prefix yields
    /// every recognized domain.
    #[must_use]
    pub fn suggest(prefix: &str) -> Vec<Self> {
        let prefix = prefix.trim().to_lowercase();
        Self::recognized()
            .iter()
            .copied()
            .filter(|domain| domain.as_str().to_lowercase().starts_with(&prefix))
            .collect()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = StartritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "other" => Ok(Self::Other),
            label => match Self::from_label(label) {
                Self::Other => Err(StartritError::InvalidDomain(s.to_string())),
                domain => Ok(domain),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Domain::from_label("AI"), Domain::Ai);
        assert_eq!(Domain::from_label("ai"), Domain::Ai);
        assert_eq!(Domain::from_label("iot"), Domain::Iot);
        assert_eq!(Domain::from_label("  BLOCKCHAIN "), Domain::Blockchain);
    }

    #[test]
    fn test_from_label_falls_back_to_other() {
        assert_eq!(Domain::from_label(""), Domain::Other);
        assert_eq!(Domain::from_label("quantum"), Domain::Other);
        assert!(!Domain::from_label("web").is_recognized());
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("Robotics".parse::<Domain>().unwrap(), Domain::Robotics);
        assert_eq!("other".parse::<Domain>().unwrap(), Domain::Other);
        assert!("quantum".parse::<Domain>().is_err());
        assert!("".parse::<Domain>().is_err());
    }

    #[test]
    fn test_suggest() {
        assert_eq!(Domain::suggest("b"), vec![Domain::Blockchain]);
        assert_eq!(Domain::suggest("C"), vec![Domain::Cloud]);
        assert_eq!(Domain::suggest("").len(), 5);
        assert!(Domain::suggest("x").is_empty());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Domain::Iot).unwrap();
        assert_eq!(json, "\"iot\"");
        let parsed: Domain = serde_json::from_str("\"cloud\"").unwrap();
        assert_eq!(parsed, Domain::Cloud);
    }
}
