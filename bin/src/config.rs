//! Configuration file loading.
//!
//! Settings come from a TOML file: the `--config` path if given, otherwise
//! `config.toml` in the platform config directory. A missing default file
//! means default settings. `STARTRIT_CURRENCY` overrides the currency symbol.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use startrit_lib::prelude::*;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured currency symbol.
const CURRENCY_ENV: &str = "STARTRIT_CURRENCY";

/// CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Currency symbol printed before rates.
    pub(crate) currency: String,
    /// Billing period used when none is given.
    pub(crate) default_period: BillingPeriod,
    /// Optional JSON rate card replacing the standard one.
    pub(crate) rate_card: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            default_period: BillingPeriod::Hourly,
            rate_card: None,
        }
    }
}

impl Config {
    /// Loads the configuration, applying the environment override.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_path(&path)?,
                _ => Self::default(),
            },
        };

        if let Ok(currency) = std::env::var(CURRENCY_ENV) {
            tracing::debug!(%currency, "currency overridden from environment");
            config.currency = currency;
        }

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Parses TOML config text.
    pub(crate) fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns `config.toml` in the platform config directory.
    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "startrit", "startrit")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Builds the estimator, loading the configured rate card if any.
    pub(crate) fn estimator(&self) -> Result<RateEstimator> {
        match &self.rate_card {
            Some(path) => {
                let card = RateCard::from_path(path)
                    .with_context(|| format!("Unusable rate card '{}'", path.display()))?;
                tracing::info!(path = %path.display(), "using custom rate card");
                Ok(RateEstimator::new(card))
            }
            None => Ok(*RateEstimator::global()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            currency = "€"
            default_period = "monthly"
            rate_card = "/etc/startrit/card.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.currency, "€");
        assert_eq!(config.default_period, BillingPeriod::Monthly);
        assert_eq!(config.rate_card, Some(PathBuf::from("/etc/startrit/card.json")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("colour = \"blue\"").is_err());
        assert!(Config::from_toml("default_period = \"yearly\"").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_period = \"weekly\"").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.default_period, BillingPeriod::Weekly);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        assert!(Config::from_path(Path::new("/nonexistent/startrit.toml")).is_err());
    }

    #[test]
    fn test_custom_rate_card() {
        let mut card = RateCard::STANDARD;
        card.base_rate = 100.0;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&card).unwrap()).unwrap();

        let config = Config {
            rate_card: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let estimator = config.estimator().unwrap();
        let output = estimator.calculate_rate(&RateEstimateInput::default());
        assert_eq!(output.suggested_rate, 105);
    }
}
