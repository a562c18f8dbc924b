//! Shared rate arguments and output helpers for the startrit CLI.

use anyhow::{Context, Result};
use clap::Args;
use startrit_lib::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Estimator inputs, taken verbatim as text.
///
/// Values are not validated here: malformed numbers and unknown labels fall
/// back to neutral defaults when the form is normalized.
#[derive(Args, Debug, Default)]
pub(crate) struct RateArgs {
    /// Technology domain (ai, blockchain, robotics, iot, cloud, or anything else)
    #[arg(short, long)]
    domain: Option<String>,

    /// Years of experience
    #[arg(short, long)]
    experience: Option<String>,

    /// Skill level (beginner, intermediate, advanced)
    #[arg(short, long)]
    skill: Option<String>,

    /// Completed projects on the platform
    #[arg(long)]
    projects: Option<String>,

    /// Average client rating (1-5)
    #[arg(short, long)]
    rating: Option<String>,

    /// Billing period (hourly, weekly, monthly). Defaults to the configured period.
    #[arg(short, long)]
    period: Option<String>,

    /// JSON form file to read inputs from ("-" for stdin). Flags override its values.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl RateArgs {
    /// Returns the flags as a raw form.
    fn flags(&self) -> RateForm {
        RateForm {
            domain: self.domain.clone(),
            years_of_experience: self.experience.clone(),
            skill_level: self.skill.clone(),
            completed_projects: self.projects.clone(),
            client_rating: self.rating.clone(),
            billing_period: self.period.clone(),
        }
    }

    /// Builds the raw form from the input file, flags, and configured default period.
    pub(crate) fn to_form(&self, config: &Config) -> Result<RateForm> {
        let base = match &self.input {
            Some(path) => read_form(path)?,
            None => RateForm::default(),
        };
        let mut form = base.merge(self.flags());
        if form.billing_period.is_none() {
            form.billing_period = Some(config.default_period.to_string());
        }
        Ok(form)
    }

    /// Builds the typed estimator input.
    pub(crate) fn to_input(&self, config: &Config) -> Result<RateEstimateInput> {
        Ok(self.to_form(config)?.normalize())
    }
}

/// Reads a JSON form from a file, or from stdin when the path is "-".
fn read_form(path: &Path) -> Result<RateForm> {
    let json = if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read form from stdin")?;
        json
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file '{}'", path.display()))?
    };
    RateForm::from_json(&json).with_context(|| format!("Invalid form JSON in '{}'", path.display()))
}

/// Prints the line that summarizes an input, as shown above every result.
pub(crate) fn print_input_summary(input: &RateEstimateInput) {
    let skill = input
        .skill_level
        .map_or_else(|| "unset".to_string(), |s| s.to_string());
    println!(
        "Domain: {}  Experience: {}  Skill: {}  Projects: {}  Rating: {}",
        input.domain,
        format_optional(input.years_of_experience),
        skill,
        format_optional(input.completed_projects),
        format_optional(input.client_rating),
    );
}

/// Formats an optional number, showing "unset" when absent.
fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_use_configured_period() {
        let args = RateArgs {
            domain: Some("ai".to_string()),
            ..RateArgs::default()
        };
        let config = Config {
            default_period: BillingPeriod::Monthly,
            ..Config::default()
        };

        let input = args.to_input(&config).unwrap();
        assert_eq!(input.domain, Domain::Ai);
        assert_eq!(input.billing_period, BillingPeriod::Monthly);
    }

    #[test]
    fn test_flags_override_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"domain": "cloud", "yearsOfExperience": 4, "billingPeriod": "weekly"}}"#
        )
        .unwrap();

        let args = RateArgs {
            domain: Some("robotics".to_string()),
            input: Some(file.path().to_path_buf()),
            ..RateArgs::default()
        };
        let input = args.to_input(&Config::default()).unwrap();

        assert_eq!(input.domain, Domain::Robotics);
        assert_eq!(input.years_of_experience, Some(4.0));
        assert_eq!(input.billing_period, BillingPeriod::Weekly);
    }

    #[test]
    fn test_malformed_flags_degrade() {
        let args = RateArgs {
            experience: Some("lots".to_string()),
            rating: Some("great".to_string()),
            ..RateArgs::default()
        };
        let input = args.to_input(&Config::default()).unwrap();
        assert_eq!(calculate_rate(&input).suggested_rate, 15);
    }

    #[test]
    fn test_invalid_input_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let args = RateArgs {
            input: Some(file.path().to_path_buf()),
            ..RateArgs::default()
        };
        assert!(args.to_form(&Config::default()).is_err());
    }
}
