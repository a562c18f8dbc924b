//! Raw form state and its normalization into a typed estimate input.
//!
//! The estimator form collects every field as free text. [`RateForm`] holds
//! that text as-is; [`RateForm::normalize`] is the single place where
//! missing or malformed values are replaced by their neutral defaults.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{BillingPeriod, Domain, RateEstimateInput, SkillLevel};

/// Untyped estimator form fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateForm {
    /// Technology domain text.
    #[serde(deserialize_with = "lenient_text")]
    pub domain: Option<String>,
    /// Years of experience text.
    #[serde(deserialize_with = "lenient_text")]
    pub years_of_experience: Option<String>,
    /// Skill level text.
    #[serde(deserialize_with = "lenient_text")]
    pub skill_level: Option<String>,
    /// Completed projects text.
    #[serde(deserialize_with = "lenient_text")]
    pub completed_projects: Option<String>,
    /// Client rating text.
    #[serde(deserialize_with = "lenient_text")]
    pub client_rating: Option<String>,
    /// Billing period text.
    #[serde(deserialize_with = "lenient_text")]
    pub billing_period: Option<String>,
}

impl RateForm {
    /// Parses form state from JSON.
    ///
    /// Field values may be strings, numbers, or null.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a JSON object.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlays every field set in `other` onto this form.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            domain: other.domain.or(self.domain),
            years_of_experience: other.years_of_experience.or(self.years_of_experience),
            skill_level: other.skill_level.or(self.skill_level),
            completed_projects: other.completed_projects.or(self.completed_projects),
            client_rating: other.client_rating.or(self.client_rating),
            billing_period: other.billing_period.or(self.billing_period),
        }
    }

    /// Converts the raw form into a typed input, substituting neutral
    /// defaults for anything missing or unparseable. Never fails.
    #[must_use]
    pub fn normalize(&self) -> RateEstimateInput {
        let input = RateEstimateInput {
            domain: self.domain.as_deref().map_or(Domain::Other, parse_domain),
            years_of_experience: parse_number(
                "yearsOfExperience",
                self.years_of_experience.as_deref(),
            )
            .map(f64::trunc),
            skill_level: self.skill_level.as_deref().and_then(SkillLevel::from_label),
            completed_projects: parse_number("completedProjects", self.completed_projects.as_deref()),
            client_rating: parse_number("clientRating", self.client_rating.as_deref()),
            billing_period: self
                .billing_period
                .as_deref()
                .map_or_else(BillingPeriod::default, BillingPeriod::from_label),
        };
        tracing::trace!(?input, "normalized rate form");
        input
    }
}

/// Resolves domain text, noting when it falls back to [`Domain::Other`].
fn parse_domain(text: &str) -> Domain {
    let domain = Domain::from_label(text);
    if !domain.is_recognized() && !text.trim().eq_ignore_ascii_case("other") {
        tracing::trace!(text, "unrecognized domain, using Other");
    }
    domain
}

/// Parses a numeric field, treating blank, malformed and non-finite text as absent.
fn parse_number(field: &str, text: Option<&str>) -> Option<f64> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::trace!(field, text, "ignoring unparseable number");
            None
        }
    }
}

/// Accepts strings, numbers and booleans as field text; null means unset.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
