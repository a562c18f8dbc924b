//! Rate estimate value objects.

use serde::{Deserialize, Serialize};

use crate::{BillingPeriod, Domain, SkillLevel};

/// Signals describing a freelancer, as consumed by the rate estimator.
///
/// Optional fields carry their neutral meaning when `None`: no experience
/// bonus, no skill bonus, no project multiplier, no rating adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEstimateInput {
    /// Declared technology domain.
    pub domain: Domain,
    /// Years of professional experience.
    pub years_of_experience: Option<f64>,
    /// Self-declared skill level.
    pub skill_level: Option<SkillLevel>,
    /// Number of projects completed on the platform.
    pub completed_projects: Option<f64>,
    /// Average client rating, nominally in `[1.0, 5.0]`.
    pub client_rating: Option<f64>,
    /// Period the suggested rate is expressed in.
    pub billing_period: BillingPeriod,
}

impl RateEstimateInput {
    /// Creates an input for the given domain with every other signal unset.
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            ..Self::default()
        }
    }

    /// Sets the years of experience.
    #[must_use]
    pub const fn with_experience(mut self, years: f64) -> Self {
        self.years_of_experience = Some(years);
        self
    }

    /// Sets the skill level.
    #[must_use]
    pub const fn with_skill(mut self, skill: SkillLevel) -> Self {
        self.skill_level = Some(skill);
        self
    }

    /// Sets the number of completed projects.
    #[must_use]
    pub const fn with_completed_projects(mut self, projects: f64) -> Self {
        self.completed_projects = Some(projects);
        self
    }

    /// Sets the average client rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.client_rating = Some(rating);
        self
    }

    /// Sets the billing period.
    #[must_use]
    pub const fn with_period(mut self, period: BillingPeriod) -> Self {
        self.billing_period = period;
        self
    }
}

/// Result of a rate estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEstimateOutput {
    /// Suggested rate, rounded to a whole currency unit.
    pub suggested_rate: u64,
    /// Period the rate is expressed in.
    pub billing_period: BillingPeriod,
}

impl RateEstimateOutput {
    /// Creates a new estimate output.
    #[must_use]
    pub const fn new(suggested_rate: u64, billing_period: BillingPeriod) -> Self {
        Self {
            suggested_rate,
            billing_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let input = RateEstimateInput::new(Domain::Ai)
            .with_experience(5.0)
            .with_skill(SkillLevel::Advanced)
            .with_period(BillingPeriod::Weekly);

        assert_eq!(input.domain, Domain::Ai);
        assert_eq!(input.years_of_experience, Some(5.0));
        assert_eq!(input.skill_level, Some(SkillLevel::Advanced));
        assert_eq!(input.completed_projects, None);
        assert_eq!(input.client_rating, None);
        assert_eq!(input.billing_period, BillingPeriod::Weekly);
    }

    #[test]
    fn test_default_is_neutral() {
        let input = RateEstimateInput::default();
        assert_eq!(input.domain, Domain::Other);
        assert_eq!(input.billing_period, BillingPeriod::Hourly);
        assert!(input.skill_level.is_none());
    }

    #[test]
    fn test_output_json() {
        let output = RateEstimateOutput::new(2800, BillingPeriod::Weekly);
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"suggestedRate":2800,"billingPeriod":"weekly"}"#);
    }
}
