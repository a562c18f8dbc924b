//! Benchmark fixtures for startrit.

use startrit_lib::prelude::*;

/// Named estimator inputs covering the neutral, typical and saturated cases.
#[must_use]
pub fn sample_inputs() -> Vec<(&'static str, RateEstimateInput)> {
    vec![
        ("empty", RateEstimateInput::default()),
        (
            "typical",
            RateEstimateInput::new(Domain::Ai)
                .with_experience(5.0)
                .with_skill(SkillLevel::Advanced),
        ),
        (
            "saturated",
            RateEstimateInput::new(Domain::Blockchain)
                .with_experience(3.0)
                .with_skill(SkillLevel::Intermediate)
                .with_completed_projects(200.0)
                .with_rating(5.0)
                .with_period(BillingPeriod::Monthly),
        ),
    ]
}

/// Raw form fixtures, as they would arrive from the estimator form.
#[must_use]
pub fn sample_forms() -> Vec<(&'static str, RateForm)> {
    vec![
        ("empty", RateForm::default()),
        (
            "malformed",
            RateForm {
                domain: Some("  quantum ".to_string()),
                years_of_experience: Some("ten".to_string()),
                skill_level: Some("guru".to_string()),
                completed_projects: Some("-".to_string()),
                client_rating: Some("NaN".to_string()),
                billing_period: Some("fortnightly".to_string()),
            },
        ),
        (
            "complete",
            RateForm {
                domain: Some("iot".to_string()),
                years_of_experience: Some("8".to_string()),
                skill_level: Some("Advanced".to_string()),
                completed_projects: Some("42".to_string()),
                client_rating: Some("4.6".to_string()),
                billing_period: Some("weekly".to_string()),
            },
        ),
    ]
}
