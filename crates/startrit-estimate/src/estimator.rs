//! Rate estimation logic.

use std::sync::OnceLock;

use startrit_types::{BillingPeriod, RateEstimateInput, RateEstimateOutput};

use crate::data::RateCard;

/// Static estimator instance.
static ESTIMATOR: OnceLock<RateEstimator> = OnceLock::new();

/// Every intermediate value of a single estimate, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBreakdown {
    /// Starting hourly rate.
    pub base_rate: f64,
    /// Domain bonus added to the base.
    pub domain_bonus: f64,
    /// Experience bonus added to the base.
    pub experience_bonus: f64,
    /// Skill bonus added to the base.
    pub skill_bonus: f64,
    /// Sum of the base and all additive bonuses.
    pub subtotal: f64,
    /// Completed-project multiplier, in `[1, 2]` for non-negative counts.
    pub project_multiplier: f64,
    /// Client rating multiplier.
    pub rating_multiplier: f64,
    /// Hourly rate after both multipliers, before rounding.
    pub hourly_rate: f64,
    /// Period the rate is scaled to.
    pub billing_period: BillingPeriod,
    /// Rate scaled to the billing period, before rounding.
    pub period_rate: f64,
    /// Final rounded rate.
    pub suggested_rate: u64,
}

impl RateBreakdown {
    /// Returns the final output value.
    #[must_use]
    pub const fn output(&self) -> RateEstimateOutput {
        RateEstimateOutput::new(self.suggested_rate, self.billing_period)
    }
}

/// Freelancer rate estimator.
///
/// Pure and total: any input produces a finite, non-negative rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateEstimator {
    card: RateCard,
}

impl RateEstimator {
    /// Creates a new estimator using the given rate card.
    #[must_use]
    pub const fn new(card: RateCard) -> Self {
        Self { card }
    }

    /// Returns the global estimator instance with the standard rate card.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(*RateCard::global()))
    }

    /// Returns the rate card in use.
    #[must_use]
    pub const fn card(&self) -> &RateCard {
        &self.card
    }

    /// Computes the suggested rate for the given input.
    #[must_use]
    pub fn calculate_rate(&self, input: &RateEstimateInput) -> RateEstimateOutput {
        self.breakdown(input).output()
    }

    /// Computes the suggested rate and every intermediate step.
    ///
    /// Additive bonuses are applied first, then the project and rating
    /// multipliers, then the period scale. Only the final value is rounded.
    #[must_use]
    pub fn breakdown(&self, input: &RateEstimateInput) -> RateBreakdown {
        let card = &self.card;

        let base_rate = card.base_rate;
        let domain_bonus = card.domain_bonus(input.domain);
        let experience_bonus = finite(input.years_of_experience)
            .map_or(0.0, |years| card.per_year_bonus * years);
        let skill_bonus = card.skill_bonus(input.skill_level);
        let subtotal = base_rate + domain_bonus + experience_bonus + skill_bonus;

        let project_multiplier = match finite(input.completed_projects) {
            Some(projects) if projects > 0.0 => {
                1.0 + (projects / card.project_saturation).min(1.0)
            }
            _ => 1.0,
        };

        let rating_multiplier = finite(input.client_rating)
            .map_or(1.0, |rating| 1.0 + (rating - card.rating_midpoint) * card.rating_step);

        let hourly_rate = subtotal * project_multiplier * rating_multiplier;
        let period_rate = hourly_rate * f64::from(input.billing_period.hours());
        let suggested_rate = round_rate(period_rate);

        let breakdown = RateBreakdown {
            base_rate,
            domain_bonus,
            experience_bonus,
            skill_bonus,
            subtotal,
            project_multiplier,
            rating_multiplier,
            hourly_rate,
            billing_period: input.billing_period,
            period_rate,
            suggested_rate,
        };
        tracing::debug!(?input, ?breakdown, "calculated rate");
        breakdown
    }

    /// Computes the suggested rate for every billing period.
    #[must_use]
    pub fn period_table(&self, input: &RateEstimateInput) -> Vec<RateEstimateOutput> {
        BillingPeriod::all()
            .iter()
            .map(|&period| self.calculate_rate(&input.with_period(period)))
            .collect()
    }

    /// Formats a rate with a currency symbol and period label (e.g., "$2,800/week").
    #[must_use]
    pub fn format_rate(output: &RateEstimateOutput, currency: &str) -> String {
        format!(
            "{}{}/{}",
            currency,
            Self::format_amount(output.suggested_rate),
            output.billing_period.label()
        )
    }

    /// Formats a whole amount with thousands separators (e.g., "11,200").
    #[must_use]
    pub fn format_amount(amount: u64) -> String {
        let digits = amount.to_string();
        let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                formatted.push(',');
            }
            formatted.push(c);
        }
        formatted
    }

    /// Formats a breakdown as a human-readable summary.
    #[must_use]
    pub fn format_breakdown(breakdown: &RateBreakdown, currency: &str) -> String {
        format!(
            "Base rate:          {:>10.2}\n\
             Domain bonus:       {:>+10.2}\n\
             Experience bonus:   {:>+10.2}\n\
             Skill bonus:        {:>+10.2}\n\
             Subtotal:           {:>10.2}\n\
             Project multiplier: {:>10.2}x\n\
             Rating multiplier:  {:>10.2}x\n\
             Hourly rate:        {:>10.2}\n\
             Period:             {:>10} (x{})\n\
             Suggested rate:     {}",
            breakdown.base_rate,
            breakdown.domain_bonus,
            breakdown.experience_bonus,
            breakdown.skill_bonus,
            breakdown.subtotal,
            breakdown.project_multiplier,
            breakdown.rating_multiplier,
            breakdown.hourly_rate,
            breakdown.billing_period.as_str(),
            breakdown.billing_period.hours(),
            Self::format_rate(&breakdown.output(), currency),
        )
    }
}

impl Default for RateEstimator {
    fn default() -> Self {
        *Self::global()
    }
}

/// Computes the suggested rate with the standard rate card.
#[must_use]
pub fn calculate_rate(input: &RateEstimateInput) -> RateEstimateOutput {
    RateEstimator::global().calculate_rate(input)
}

/// Drops non-finite values so they behave like missing input.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Rounds to the nearest whole unit.
///
/// Negative and NaN totals become zero; totals beyond `u64::MAX`, including
/// `+inf`, saturate.
fn round_rate(value: f64) -> u64 {
    if value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
