//! Billing period definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StartritError;

/// Unit of time a suggested rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    /// Per hour.
    #[default]
    Hourly,
    /// Per 40-hour week.
    Weekly,
    /// Per 160-hour month.
    Monthly,
}

impl BillingPeriod {
    /// Returns the number of billable hours in one period.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        match self {
            Self::Hourly => 1,
            Self::Weekly => 40,
            Self::Monthly => 160,
        }
    }

    /// Returns the period as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Returns the unit label used after a rate, as in `$70/hour`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "hour",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    /// Resolves a free-text label, falling back to [`BillingPeriod::Hourly`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Returns all billing periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hourly, Self::Weekly, Self::Monthly]
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = StartritError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" | "hour" | "h" => Ok(Self::Hourly),
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            _ => Err(StartritError::InvalidBillingPeriod(s.to_string())),
        }
    }
}
