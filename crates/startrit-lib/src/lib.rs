//! Startrit freelancer rate estimator.
//!
//! This is a facade crate that re-exports functionality from the startrit
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use startrit_lib::prelude::*;
//!
//! let form = RateForm {
//!     domain: Some("Blockchain".to_string()),
//!     years_of_experience: Some("3".to_string()),
//!     skill_level: Some("intermediate".to_string()),
//!     completed_projects: Some("50".to_string()),
//!     client_rating: Some("5".to_string()),
//!     billing_period: None,
//! };
//!
//! let output = calculate_rate(&form.normalize());
//! assert_eq!(output.suggested_rate, 122);
//! assert_eq!(RateEstimator::format_rate(&output, "$"), "$122/hour");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/startrit/startrit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use startrit_types::*;

// Re-export the estimator
pub use startrit_estimate::{
    DomainBonuses, RateBreakdown, RateCard, RateCardError, RateEstimator, SkillBonuses,
    calculate_rate,
};

/// Prelude module for convenient imports.
///
/// ```
/// use startrit_lib::prelude::*;
/// ```
pub mod prelude {
    pub use startrit_types::{
        BillingPeriod, Domain, RateEstimateInput, RateEstimateOutput, RateForm, Result,
        SkillLevel, StartritError,
    };

    pub use startrit_estimate::{RateBreakdown, RateCard, RateEstimator, calculate_rate};
}
