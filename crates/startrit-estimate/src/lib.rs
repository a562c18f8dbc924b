//! Freelancer rate estimation for the Startrit marketplace.
//!
//! This crate turns a freelancer's declared domain, experience, skill level,
//! project history and client rating into a suggested billing rate:
//!
//! - [`RateCard`] - Pricing constants (base rate, bonuses, multipliers)
//! - [`RateEstimator`] - Computes suggested rates from a rate card
//! - [`RateBreakdown`] - Every intermediate step of one estimate
//! - [`calculate_rate`] - Estimate with the standard rate card

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/startrit/startrit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod data;
mod estimator;

pub use data::{DomainBonuses, RateCard, RateCardError, SkillBonuses};
pub use estimator::{RateBreakdown, RateEstimator, calculate_rate};
