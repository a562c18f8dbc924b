//! Core types for the Startrit rate estimator.
//!
//! This crate provides the value objects shared by the estimator and its
//! front ends:
//!
//! - [`Domain`] - Declared technology specialization
//! - [`SkillLevel`] - Self-declared proficiency tier
//! - [`BillingPeriod`] - Unit of time a rate is expressed in
//! - [`RateEstimateInput`] - Typed estimator input
//! - [`RateEstimateOutput`] - Suggested rate
//! - [`RateForm`] - Raw form state and its normalization

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/startrit/startrit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod billing_period;
mod domain;
mod error;
mod form;
mod rate;
mod skill;

pub use billing_period::BillingPeriod;
pub use domain::Domain;
pub use error::{Result, StartritError};
pub use form::RateForm;
pub use rate::{RateEstimateInput, RateEstimateOutput};
pub use skill::SkillLevel;
