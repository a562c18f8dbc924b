//! Explain command implementation.
//!
//! Prints each bonus and multiplier that contributed to a rate.

use anyhow::Result;
use startrit_lib::prelude::*;

use crate::config::Config;
use crate::display::{RateArgs, print_input_summary};

/// Show every step of a rate calculation.
pub(crate) fn explain(args: &RateArgs, config: &Config) -> Result<()> {
    let input = args.to_input(config)?;
    let breakdown = config.estimator()?.breakdown(&input);

    print_input_summary(&input);
    println!("{}", "-".repeat(60));
    println!(
        "{}",
        RateEstimator::format_breakdown(&breakdown, &config.currency)
    );
    println!("\nNote: This is a non-binding estimate.");
    Ok(())
}
