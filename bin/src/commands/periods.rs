//! Periods command implementation.

use anyhow::Result;
use startrit_lib::prelude::*;

use crate::config::Config;
use crate::display::{RateArgs, print_input_summary};

/// Show the suggested rate for every billing period.
pub(crate) fn show_periods(args: &RateArgs, config: &Config) -> Result<()> {
    let input = args.to_input(config)?;
    let estimator = config.estimator()?;

    print_input_summary(&input);
    println!("\n{:<10} {:>8} {:>16}", "PERIOD", "HOURS", "RATE");
    println!("{}", "-".repeat(36));

    for output in estimator.period_table(&input) {
        println!(
            "{:<10} {:>8} {:>16}",
            output.billing_period.as_str(),
            output.billing_period.hours(),
            RateEstimator::format_rate(&output, &config.currency),
        );
    }

    println!("\nNote: Weekly and monthly rates assume 40 and 160 billable hours.");
    Ok(())
}
