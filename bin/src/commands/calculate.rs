//! Calculate command implementation.

use anyhow::Result;
use startrit_lib::prelude::*;

use crate::config::Config;
use crate::display::RateArgs;

/// Calculate and print a suggested rate.
pub(crate) fn calculate(args: &RateArgs, json: bool, config: &Config) -> Result<()> {
    let input = args.to_input(config)?;
    let output = config.estimator()?.calculate_rate(&input);
    tracing::info!(rate = output.suggested_rate, period = %output.billing_period, "estimate ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Suggested rate: {}",
            RateEstimator::format_rate(&output, &config.currency)
        );
    }
    Ok(())
}
