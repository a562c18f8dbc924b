//! startrit CLI - Suggested billing rates for deep-tech freelancers.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod display;

use config::Config;
use display::RateArgs;

#[derive(Parser)]
#[command(name = "startrit")]
#[command(about = "Suggested billing rates for deep-tech freelancers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a suggested rate
    Calculate {
        #[command(flatten)]
        rate: RateArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every step of a rate calculation
    Explain {
        #[command(flatten)]
        rate: RateArgs,
    },

    /// Show the suggested rate for every billing period
    Periods {
        #[command(flatten)]
        rate: RateArgs,
    },

    /// List recognized technology domains and their bonuses
    Domains {
        /// Autocomplete prefix (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over flags.
fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,startrit={level},startrit_estimate={level},startrit_types={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    match command {
        Commands::Calculate { rate, json } => commands::calculate::calculate(&rate, json, &config),
        Commands::Explain { rate } => commands::explain::explain(&rate, &config),
        Commands::Periods { rate } => commands::periods::show_periods(&rate, &config),
        Commands::Domains { search } => commands::domains::list_domains(search.as_deref(), &config),
    }
}
