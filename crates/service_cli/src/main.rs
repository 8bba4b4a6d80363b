//! Dice Report CLI - the law of large numbers for a fair die
//!
//! # Commands
//!
//! - `dice-report report` - Frequency tables for every sample size, plus the
//!   many-seed dispersion of the sample mean
//! - `dice-report trial -n <N>` - A single trial's frequency table
//!
//! Configuration is layered: defaults, then `--config` TOML, then
//! `DICE_REPORT_*` environment variables, then flags.

use anyhow::Result;
use clap::{Parser, Subcommand};
use service_cli::config::{build_config, CliArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Dice Report - sample means converging on 3.5
#[derive(Parser)]
#[command(name = "dice-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write output to FILE instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the convergence and dispersion studies
    Report {
        /// Seed of the report (finite integer)
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<String>,

        /// Comma-separated sample sizes
        #[arg(short = 'n', long, value_delimiter = ',', allow_hyphen_values = true)]
        sample_sizes: Option<Vec<i64>>,

        /// Seeds per sample size in the dispersion study
        #[arg(short, long)]
        replications: Option<usize>,

        /// Skip the dispersion study
        #[arg(long)]
        skip_dispersion: bool,
    },

    /// Run one trial and print its frequency table
    Trial {
        /// Number of rolls
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        sample_count: i64,

        /// Seed of the trial (finite integer)
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<String>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base = CliArgs {
        config_file: cli.config,
        format: cli.format,
        output: cli.output,
        log_level: cli.log_level,
        ..Default::default()
    };

    match cli.command {
        Commands::Report {
            seed,
            sample_sizes,
            replications,
            skip_dispersion,
        } => {
            let config = build_config(&CliArgs {
                seed,
                sample_sizes,
                replications,
                skip_dispersion,
                ..base
            })?;
            init_tracing(config.log_level.as_filter_str());
            tracing::info!("Dice Report v{}", service_cli::VERSION);
            commands::report::run(&config)?;
        }
        Commands::Trial { sample_count, seed } => {
            let config = build_config(&CliArgs { seed, ..base })?;
            init_tracing(config.log_level.as_filter_str());
            commands::trial::run(&config, sample_count)?;
        }
    }

    Ok(())
}
