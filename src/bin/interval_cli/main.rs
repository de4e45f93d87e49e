// ABOUTME: interval-laps CLI - tags interval laps in activity JSON documents
// ABOUTME: Acts as the classifier's caller: loads documents, persists tokens and flags, prints reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Tag interval laps in place, skipping activities already evaluated
//! interval-laps tag activities/*.json
//!
//! # Recompute from scratch after lap boundaries were edited
//! interval-laps tag --force activities/8215675956.json
//!
//! # Report what would change without writing
//! interval-laps tag --dry-run activities/*.json
//!
//! # Summarize interval laps between 3:30 and 4:15 min/km
//! interval-laps summary activities/8215675956.json --fastest-pace 3.5 --slowest-pace 4.25
//!
//! # Show effective thresholds and the version token they produce
//! interval-laps config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use interval_laps::errors::AppResult;
use interval_laps::intelligence::{IntervalClassifier, IntervalDetectionConfig};
use interval_laps::logging::LoggingConfig;
use interval_laps::tagging::TagOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "interval-laps",
    about = "Interval lap detection for activity documents",
    long_about = "Tags the laps of structured interval workouts in JSON activity documents and reports per-activity interval summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Tag interval laps and write updated documents back
    Tag {
        /// Activity documents to process
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Invalidate stored tags first so every activity is recomputed
        #[arg(long)]
        force: bool,

        /// Evaluate without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print interval summaries for the activities of one document
    Summary {
        /// Activity document to summarize
        file: PathBuf,

        /// Slowest accepted lap speed (m/s), overrides --slowest-pace
        #[arg(long)]
        min_speed: Option<f64>,

        /// Fastest accepted lap speed (m/s), overrides --fastest-pace
        #[arg(long)]
        max_speed: Option<f64>,

        /// Fastest accepted lap pace (min/km)
        #[arg(long)]
        fastest_pace: Option<f64>,

        /// Slowest accepted lap pace (min/km)
        #[arg(long)]
        slowest_pace: Option<f64>,
    },

    /// Print the effective detection thresholds and version token
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error.code = ?e.code, "{e}");
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = IntervalDetectionConfig::load()?;
    let classifier = IntervalClassifier::new(config);
    debug!(classifier.version = %classifier.version(), "Classifier ready");

    match command {
        Command::Tag {
            files,
            force,
            dry_run,
        } => commands::tag::run(&classifier, &files, TagOptions { force, dry_run }),
        Command::Summary {
            file,
            min_speed,
            max_speed,
            fastest_pace,
            slowest_pace,
        } => {
            let window =
                commands::summary::speed_window(min_speed, max_speed, fastest_pace, slowest_pace);
            commands::summary::run(&classifier, &file, &window)
        }
        Command::Config => commands::config::run(&classifier),
    }
}
