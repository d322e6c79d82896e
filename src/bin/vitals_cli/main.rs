// ABOUTME: Vitals CLI - derives display-ready health statistics from the command line
// ABOUTME: Classifies BMI and VO2 max, formats dates and counts, renders summaries, validates payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify a BMI value
//! vitals-cli bmi 30.93
//!
//! # Classify a VO2 max value for a 35 year old
//! vitals-cli vo2max 33.6 --age 35
//!
//! # Relative date against a fixed "now" in a fixed zone
//! vitals-cli relative-date 2024-03-01T19:45:00Z --now 2024-03-02T12:00:00Z --utc-offset +00:00
//!
//! # Group digits
//! vitals-cli thousands 13196 --format text
//!
//! # Render a profile summary
//! vitals-cli summary profile.json --format text
//!
//! # Validate a step count payload
//! vitals-cli ingest steps payload.json
//! ```

mod commands;
mod helpers;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use helpers::clock::parse_instant;
use helpers::display::print_error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use vitals::config::{parse_utc_offset, DisplayConfig};
use vitals::errors::{AppError, AppResult};
use vitals::formatters::OutputFormat;
use vitals::ingest::IngestKind;
use vitals::intelligence::{DayMatching, TimeFormat};
use vitals::logging::LoggingConfig;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "vitals-cli",
    version,
    about = "Vitals health metric derivation CLI",
    long_about = "Derives categories, relative dates and formatted values from recorded health samples."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Fixed UTC offset for day boundaries, e.g. +02:00 (default: system zone)
    #[arg(long, global = true, allow_hyphen_values = true, value_parser = parse_utc_offset)]
    utc_offset: Option<FixedOffset>,

    /// Output format: json or text
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Clock style for relative dates: 12h or 24h
    #[arg(long, global = true)]
    time_format: Option<TimeFormat>,

    /// Day matching for relative dates: day-of-month or calendar-date
    #[arg(long, global = true)]
    day_matching: Option<DayMatching>,
}

impl Cli {
    /// Flags take precedence over environment settings
    fn apply_overrides(&self, mut config: DisplayConfig) -> DisplayConfig {
        if let Some(offset) = self.utc_offset {
            config.utc_offset = Some(offset);
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(time_format) = self.time_format {
            config.time_format = time_format;
        }
        if let Some(day_matching) = self.day_matching {
            config.day_matching = day_matching;
        }
        config
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a Body Mass Index value
    Bmi {
        /// BMI value
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Classify a VO2 max value against age-matched norms
    Vo2max {
        /// VO2 max in ml/kg/min
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Age in years
        #[arg(long, allow_negative_numbers = true)]
        age: f64,
    },

    /// Describe a timestamp relative to now
    RelativeDate {
        /// RFC 3339 timestamp
        #[arg(value_parser = parse_instant)]
        timestamp: DateTime<FixedOffset>,

        /// Reference instant instead of the wall clock
        #[arg(long, value_parser = parse_instant)]
        now: Option<DateTime<FixedOffset>>,
    },

    /// Group an integer's digits with commas
    Thousands {
        /// Integer to format
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Render the summary cards of a stored profile
    Summary {
        /// Profile snapshot JSON file
        profile: PathBuf,

        /// Reference instant instead of the wall clock
        #[arg(long, value_parser = parse_instant)]
        now: Option<DateTime<FixedOffset>>,
    },

    /// Validate an incoming payload
    Ingest {
        /// Payload kind: profile, steps, running or workout
        kind: IngestKind,

        /// Payload JSON file
        payload: PathBuf,

        /// Default timestamp for samples without a date
        #[arg(long, value_parser = parse_instant)]
        now: Option<DateTime<FixedOffset>>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match DisplayConfig::from_env() {
        Ok(config) => cli.apply_overrides(config),
        Err(error) => return fail(error, cli.format.unwrap_or_default()),
    };

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(error) = logging.init() {
        return fail(error, config.output_format);
    }

    info!(format = %config.output_format, "Vitals CLI");

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(error, config.output_format),
    }
}

fn run(command: Command, config: &DisplayConfig) -> Result<()> {
    match command {
        Command::Bmi { value } => commands::classify::bmi(value, config),
        Command::Vo2max { value, age } => commands::classify::vo2_max(value, age, config),
        Command::RelativeDate { timestamp, now } => {
            commands::classify::relative_date(&timestamp, now, config)
        }
        Command::Thousands { value } => commands::classify::thousands(value, config),
        Command::Summary { profile, now } => commands::summary::render(&profile, now, config),
        Command::Ingest { kind, payload, now } => {
            commands::ingest::validate(kind, &payload, now, config)
        }
    }
}

fn fail(error: AppError, format: OutputFormat) -> ExitCode {
    let code = u8::try_from(error.exit_code()).unwrap_or(1);
    print_error(error, format);
    ExitCode::from(code)
}
