// ABOUTME: Single-value derivation commands for vitals-cli
// ABOUTME: Handles bmi, vo2max, relative-date and thousands subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use vitals::config::DisplayConfig;
use vitals::errors::AppResult;
use vitals::intelligence::{
    classify_bmi, classify_vo2_max, format_thousands, AgeReferenceRow, RelativeDateFormatter,
};

use crate::helpers::clock::now_in;
use crate::helpers::display::print_result;

type Result<T> = AppResult<T>;

#[derive(Serialize)]
struct BmiReport {
    bmi: f64,
    category: &'static str,
}

impl fmt::Display for BmiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Vo2MaxReport {
    vo2_max: f64,
    age: f64,
    category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_age: Option<u8>,
}

impl fmt::Display for Vo2MaxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RelativeDateReport {
    timestamp: String,
    now: String,
    relative_day: String,
    text: String,
}

impl fmt::Display for RelativeDateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Serialize)]
struct ThousandsReport {
    value: i64,
    formatted: String,
}

impl fmt::Display for ThousandsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Classify a BMI value
pub fn bmi(value: f64, config: &DisplayConfig) -> Result<()> {
    let report = BmiReport {
        bmi: value,
        category: classify_bmi(value),
    };
    print_result(&report, config.output_format)
}

/// Classify a VO2 max value for an age
pub fn vo2_max(value: f64, age: f64, config: &DisplayConfig) -> Result<()> {
    let reference_age = AgeReferenceRow::for_age(age).map(|row| row.age_floor);
    debug!(age, ?reference_age, "selected VO2 max reference row");

    let report = Vo2MaxReport {
        vo2_max: value,
        age,
        category: classify_vo2_max(value, age),
        reference_age,
    };
    print_result(&report, config.output_format)
}

/// Describe a timestamp relative to now
pub fn relative_date(
    timestamp: &DateTime<FixedOffset>,
    now: Option<DateTime<FixedOffset>>,
    config: &DisplayConfig,
) -> Result<()> {
    let formatter = config.relative_dates();
    let report = match config.utc_offset {
        Some(offset) => relative_report(&formatter, timestamp, &now_in(&offset, now)),
        None => relative_report(&formatter, timestamp, &now_in(&Local, now)),
    };
    print_result(&report, config.output_format)
}

fn relative_report<Tz>(
    formatter: &RelativeDateFormatter,
    timestamp: &DateTime<FixedOffset>,
    now: &DateTime<Tz>,
) -> RelativeDateReport
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    RelativeDateReport {
        timestamp: timestamp.to_rfc3339(),
        now: now.to_rfc3339(),
        relative_day: formatter.relative_day(timestamp, now).to_string(),
        text: formatter.format(timestamp, now),
    }
}

/// Group an integer's digits
pub fn thousands(value: i64, config: &DisplayConfig) -> Result<()> {
    let report = ThousandsReport {
        value,
        formatted: format_thousands(value),
    };
    print_result(&report, config.output_format)
}
