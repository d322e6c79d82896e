// ABOUTME: Environment-based display configuration for relative dates and output
// ABOUTME: Parses VITALS_* variables into typed settings with ConfigInvalid errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;
use chrono::FixedOffset;
use serde_json::json;
use std::env;
use std::str::FromStr;
use tracing::debug;
use vitals_intelligence::relative_date::{DayMatching, RelativeDateFormatter, TimeFormat};

/// Environment variable names
pub mod env_keys {
    /// Clock style: `12h` or `24h`
    pub const TIME_FORMAT: &str = "VITALS_TIME_FORMAT";
    /// Day matching policy: `day-of-month` or `calendar-date`
    pub const DAY_MATCHING: &str = "VITALS_DAY_MATCHING";
    /// Fixed UTC offset such as `+02:00`; unset means the system zone
    pub const UTC_OFFSET: &str = "VITALS_UTC_OFFSET";
    /// Output format: `json` or `text`
    pub const OUTPUT_FORMAT: &str = "VITALS_OUTPUT_FORMAT";
}

/// Settings that shape derived output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    /// Clock style for relative dates
    pub time_format: TimeFormat,
    /// How "today" and "yesterday" are matched
    pub day_matching: DayMatching,
    /// Fixed zone for day boundaries; `None` uses the system local zone
    pub utc_offset: Option<FixedOffset>,
    /// CLI output format
    pub output_format: OutputFormat,
}

impl DisplayConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to an unrecognized value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unset and empty values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a value is set but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        let config = Self {
            time_format: parse_setting(env_keys::TIME_FORMAT, value(env_keys::TIME_FORMAT))?
                .unwrap_or_default(),
            day_matching: parse_setting(env_keys::DAY_MATCHING, value(env_keys::DAY_MATCHING))?
                .unwrap_or_default(),
            utc_offset: value(env_keys::UTC_OFFSET)
                .map(|raw| {
                    parse_utc_offset(&raw).map_err(|e| {
                        AppError::config(env_keys::UTC_OFFSET, e.message)
                            .with_details(json!({ "value": raw }))
                    })
                })
                .transpose()?,
            output_format: parse_setting(env_keys::OUTPUT_FORMAT, value(env_keys::OUTPUT_FORMAT))?
                .unwrap_or_default(),
        };

        debug!(?config, "loaded display configuration");
        Ok(config)
    }

    /// Relative date formatter for these settings
    #[must_use]
    pub const fn relative_dates(&self) -> RelativeDateFormatter {
        RelativeDateFormatter::new(self.time_format, self.day_matching)
    }
}

fn parse_setting<T>(key: &str, raw: Option<String>) -> AppResult<Option<T>>
where
    T: FromStr<Err = AppError>,
{
    raw.map(|raw| {
        raw.parse::<T>().map_err(|e| {
            AppError::config(key, e.message).with_details(json!({ "value": raw }))
        })
    })
    .transpose()
}

/// Parse a UTC offset such as `+02:00`, `-0530`, `+9`, `Z` or `UTC`
///
/// # Errors
///
/// Returns `InvalidInput` for malformed offsets and `ValueOutOfRange` for
/// offsets beyond ±23:59
pub fn parse_utc_offset(raw: &str) -> AppResult<FixedOffset> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::internal("zero offset"));
    }

    let malformed = || AppError::invalid_input(format!("malformed UTC offset '{trimmed}'"));

    let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(malformed());
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if rest.len() == 4 && rest.bytes().all(|b| b.is_ascii_digit()) => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours: i32 = hours.parse().map_err(|_| malformed())?;
    let minutes: i32 = minutes.parse().map_err(|_| malformed())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(AppError::out_of_range(
            "utc_offset",
            format!("UTC offset '{trimmed}' is out of range"),
        ));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(malformed)
}
