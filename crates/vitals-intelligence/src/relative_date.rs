// ABOUTME: Relative timestamp formatting anchored to an injected "now"
// ABOUTME: Produces "Today at", "Yesterday at", and "N days ago at" strings in local time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Relative dates
//!
//! Day boundaries are local midnights in the time zone of `now`. The sample
//! timestamp is converted into that zone before any comparison, so callers
//! pick the zone simply by choosing which `DateTime<Tz>` they pass as `now`.
//!
//! # Day-of-month matching
//!
//! The profile page this formatter serves has always compared only the
//! day-of-month when deciding "today" and "yesterday". A sample taken on
//! March 2nd therefore reads "Today" on April 2nd. That behavior is kept as
//! the default ([`DayMatching::DayOfMonth`]) so existing pages render the
//! same text. [`DayMatching::CalendarDate`] is the corrected comparison and
//! must be opted into explicitly.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vitals_core::constants::time::{HOURS_PER_DAY, MILLIS_PER_DAY};
use vitals_core::errors::AppError;

/// Clock style for the time-of-day suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// Two-digit 12-hour clock with meridiem, e.g. "09:05 AM"
    #[default]
    Hour12,
    /// Two-digit 24-hour clock, e.g. "21:05"
    Hour24,
}

impl TimeFormat {
    /// `strftime` pattern for this clock style
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Hour12 => "%I:%M %p",
            Self::Hour24 => "%H:%M",
        }
    }
}

impl FromStr for TimeFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" | "hour12" => Ok(Self::Hour12),
            "24h" | "24" | "hour24" => Ok(Self::Hour24),
            other => Err(AppError::invalid_input(format!(
                "unknown time format '{other}', expected 12h or 24h"
            ))),
        }
    }
}

/// How a sample is matched against "today" and "yesterday"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayMatching {
    /// Compare day-of-month only (historical behavior, see module docs)
    #[default]
    DayOfMonth,
    /// Compare the full calendar date
    CalendarDate,
}

impl FromStr for DayMatching {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day-of-month" | "day_of_month" => Ok(Self::DayOfMonth),
            "calendar-date" | "calendar_date" => Ok(Self::CalendarDate),
            other => Err(AppError::invalid_input(format!(
                "unknown day matching '{other}', expected day-of-month or calendar-date"
            ))),
        }
    }
}

/// Where a timestamp falls relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    /// Same day as now
    Today,
    /// The day before now
    Yesterday,
    /// Whole days between local midnight today and the timestamp, rounded.
    /// Negative for timestamps after today's midnight that did not match.
    DaysAgo(i64),
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Yesterday => f.write_str("Yesterday"),
            Self::DaysAgo(days) => write!(f, "{days} days ago"),
        }
    }
}

/// Relative date formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelativeDateFormatter {
    time_format: TimeFormat,
    day_matching: DayMatching,
}

impl RelativeDateFormatter {
    /// Create a formatter with explicit options
    #[must_use]
    pub const fn new(time_format: TimeFormat, day_matching: DayMatching) -> Self {
        Self {
            time_format,
            day_matching,
        }
    }

    /// Clock style in use
    #[must_use]
    pub const fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    /// Day matching policy in use
    #[must_use]
    pub const fn day_matching(&self) -> DayMatching {
        self.day_matching
    }

    /// Place `timestamp` relative to `now`
    #[must_use]
    pub fn relative_day<Tz, Tz2>(&self, timestamp: &DateTime<Tz2>, now: &DateTime<Tz>) -> RelativeDay
    where
        Tz: TimeZone,
        Tz2: TimeZone,
    {
        let local = timestamp.with_timezone(&now.timezone());
        let today = local_midnight(now);
        let yesterday = today.clone() - Duration::milliseconds(MILLIS_PER_DAY);

        let (is_today, is_yesterday) = match self.day_matching {
            DayMatching::DayOfMonth => (local.day() == today.day(), local.day() == yesterday.day()),
            DayMatching::CalendarDate => (
                local.date_naive() == today.date_naive(),
                local.date_naive() == yesterday.date_naive(),
            ),
        };

        if is_today {
            RelativeDay::Today
        } else if is_yesterday {
            RelativeDay::Yesterday
        } else {
            let elapsed = today.signed_duration_since(local).num_milliseconds();
            // Safe: millisecond spans of real timestamps fit an f64 mantissa
            #[allow(clippy::cast_precision_loss)]
            let days = elapsed as f64 / MILLIS_PER_DAY as f64;
            RelativeDay::DaysAgo(round_half_up(days))
        }
    }

    /// Format `timestamp` relative to `now`, e.g. "Yesterday at 07:45 PM"
    #[must_use]
    pub fn format<Tz, Tz2>(&self, timestamp: &DateTime<Tz2>, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
        Tz2: TimeZone,
    {
        let day = self.relative_day(timestamp, now);
        let time = timestamp
            .with_timezone(&now.timezone())
            .format(self.time_format.pattern());
        format!("{day} at {time}")
    }
}

/// Format `timestamp` relative to `now` with the default options
#[must_use]
pub fn format_relative_date<Tz, Tz2>(timestamp: &DateTime<Tz2>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    Tz2: TimeZone,
{
    RelativeDateFormatter::default().format(timestamp, now)
}

/// Local midnight at the start of `now`'s day
///
/// When midnight does not exist locally (a DST gap), the first valid hour
/// after it is used.
fn local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let zone = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);

    (0..HOURS_PER_DAY)
        .find_map(|hour| {
            zone.from_local_datetime(&(midnight + Duration::hours(hour)))
                .earliest()
        })
        .unwrap_or_else(|| now.clone())
}

/// Round half toward positive infinity
#[allow(clippy::cast_possible_truncation)] // Safe: day counts are far below i64::MAX
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
