// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Reference instant handling for vitals-cli
// ABOUTME: Parses --now overrides and reads the wall clock once per command

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use vitals::errors::{AppError, AppResult, ErrorCode};

/// Parse an RFC 3339 timestamp argument
pub fn parse_instant(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("invalid RFC 3339 timestamp '{raw}': {e}"),
        )
    })
}

/// The reference instant in `zone`: the override if given, else the wall clock
pub fn now_in<Tz: TimeZone>(zone: &Tz, fixed: Option<DateTime<FixedOffset>>) -> DateTime<Tz> {
    fixed.map_or_else(
        || Utc::now().with_timezone(zone),
        |instant| instant.with_timezone(zone),
    )
}
