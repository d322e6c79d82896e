// ABOUTME: Unit tests for display configuration loaded from the environment
// ABOUTME: Validates defaults, parsing, overrides, and ConfigInvalid error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::collections::HashMap;
use std::env;
use vitals::config::environment::env_keys;
use vitals::config::{parse_utc_offset, DisplayConfig};
use vitals::errors::ErrorCode;
use vitals::formatters::OutputFormat;
use vitals::intelligence::{DayMatching, TimeFormat};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |key| values.get(key).cloned()
}

const ALL_KEYS: [&str; 4] = [
    env_keys::TIME_FORMAT,
    env_keys::DAY_MATCHING,
    env_keys::UTC_OFFSET,
    env_keys::OUTPUT_FORMAT,
];

#[test]
fn test_defaults_when_unset() {
    let config = DisplayConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config, DisplayConfig::default());
    assert_eq!(config.time_format, TimeFormat::Hour12);
    assert_eq!(config.day_matching, DayMatching::DayOfMonth);
    assert_eq!(config.utc_offset, None);
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
fn test_all_settings_parse() {
    let config = DisplayConfig::from_lookup(lookup(&[
        (env_keys::TIME_FORMAT, "24h"),
        (env_keys::DAY_MATCHING, "calendar-date"),
        (env_keys::UTC_OFFSET, "-05:00"),
        (env_keys::OUTPUT_FORMAT, "text"),
    ]))
    .unwrap();

    assert_eq!(config.time_format, TimeFormat::Hour24);
    assert_eq!(config.day_matching, DayMatching::CalendarDate);
    assert_eq!(config.utc_offset.unwrap().local_minus_utc(), -5 * 3600);
    assert_eq!(config.output_format, OutputFormat::Text);

    let formatter = config.relative_dates();
    assert_eq!(formatter.time_format(), TimeFormat::Hour24);
    assert_eq!(formatter.day_matching(), DayMatching::CalendarDate);
}

#[test]
fn test_empty_values_fall_back_to_defaults() {
    let config = DisplayConfig::from_lookup(lookup(&[
        (env_keys::TIME_FORMAT, ""),
        (env_keys::UTC_OFFSET, "  "),
    ]))
    .unwrap();
    assert_eq!(config, DisplayConfig::default());
}

#[test]
fn test_invalid_values_are_config_errors() {
    let error =
        DisplayConfig::from_lookup(lookup(&[(env_keys::TIME_FORMAT, "13h")])).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.field.as_deref(), Some(env_keys::TIME_FORMAT));
    assert_eq!(error.details["value"], "13h");
    assert_eq!(error.exit_code(), 78);

    let error =
        DisplayConfig::from_lookup(lookup(&[(env_keys::UTC_OFFSET, "+25:00")])).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.field.as_deref(), Some(env_keys::UTC_OFFSET));

    let error =
        DisplayConfig::from_lookup(lookup(&[(env_keys::OUTPUT_FORMAT, "yaml")])).unwrap_err();
    assert_eq!(error.field.as_deref(), Some(env_keys::OUTPUT_FORMAT));
}

#[test]
fn test_utc_offset_forms() {
    assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
    assert_eq!(parse_utc_offset("+05:30").unwrap().local_minus_utc(), 19_800);
    assert_eq!(parse_utc_offset("-0800").unwrap().local_minus_utc(), -28_800);

    assert_eq!(
        parse_utc_offset("+12:60").unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        parse_utc_offset("0530").unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
    env::set_var(env_keys::TIME_FORMAT, "24h");
    env::set_var(env_keys::UTC_OFFSET, "+01:00");

    let config = DisplayConfig::from_env().unwrap();
    assert_eq!(config.time_format, TimeFormat::Hour24);
    assert_eq!(config.utc_offset.unwrap().local_minus_utc(), 3600);
    assert_eq!(config.day_matching, DayMatching::DayOfMonth);

    // Clean up
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_rejects_bad_values() {
    env::set_var(env_keys::DAY_MATCHING, "weekly");

    let result = DisplayConfig::from_env();

    env::remove_var(env_keys::DAY_MATCHING);
    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.field.as_deref(), Some(env_keys::DAY_MATCHING));
}
