// ABOUTME: Health metric derivation engine for the Vitals workspace
// ABOUTME: Turns raw recorded samples into categorized, human-readable statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Intelligence
//!
//! Pure derivation functions. Nothing in this crate performs I/O, holds
//! mutable state, or reads the clock: "now" is always a parameter.
//!
//! - [`bmi`]: five-category Body Mass Index classification
//! - [`vo2max`]: age-matched cardio fitness classification
//! - [`relative_date`]: "Today at 09:05 AM" style timestamps
//! - [`formatting`]: thousands grouping and decimal display helpers
//! - [`summary`]: statistic cards for a public profile

/// Body Mass Index classification
pub mod bmi;

/// Numeric display helpers
pub mod formatting;

/// Relative, human-readable timestamps
pub mod relative_date;

/// Profile summary assembly
pub mod summary;

/// VO2 max classification against age-matched reference values
pub mod vo2max;

pub use bmi::{classify_bmi, BmiCategory};
pub use formatting::{format_decimal, format_thousands, format_weight_change};
pub use relative_date::{format_relative_date, DayMatching, RelativeDateFormatter, TimeFormat};
pub use summary::{ProfileSummary, StatisticCard, StatisticKind, SummaryBuilder};
pub use vo2max::{classify_vo2_max, AgeReferenceRow, Vo2MaxCategory, ACE_REFERENCE_TABLE};
