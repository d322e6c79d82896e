// ABOUTME: VO2 max classification against age-matched population reference values
// ABOUTME: Ordered decade table with a saturating fallback for ages past the last bracket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! VO2 max categories
//!
//! Reference values come from the American Council on Exercise guide to VO2
//! max. The table covers adults only; ages under 20 get a fixed
//! "not applicable" answer instead of a category.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use vitals_core::constants::vo2_max::{AGE_BRACKET_WIDTH, MIN_REFERENCE_AGE};

/// VO2 max thresholds (ml/kg/min) for one age decade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeReferenceRow {
    /// First age of the decade
    pub age_floor: u8,
    /// Values below this are "Low"
    pub low: f64,
    /// Values below this are "Below Average"
    pub below_average: f64,
    /// Values below this are "Above Average", anything else is "High"
    pub above_average: f64,
    /// Published "high" reference value (informational)
    pub high: f64,
}

/// Reference table, ascending by `age_floor`
#[rustfmt::skip]
pub static ACE_REFERENCE_TABLE: [AgeReferenceRow; 6] = [
    AgeReferenceRow { age_floor: 20, low: 31.0, below_average: 35.0, above_average: 41.0, high: 50.0 },
    AgeReferenceRow { age_floor: 30, low: 27.0, below_average: 31.0, above_average: 36.0, high: 45.0 },
    AgeReferenceRow { age_floor: 40, low: 23.0, below_average: 27.0, above_average: 32.0, high: 41.0 },
    AgeReferenceRow { age_floor: 50, low: 20.0, below_average: 24.0, above_average: 29.0, high: 37.0 },
    AgeReferenceRow { age_floor: 60, low: 17.0, below_average: 21.0, above_average: 26.0, high: 34.0 },
    AgeReferenceRow { age_floor: 70, low: 15.0, below_average: 18.0, above_average: 23.0, high: 31.0 },
];

impl AgeReferenceRow {
    /// Select the reference row for an age
    ///
    /// Returns `None` below the minimum reference age. Otherwise returns the
    /// first row whose decade contains `age`, scanning in ascending order.
    /// Ages past the last decade saturate to the last row.
    #[must_use]
    pub fn for_age(age: f64) -> Option<&'static Self> {
        if age < MIN_REFERENCE_AGE {
            return None;
        }

        let row = ACE_REFERENCE_TABLE
            .iter()
            .find(|row| age - f64::from(row.age_floor) < AGE_BRACKET_WIDTH);

        row.or_else(|| {
            debug!(age, "age past last reference bracket, using oldest row");
            ACE_REFERENCE_TABLE.last()
        })
    }

    /// Classify a VO2 max value against this row
    #[must_use]
    pub fn classify(&self, vo2_max: f64) -> Vo2MaxCategory {
        if vo2_max < self.low {
            Vo2MaxCategory::Low
        } else if vo2_max < self.below_average {
            Vo2MaxCategory::BelowAverage
        } else if vo2_max < self.above_average {
            Vo2MaxCategory::AboveAverage
        } else {
            Vo2MaxCategory::High
        }
    }
}

/// Cardio fitness category relative to age-matched norms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vo2MaxCategory {
    /// Age is below the reference table
    NotApplicable,
    /// Below the "low" threshold
    Low,
    /// Below the "below average" threshold
    BelowAverage,
    /// Below the "above average" threshold
    AboveAverage,
    /// At or above the "above average" threshold
    High,
}

impl Vo2MaxCategory {
    /// Classify a VO2 max value for a person of the given age
    #[must_use]
    pub fn classify(vo2_max: f64, age: f64) -> Self {
        AgeReferenceRow::for_age(age).map_or(Self::NotApplicable, |row| row.classify(vo2_max))
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotApplicable => "Not applicable for ages under 20",
            Self::Low => "Low",
            Self::BelowAverage => "Below Average",
            Self::AboveAverage => "Above Average",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Vo2MaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category label for a VO2 max value at a given age
#[must_use]
pub fn classify_vo2_max(vo2_max: f64, age: f64) -> &'static str {
    Vo2MaxCategory::classify(vo2_max, age).label()
}
