// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Reference thresholds, display units, card titles, and time constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in one flat list.

/// Body Mass Index category boundaries (kg/m²), ascending
pub mod bmi {
    /// Upper bound (exclusive) of "Underweight"
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Upper bound (exclusive) of "Normal"
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Upper bound (exclusive) of "Overweight"
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Upper bound (exclusive) of "Obese"; anything above is "Extremely Obese"
    pub const OBESE_BELOW: f64 = 35.0;
}

/// VO2 max reference table parameters
pub mod vo2_max {
    /// Youngest age covered by the adult reference table
    pub const MIN_REFERENCE_AGE: f64 = 20.0;
    /// Width of each age bracket in years
    pub const AGE_BRACKET_WIDTH: f64 = 10.0;
}

/// Time arithmetic
pub mod time {
    /// Milliseconds in a 24-hour day
    pub const MILLIS_PER_DAY: i64 = 86_400_000;
    /// Hours in a day
    pub const HOURS_PER_DAY: i64 = 24;
}

/// Display units used on statistic cards
pub mod units {
    /// Body weight
    pub const POUNDS: &str = "lbs";
    /// Running distance
    pub const MILES: &str = "MI";
    /// Body mass index
    pub const BMI: &str = "BMI";
    /// Cardio fitness
    pub const VO2_MAX: &str = "VO2 max";
    /// Step count
    pub const STEPS: &str = "Steps";
    /// Workout duration
    pub const MINUTES: &str = "Min";
}

/// Statistic card titles
pub mod titles {
    /// Weight card
    pub const WEIGHT: &str = "Weight";
    /// Running card
    pub const RUNNING: &str = "Running";
    /// BMI card
    pub const BMI: &str = "Body Mass Index";
    /// Cardio fitness card
    pub const CARDIO_FITNESS: &str = "Cardio Fitness";
    /// Daily steps card
    pub const STEPS: &str = "Daily Steps";
    /// Workout minutes card
    pub const WORKOUTS: &str = "Workouts";
}

/// Fallback texts for missing profile data
pub mod messages {
    /// Shown when the profile has no description
    pub const NO_DESCRIPTION: &str = "This user has not provided a description.";
    /// Shown when the profile has no statistics at all
    pub const NO_STATISTICS: &str = "This user has not provided any statistics.";
}

/// Service identity used in structured logs
pub mod service_names {
    /// CLI binary name
    pub const VITALS_CLI: &str = "vitals-cli";
}
