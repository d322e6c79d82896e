// ABOUTME: Transient value records exchanged with the external profile store
// ABOUTME: MetricSample, RunningSession, MetricKind, and the ProfileSnapshot aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! None of these types are persisted here. The profile store owns storage and
//! hands snapshots to the derivation layer, which only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of metric a sample records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Body weight in pounds
    Weight,
    /// Daily step count
    Steps,
    /// Running distance in miles
    RunningDistance,
    /// Workout duration in minutes
    WorkoutMinutes,
}

impl MetricKind {
    /// Stable identifier used in logs and CLI output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Steps => "steps",
            Self::RunningDistance => "running_distance",
            Self::WorkoutMinutes => "workout_minutes",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded observation
///
/// Accepts the profile store's field names on input (`weight`, `steps`,
/// `minutes` for the value and `date` for the timestamp).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Recorded value
    #[serde(alias = "weight", alias = "steps", alias = "minutes", alias = "distance")]
    pub value: f64,
    /// When the value was recorded
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
}

impl MetricSample {
    /// Create a sample
    #[must_use]
    pub const fn new(value: f64, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }

    /// Most recent sample of a series, if any
    #[must_use]
    pub fn latest(samples: &[Self]) -> Option<&Self> {
        samples.iter().max_by_key(|sample| sample.timestamp)
    }
}

/// A recorded run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningSession {
    /// Distance in miles
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    /// When the run was recorded
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
}

impl RunningSession {
    /// Distance of this run as a generic sample
    #[must_use]
    pub const fn distance_sample(&self) -> MetricSample {
        MetricSample::new(self.distance, self.timestamp)
    }

    /// Most recent run of a series, if any
    #[must_use]
    pub fn latest(sessions: &[Self]) -> Option<&Self> {
        sessions.iter().max_by_key(|session| session.timestamp)
    }
}

/// Everything the summary layer needs to know about one profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSnapshot {
    /// Free-form text the user wrote about themselves
    pub description: Option<String>,
    /// Age in years
    pub age: Option<f64>,
    /// Body mass index
    pub bmi: Option<f64>,
    /// VO2 max in ml/kg/min
    pub cardio_fitness: Option<f64>,
    /// Weight when tracking started, in pounds
    pub start_weight: Option<f64>,
    /// Weigh-ins
    pub weights: Vec<MetricSample>,
    /// Runs
    pub running_sessions: Vec<RunningSession>,
    /// Daily step counts
    pub step_counts: Vec<MetricSample>,
    /// Workout durations
    pub workout_minutes: Vec<MetricSample>,
}

impl ProfileSnapshot {
    /// Whether any statistic has been recorded
    ///
    /// Workout minutes, BMI and age alone do not count, matching the profile
    /// page's "No Available Statistics" rule.
    #[must_use]
    pub fn has_statistics(&self) -> bool {
        !(self.weights.is_empty()
            && self.running_sessions.is_empty()
            && self.step_counts.is_empty()
            && self.cardio_fitness.is_none())
    }
}
