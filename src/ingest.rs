// ABOUTME: Validation of incoming metric payloads before they reach the profile store
// ABOUTME: Strict JSON shapes for profile updates, step counts, runs, and workout minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingest payload validation
//!
//! Devices and scripts push readings as small JSON documents. This module
//! checks their shape and turns them into typed records; it does not store
//! anything or decide who may write. Unknown keys are rejected, a missing
//! `date` defaults to the injected `now`, and recorded quantities must be
//! finite and non-negative.

use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use serde_json::json;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use vitals_core::models::{MetricKind, MetricSample, ProfileSnapshot, RunningSession};

/// Which payload shape a document uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestKind {
    /// `{ "profile": { ... } }`
    Profile,
    /// `{ "steps": n, "date"?: t }`
    Steps,
    /// `{ "distance": n, "duration": n, "date"?: t }`
    Running,
    /// `{ "minutes": n, "date"?: t }`
    Workout,
}

impl FromStr for IngestKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profile" => Ok(Self::Profile),
            "steps" | "step-count" | "stepcount" => Ok(Self::Steps),
            "running" | "running-session" | "runningsession" => Ok(Self::Running),
            "workout" | "workout-minutes" | "workoutminutes" => Ok(Self::Workout),
            other => Err(AppError::invalid_input(format!(
                "unknown payload kind '{other}', expected profile, steps, running or workout"
            ))),
        }
    }
}

/// Profile fields a client may set; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileFields {
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Weight when tracking started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_weight: Option<f64>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Body mass index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// VO2 max
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardio_fitness: Option<f64>,
    /// Latest running distance in miles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_distance: Option<f64>,
    /// Latest daily steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    /// Latest workout minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_minutes: Option<f64>,
}

impl ProfileFields {
    fn numeric_fields(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("weight", self.weight),
            ("startWeight", self.start_weight),
            ("age", self.age),
            ("bmi", self.bmi),
            ("cardioFitness", self.cardio_fitness),
            ("runningDistance", self.running_distance),
            ("steps", self.steps),
            ("workoutMinutes", self.workout_minutes),
        ]
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileEnvelope {
    profile: ProfileFields,
}

/// Validated profile update with activity timestamps stamped in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Fields as sent by the client
    #[serde(flatten)]
    pub fields: ProfileFields,
    /// Set when a non-zero step count was sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_timestamp: Option<DateTime<Utc>>,
    /// Set when a non-zero running distance was sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_timestamp: Option<DateTime<Utc>>,
    /// Set when non-zero workout minutes were sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_timestamp: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StepCountInput {
    steps: f64,
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RunningSessionInput {
    distance: f64,
    duration: f64,
    date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkoutMinutesInput {
    minutes: f64,
    date: Option<DateTime<Utc>>,
}

/// A validated record of any kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestRecord {
    /// Profile field update
    Profile(ProfileUpdate),
    /// Single metric sample
    Sample {
        /// Metric recorded
        metric: MetricKind,
        /// The reading
        sample: MetricSample,
    },
    /// Running session
    Run(RunningSession),
}

impl fmt::Display for IngestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(update) => {
                let stamped = [
                    update.steps_timestamp,
                    update.running_timestamp,
                    update.workout_timestamp,
                ]
                .iter()
                .flatten()
                .count();
                write!(f, "profile update ({stamped} activity timestamps)")
            }
            Self::Sample { metric, sample } => write!(
                f,
                "{metric} {} at {}",
                sample.value,
                sample.timestamp.to_rfc3339()
            ),
            Self::Run(run) => write!(
                f,
                "running {} mi in {} min at {}",
                run.distance,
                run.duration,
                run.timestamp.to_rfc3339()
            ),
        }
    }
}

/// Validate a payload of the given kind
///
/// # Errors
///
/// Returns `MissingRequiredField` for an empty body, `InvalidFormat` for
/// malformed JSON, `InvalidInput` for shape mismatches, and
/// `ValueOutOfRange` for negative or non-finite quantities
pub fn ingest(kind: IngestKind, body: &str, now: DateTime<Utc>) -> AppResult<IngestRecord> {
    let record = match kind {
        IngestKind::Profile => IngestRecord::Profile(parse_profile_update(body, now)?),
        IngestKind::Steps => IngestRecord::Sample {
            metric: MetricKind::Steps,
            sample: parse_step_count(body, now)?,
        },
        IngestKind::Running => IngestRecord::Run(parse_running_session(body, now)?),
        IngestKind::Workout => IngestRecord::Sample {
            metric: MetricKind::WorkoutMinutes,
            sample: parse_workout_minutes(body, now)?,
        },
    };

    debug!(?kind, "validated ingest payload");
    Ok(record)
}

/// Validate a `{ "profile": { ... } }` update
///
/// # Errors
///
/// See [`ingest`]
pub fn parse_profile_update(body: &str, now: DateTime<Utc>) -> AppResult<ProfileUpdate> {
    let ProfileEnvelope { profile } = decode(body)?;
    for (field, value) in profile.numeric_fields() {
        if let Some(value) = value {
            ensure_quantity(field, value)?;
        }
    }

    let stamp = |value: Option<f64>| value.filter(|v| *v != 0.0).map(|_| now);

    Ok(ProfileUpdate {
        steps_timestamp: stamp(profile.steps),
        running_timestamp: stamp(profile.running_distance),
        workout_timestamp: stamp(profile.workout_minutes),
        fields: profile,
    })
}

/// Validate a step count payload
///
/// # Errors
///
/// See [`ingest`]
pub fn parse_step_count(body: &str, now: DateTime<Utc>) -> AppResult<MetricSample> {
    let input: StepCountInput = decode(body)?;
    ensure_quantity("steps", input.steps)?;
    Ok(MetricSample::new(input.steps, input.date.unwrap_or(now)))
}

/// Validate a running session payload
///
/// # Errors
///
/// See [`ingest`]
pub fn parse_running_session(body: &str, now: DateTime<Utc>) -> AppResult<RunningSession> {
    let input: RunningSessionInput = decode(body)?;
    ensure_quantity("distance", input.distance)?;
    ensure_quantity("duration", input.duration)?;
    Ok(RunningSession {
        distance: input.distance,
        duration: input.duration,
        timestamp: input.date.unwrap_or(now),
    })
}

/// Validate a workout minutes payload
///
/// # Errors
///
/// See [`ingest`]
pub fn parse_workout_minutes(body: &str, now: DateTime<Utc>) -> AppResult<MetricSample> {
    let input: WorkoutMinutesInput = decode(body)?;
    ensure_quantity("minutes", input.minutes)?;
    Ok(MetricSample::new(input.minutes, input.date.unwrap_or(now)))
}

/// Read a JSON document from disk
///
/// # Errors
///
/// Returns `ResourceNotFound` when the file does not exist and
/// `StorageError` for other read failures
pub fn read_document(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(json!({ "path": path.display().to_string() }))
    })
}

/// Load a stored profile snapshot for summary rendering
///
/// # Errors
///
/// See [`read_document`]; malformed snapshots fail like ingest payloads
pub fn load_profile_snapshot(path: &Path) -> AppResult<ProfileSnapshot> {
    let body = read_document(path)?;
    let snapshot: ProfileSnapshot = decode(&body)?;
    debug!(path = %path.display(), "loaded profile snapshot");
    Ok(snapshot)
}

fn decode<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    if body.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Missing request body",
        ));
    }

    serde_json::from_str(body).map_err(|e| {
        let code = match e.classify() {
            Category::Syntax | Category::Eof => ErrorCode::InvalidFormat,
            Category::Data | Category::Io => ErrorCode::InvalidInput,
        };
        AppError::new(code, e.to_string()).with_details(json!({
            "line": e.line(),
            "column": e.column(),
        }))
    })
}

fn ensure_quantity(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(
            field,
            format!("{field} must be a finite, non-negative number"),
        ))
    }
}
