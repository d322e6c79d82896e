// ABOUTME: Integration tests for ingest payload validation and document loading
// ABOUTME: Strict shapes, date defaults, quantity checks, error codes, and file reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use std::io::Write;
use tempfile::NamedTempFile;
use vitals::core::models::MetricKind;
use vitals::errors::ErrorCode;
use vitals::ingest::{
    ingest, load_profile_snapshot, parse_profile_update, parse_running_session,
    parse_step_count, parse_workout_minutes, read_document, IngestKind, IngestRecord,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap()
}

#[test]
fn test_step_count_keeps_given_date() {
    let sample = parse_step_count(r#"{"steps": 13196, "date": "2024-03-02T09:05:00Z"}"#, now())
        .unwrap();
    assert!((sample.value - 13_196.0).abs() < f64::EPSILON);
    assert_eq!(
        sample.timestamp,
        Utc.with_ymd_and_hms(2024, 3, 2, 9, 5, 0).unwrap()
    );
}

#[test]
fn test_missing_date_defaults_to_now() {
    let sample = parse_workout_minutes(r#"{"minutes": 45}"#, now()).unwrap();
    assert_eq!(sample.timestamp, now());

    let run = parse_running_session(r#"{"distance": 3.1, "duration": 28}"#, now()).unwrap();
    assert_eq!(run.timestamp, now());
    assert!((run.distance - 3.1).abs() < f64::EPSILON);
}

#[test]
fn test_offset_dates_are_normalized_to_utc() {
    let sample = parse_step_count(r#"{"steps": 10, "date": "2024-03-02T09:05:00+02:00"}"#, now())
        .unwrap();
    assert_eq!(
        sample.timestamp,
        Utc.with_ymd_and_hms(2024, 3, 2, 7, 5, 0).unwrap()
    );
}

#[test]
fn test_unknown_keys_are_rejected() {
    let error = parse_step_count(r#"{"steps": 10, "source": "watch"}"#, now()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("source"));
    assert!(error.details.get("line").is_some());
}

#[test]
fn test_missing_fields_are_rejected() {
    let error = parse_running_session(r#"{"distance": 3.1}"#, now()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("duration"));
}

#[test]
fn test_negative_quantities_are_out_of_range() {
    let error = parse_step_count(r#"{"steps": -1}"#, now()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field.as_deref(), Some("steps"));

    let error = parse_running_session(r#"{"distance": 2, "duration": -5}"#, now()).unwrap_err();
    assert_eq!(error.field.as_deref(), Some("duration"));
}

#[test]
fn test_malformed_and_empty_bodies() {
    let error = parse_step_count(r#"{"steps": "#, now()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let error = parse_step_count("   ", now()).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_profile_update_stamps_activity_timestamps() {
    let update = parse_profile_update(
        r#"{"profile": {"steps": 8000, "runningDistance": 0, "bmi": 30.93}}"#,
        now(),
    )
    .unwrap();

    assert_eq!(update.steps_timestamp, Some(now()));
    assert_eq!(update.running_timestamp, None);
    assert_eq!(update.workout_timestamp, None);
    assert!((update.fields.bmi.unwrap() - 30.93).abs() < f64::EPSILON);

    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["stepsTimestamp"], "2024-03-02T12:00:00Z");
    assert!(json.get("runningTimestamp").is_none());
    assert!(json.get("description").is_none());
    assert_eq!(json["runningDistance"], 0.0);
}

#[test]
fn test_profile_update_is_strict_at_both_levels() {
    let inner = parse_profile_update(r#"{"profile": {"nickname": "Sam"}}"#, now()).unwrap_err();
    assert_eq!(inner.code, ErrorCode::InvalidInput);

    let outer = parse_profile_update(r#"{"profile": {}, "userId": 7}"#, now()).unwrap_err();
    assert_eq!(outer.code, ErrorCode::InvalidInput);

    let negative = parse_profile_update(r#"{"profile": {"weight": -180}}"#, now()).unwrap_err();
    assert_eq!(negative.field.as_deref(), Some("weight"));
}

#[test]
fn test_ingest_dispatches_by_kind() {
    assert_eq!("step-count".parse::<IngestKind>().unwrap(), IngestKind::Steps);
    assert_eq!("Workout".parse::<IngestKind>().unwrap(), IngestKind::Workout);
    assert!("sleep".parse::<IngestKind>().is_err());

    let record = ingest(IngestKind::Workout, r#"{"minutes": 45}"#, now()).unwrap();
    match &record {
        IngestRecord::Sample { metric, sample } => {
            assert_eq!(*metric, MetricKind::WorkoutMinutes);
            assert_eq!(sample.timestamp, now());
        }
        other => panic!("unexpected record {other:?}"),
    }
    assert_eq!(
        record.to_string(),
        "workout_minutes 45 at 2024-03-02T12:00:00+00:00"
    );

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["kind"], "sample");
    assert_eq!(json["metric"], "workout_minutes");
}

#[test]
fn test_ingest_profile_record_display() {
    let record = ingest(
        IngestKind::Profile,
        r#"{"profile": {"steps": 8000, "workoutMinutes": 30}}"#,
        now(),
    )
    .unwrap();
    assert_eq!(record.to_string(), "profile update (2 activity timestamps)");
}

#[test]
fn test_documents_load_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"description": "Evening walker", "stepCounts": [{{"steps": 9120, "date": "2024-03-01T20:00:00Z"}}]}}"#
    )
    .unwrap();

    let profile = load_profile_snapshot(file.path()).unwrap();
    assert_eq!(profile.description.as_deref(), Some("Evening walker"));
    assert_eq!(profile.step_counts.len(), 1);

    let body = read_document(file.path()).unwrap();
    assert!(body.contains("Evening walker"));
}

#[test]
fn test_missing_document_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_profile_snapshot(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.exit_code(), 66);
    assert!(error.details["path"].as_str().unwrap().ends_with("absent.json"));
}

#[test]
fn test_malformed_snapshot_on_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let error = load_profile_snapshot(file.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}
