// ABOUTME: Integration tests for profile summary assembly
// ABOUTME: Verifies card order, values, descriptions, and the empty-profile notice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use vitals::core::constants::messages::{NO_DESCRIPTION, NO_STATISTICS};
use vitals::core::models::{MetricSample, ProfileSnapshot, RunningSession};
use vitals::intelligence::{
    DayMatching, RelativeDateFormatter, StatisticKind, SummaryBuilder, TimeFormat,
};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn noon() -> DateTime<Utc> {
    utc(2024, 3, 2, 12, 0)
}

fn demo_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        description: Some("Training for a spring half marathon".into()),
        age: Some(35.0),
        bmi: Some(30.93),
        cardio_fitness: Some(33.6),
        start_weight: Some(299.13),
        weights: vec![
            MetricSample::new(221.0, utc(2024, 3, 1, 8, 0)),
            MetricSample::new(220.9, utc(2024, 3, 2, 7, 30)),
        ],
        running_sessions: vec![RunningSession {
            distance: 3.1,
            duration: 28.0,
            timestamp: utc(2024, 3, 1, 18, 0),
        }],
        step_counts: vec![MetricSample::new(13_196.0, utc(2024, 3, 2, 9, 5))],
        workout_minutes: vec![MetricSample::new(45.0, utc(2024, 2, 28, 12, 0))],
    }
}

#[test]
fn test_full_profile_cards() {
    let summary = SummaryBuilder::default().build(&demo_profile(), &noon());

    assert!(summary.has_statistics);
    assert_eq!(summary.description, "Training for a spring half marathon");

    let kinds: Vec<StatisticKind> = summary.cards.iter().map(|card| card.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StatisticKind::Weight,
            StatisticKind::Running,
            StatisticKind::Bmi,
            StatisticKind::CardioFitness,
            StatisticKind::Steps,
            StatisticKind::Workouts,
        ]
    );

    let weight = summary.card(StatisticKind::Weight).unwrap();
    assert_eq!(weight.title, "Weight");
    assert_eq!(weight.value, "220.9");
    assert_eq!(weight.unit, "lbs");
    assert_eq!(weight.description, "(-78.23 lbs)");

    let running = summary.card(StatisticKind::Running).unwrap();
    assert_eq!(running.value, "3.1");
    assert_eq!(running.unit, "MI");
    assert_eq!(running.description, "Yesterday at 06:00 PM");

    let bmi = summary.card(StatisticKind::Bmi).unwrap();
    assert_eq!(bmi.title, "Body Mass Index");
    assert_eq!(bmi.value, "30.93");
    assert_eq!(bmi.description, "Obese");

    let cardio = summary.card(StatisticKind::CardioFitness).unwrap();
    assert_eq!(cardio.title, "Cardio Fitness");
    assert_eq!(cardio.unit, "VO2 max");
    assert_eq!(cardio.description, "Above Average");

    let steps = summary.card(StatisticKind::Steps).unwrap();
    assert_eq!(steps.title, "Daily Steps");
    assert_eq!(steps.value, "13,196");
    assert_eq!(steps.description, "Today at 09:05 AM");

    let workouts = summary.card(StatisticKind::Workouts).unwrap();
    assert_eq!(workouts.value, "45");
    assert_eq!(workouts.unit, "Min");
    assert_eq!(workouts.description, "3 days ago at 12:00 PM");
}

#[test]
fn test_weight_without_start_shows_relative_date() {
    let profile = ProfileSnapshot {
        start_weight: None,
        ..demo_profile()
    };
    let summary = SummaryBuilder::default().build(&profile, &noon());

    assert_eq!(
        summary.card(StatisticKind::Weight).unwrap().description,
        "Today at 07:30 AM"
    );
}

#[test]
fn test_cardio_without_age_has_no_category() {
    for age in [None, Some(0.0)] {
        let profile = ProfileSnapshot {
            age,
            ..demo_profile()
        };
        let summary = SummaryBuilder::default().build(&profile, &noon());
        assert_eq!(summary.card(StatisticKind::CardioFitness).unwrap().description, "");
    }
}

#[test]
fn test_young_user_cardio_is_not_applicable() {
    let profile = ProfileSnapshot {
        age: Some(17.0),
        ..demo_profile()
    };
    let summary = SummaryBuilder::default().build(&profile, &noon());
    assert_eq!(
        summary.card(StatisticKind::CardioFitness).unwrap().description,
        "Not applicable for ages under 20"
    );
}

#[test]
fn test_zero_scalars_are_not_recorded() {
    let profile = ProfileSnapshot {
        bmi: Some(0.0),
        cardio_fitness: Some(0.0),
        ..demo_profile()
    };
    let summary = SummaryBuilder::default().build(&profile, &noon());

    assert!(summary.card(StatisticKind::Bmi).is_none());
    assert!(summary.card(StatisticKind::CardioFitness).is_none());
    assert_eq!(summary.cards.len(), 4);
}

#[test]
fn test_empty_profile() {
    let summary = SummaryBuilder::default().build(&ProfileSnapshot::default(), &noon());

    assert!(!summary.has_statistics);
    assert!(summary.cards.is_empty());
    assert_eq!(summary.description, NO_DESCRIPTION);

    let text = summary.to_string();
    assert!(text.starts_with(NO_DESCRIPTION));
    assert!(text.ends_with(NO_STATISTICS));
}

#[test]
fn test_notice_keeps_uncounted_cards() {
    let profile = ProfileSnapshot {
        bmi: Some(30.93),
        workout_minutes: vec![MetricSample::new(45.0, utc(2024, 3, 2, 7, 0))],
        ..ProfileSnapshot::default()
    };
    let summary = SummaryBuilder::default().build(&profile, &noon());

    assert!(!summary.has_statistics);
    assert_eq!(summary.cards.len(), 2);

    let text = summary.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], NO_DESCRIPTION);
    assert_eq!(lines[1], NO_STATISTICS);
    assert_eq!(lines[2], "Body Mass Index: 30.93 BMI (Obese)");
    assert_eq!(lines[3], "Workouts: 45 Min (Today at 07:00 AM)");
}

#[test]
fn test_blank_description_uses_placeholder() {
    let profile = ProfileSnapshot {
        description: Some(String::new()),
        ..demo_profile()
    };
    let summary = SummaryBuilder::default().build(&profile, &noon());
    assert_eq!(summary.description, NO_DESCRIPTION);
}

#[test]
fn test_builder_options_reach_relative_dates() {
    let builder = SummaryBuilder::new(RelativeDateFormatter::new(
        TimeFormat::Hour24,
        DayMatching::CalendarDate,
    ));
    let summary = builder.build(&demo_profile(), &noon());

    assert_eq!(
        summary.card(StatisticKind::Running).unwrap().description,
        "Yesterday at 18:00"
    );
}

#[test]
fn test_text_rendering_lists_cards() {
    let summary = SummaryBuilder::default().build(&demo_profile(), &noon());
    let text = summary.to_string();

    assert!(text.contains("Daily Steps: 13,196 Steps (Today at 09:05 AM)"));
    assert!(text.contains("Body Mass Index: 30.93 BMI (Obese)"));
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn test_snapshot_accepts_store_field_names() {
    let json = r#"{
        "description": "Morning runner",
        "age": 42,
        "cardioFitness": 38.5,
        "weights": [{ "weight": 181.4, "date": "2024-03-02T06:15:00Z" }],
        "runningSessions": [{ "distance": 5.2, "duration": 47, "date": "2024-02-29T06:00:00Z" }],
        "stepCounts": [{ "steps": 8042, "date": "2024-03-01T21:00:00Z" }]
    }"#;
    let profile: ProfileSnapshot = serde_json::from_str(json).unwrap();
    let summary = SummaryBuilder::default().build(&profile, &noon());

    assert_eq!(summary.card(StatisticKind::Weight).unwrap().value, "181.4");
    assert_eq!(summary.card(StatisticKind::Steps).unwrap().value, "8,042");
    assert_eq!(
        summary.card(StatisticKind::CardioFitness).unwrap().description,
        "High"
    );
    assert!(summary.card(StatisticKind::Workouts).is_none());
}
