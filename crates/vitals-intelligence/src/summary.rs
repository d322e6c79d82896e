// ABOUTME: Assembles the statistic cards shown on a public health summary profile
// ABOUTME: Picks the latest sample per series and applies the derivation functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile summary
//!
//! The output is plain data: a title, a value string, a unit and a
//! description per card. Layout and styling belong to whoever renders it.

use crate::bmi::BmiCategory;
use crate::formatting::{format_decimal, format_thousands, format_weight_change};
use crate::relative_date::RelativeDateFormatter;
use crate::vo2max::Vo2MaxCategory;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use vitals_core::constants::messages::{NO_DESCRIPTION, NO_STATISTICS};
use vitals_core::constants::{titles, units};
use vitals_core::models::{MetricSample, ProfileSnapshot, RunningSession};

/// Which statistic a card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    /// Latest weigh-in
    Weight,
    /// Latest run distance
    Running,
    /// Body mass index
    Bmi,
    /// VO2 max
    CardioFitness,
    /// Latest daily step count
    Steps,
    /// Latest workout duration
    Workouts,
}

impl StatisticKind {
    /// Card title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Weight => titles::WEIGHT,
            Self::Running => titles::RUNNING,
            Self::Bmi => titles::BMI,
            Self::CardioFitness => titles::CARDIO_FITNESS,
            Self::Steps => titles::STEPS,
            Self::Workouts => titles::WORKOUTS,
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Weight => units::POUNDS,
            Self::Running => units::MILES,
            Self::Bmi => units::BMI,
            Self::CardioFitness => units::VO2_MAX,
            Self::Steps => units::STEPS,
            Self::Workouts => units::MINUTES,
        }
    }
}

/// One statistic ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticCard {
    /// Statistic shown
    pub kind: StatisticKind,
    /// Card title
    pub title: String,
    /// Formatted value
    pub value: String,
    /// Display unit
    pub unit: String,
    /// Category, change, or relative date
    pub description: String,
}

impl StatisticCard {
    fn new(kind: StatisticKind, value: String, description: String) -> Self {
        Self {
            kind,
            title: kind.title().to_owned(),
            value,
            unit: kind.unit().to_owned(),
            description,
        }
    }
}

impl fmt::Display for StatisticCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.title, self.value, self.unit)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Derived view of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Profile description, or a placeholder when the user wrote none
    pub description: String,
    /// False when the "no statistics" notice should be shown
    pub has_statistics: bool,
    /// Cards in display order
    pub cards: Vec<StatisticCard>,
}

impl ProfileSummary {
    /// Card of a given kind, if it was produced
    #[must_use]
    pub fn card(&self, kind: StatisticKind) -> Option<&StatisticCard> {
        self.cards.iter().find(|card| card.kind == kind)
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        // BMI and workout cards do not count as statistics but are still listed
        if !self.has_statistics {
            write!(f, "\n{NO_STATISTICS}")?;
        }
        for card in &self.cards {
            write!(f, "\n{card}")?;
        }
        Ok(())
    }
}

/// Builds [`ProfileSummary`] values from profile snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryBuilder {
    dates: RelativeDateFormatter,
}

impl SummaryBuilder {
    /// Create a builder using the given relative date options
    #[must_use]
    pub const fn new(dates: RelativeDateFormatter) -> Self {
        Self { dates }
    }

    /// Derive the summary of `profile` as seen at `now`
    ///
    /// Cards follow a fixed order: weight, running, BMI, cardio fitness,
    /// steps, workouts. Each appears only when its source data exists.
    /// Scalar fields holding zero count as not recorded.
    #[must_use]
    pub fn build<Tz>(&self, profile: &ProfileSnapshot, now: &DateTime<Tz>) -> ProfileSummary
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let cards: Vec<StatisticCard> = [
            self.weight_card(profile, now),
            self.running_card(&profile.running_sessions, now),
            Self::bmi_card(profile),
            Self::cardio_card(profile),
            self.steps_card(&profile.step_counts, now),
            self.workouts_card(&profile.workout_minutes, now),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!(cards = cards.len(), "built profile summary");

        ProfileSummary {
            description: profile
                .description
                .clone()
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_owned()),
            has_statistics: profile.has_statistics(),
            cards,
        }
    }

    fn weight_card<Tz>(&self, profile: &ProfileSnapshot, now: &DateTime<Tz>) -> Option<StatisticCard>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let latest = MetricSample::latest(&profile.weights)?;
        let description = recorded(profile.start_weight).map_or_else(
            || self.dates.format(&latest.timestamp, now),
            |start| format_weight_change(latest.value, start),
        );

        Some(StatisticCard::new(
            StatisticKind::Weight,
            format_decimal(latest.value),
            description,
        ))
    }

    fn running_card<Tz>(&self, sessions: &[RunningSession], now: &DateTime<Tz>) -> Option<StatisticCard>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let latest = RunningSession::latest(sessions)?.distance_sample();
        Some(StatisticCard::new(
            StatisticKind::Running,
            format_decimal(latest.value),
            self.dates.format(&latest.timestamp, now),
        ))
    }

    fn bmi_card(profile: &ProfileSnapshot) -> Option<StatisticCard> {
        let bmi = recorded(profile.bmi)?;
        Some(StatisticCard::new(
            StatisticKind::Bmi,
            format_decimal(bmi),
            BmiCategory::from_bmi(bmi).label().to_owned(),
        ))
    }

    fn cardio_card(profile: &ProfileSnapshot) -> Option<StatisticCard> {
        let vo2_max = recorded(profile.cardio_fitness)?;
        let description = recorded(profile.age).map_or_else(String::new, |age| {
            Vo2MaxCategory::classify(vo2_max, age).label().to_owned()
        });

        Some(StatisticCard::new(
            StatisticKind::CardioFitness,
            format_decimal(vo2_max),
            description,
        ))
    }

    fn steps_card<Tz>(&self, samples: &[MetricSample], now: &DateTime<Tz>) -> Option<StatisticCard>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let latest = MetricSample::latest(samples)?;
        // Safe: daily step counts are small whole numbers
        #[allow(clippy::cast_possible_truncation)]
        let steps = latest.value.round() as i64;
        Some(StatisticCard::new(
            StatisticKind::Steps,
            format_thousands(steps),
            self.dates.format(&latest.timestamp, now),
        ))
    }

    fn workouts_card<Tz>(&self, samples: &[MetricSample], now: &DateTime<Tz>) -> Option<StatisticCard>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let latest = MetricSample::latest(samples)?;
        Some(StatisticCard::new(
            StatisticKind::Workouts,
            format_decimal(latest.value),
            self.dates.format(&latest.timestamp, now),
        ))
    }
}

/// A scalar profile field that counts as recorded (present and non-zero)
fn recorded(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
