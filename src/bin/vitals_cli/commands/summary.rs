// ABOUTME: Profile summary command for vitals-cli
// ABOUTME: Loads a profile snapshot and prints its statistic cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset, Local};
use std::path::Path;
use tracing::info;
use vitals::config::DisplayConfig;
use vitals::errors::AppResult;
use vitals::ingest::load_profile_snapshot;
use vitals::intelligence::SummaryBuilder;

use crate::helpers::clock::now_in;
use crate::helpers::display::print_result;

type Result<T> = AppResult<T>;

/// Render the summary of the profile stored at `path`
pub fn render(
    path: &Path,
    now: Option<DateTime<FixedOffset>>,
    config: &DisplayConfig,
) -> Result<()> {
    let profile = load_profile_snapshot(path)?;
    let builder = SummaryBuilder::new(config.relative_dates());

    let summary = match config.utc_offset {
        Some(offset) => builder.build(&profile, &now_in(&offset, now)),
        None => builder.build(&profile, &now_in(&Local, now)),
    };

    info!(
        path = %path.display(),
        cards = summary.cards.len(),
        has_statistics = summary.has_statistics,
        "rendered profile summary"
    );
    print_result(&summary, config.output_format)
}
