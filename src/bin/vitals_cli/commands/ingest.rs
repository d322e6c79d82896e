// ABOUTME: Payload validation command for vitals-cli
// ABOUTME: Reads a JSON payload from disk and prints the validated record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset, Utc};
use std::path::Path;
use tracing::info;
use vitals::config::DisplayConfig;
use vitals::errors::AppResult;
use vitals::ingest::{ingest, read_document, IngestKind};

use crate::helpers::clock::now_in;
use crate::helpers::display::print_result;

type Result<T> = AppResult<T>;

/// Validate the payload at `path` as `kind`
pub fn validate(
    kind: IngestKind,
    path: &Path,
    now: Option<DateTime<FixedOffset>>,
    config: &DisplayConfig,
) -> Result<()> {
    let body = read_document(path)?;
    let record = ingest(kind, &body, now_in(&Utc, now))?;

    info!(?kind, path = %path.display(), "payload accepted");
    print_result(&record, config.output_format)
}
