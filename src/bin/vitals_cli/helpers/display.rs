// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for vitals-cli
// ABOUTME: Results go to stdout in the configured format, errors go to stderr

use serde::Serialize;
use std::fmt::Display;
use tracing::warn;
use vitals::errors::{AppError, AppResult, ErrorResponse};
use vitals::formatters::{format_output, OutputFormat};

/// Print a command result
pub fn print_result<T>(value: &T, format: OutputFormat) -> AppResult<()>
where
    T: Serialize + Display,
{
    let rendered = format_output(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print an error as a JSON envelope or a single line of text
pub fn print_error(error: AppError, format: OutputFormat) {
    warn!(code = ?error.code, exit_code = error.exit_code(), "command failed");

    let text = error.to_string();
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(body) => eprintln!("{body}"),
            Err(_) => eprintln!("Error: {text}"),
        },
        OutputFormat::Text => eprintln!("Error: {text}"),
    }
}
