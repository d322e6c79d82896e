// ABOUTME: Configuration module for display and output settings
// ABOUTME: Environment-only configuration, overridable by CLI flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Vitals
//!
//! Configuration comes from environment variables only; there is no config
//! file. The CLI applies its flags on top of the environment values.

/// Display configuration from environment variables
pub mod environment;

pub use environment::{parse_utc_offset, DisplayConfig};
