// ABOUTME: Main library entry point for the Vitals health metric toolkit
// ABOUTME: Wires configuration, logging, output formatting and ingest validation around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals
//!
//! Derives display-ready statistics from raw health samples: BMI and
//! VO2 max categories, relative timestamps such as "Yesterday at 07:30 PM",
//! and grouped step counts.
//!
//! The derivation logic lives in `vitals-intelligence` and is re-exported
//! here as [`intelligence`]. This crate adds the pieces an operator tool
//! needs around it:
//!
//! - [`config`]: environment-driven display settings
//! - [`logging`]: `tracing` subscriber setup
//! - [`formatters`]: JSON and text rendering of results
//! - [`ingest`]: strict validation of incoming sample payloads
//!
//! ## Example
//!
//! ```rust
//! use vitals::intelligence::{classify_bmi, classify_vo2_max, format_thousands};
//!
//! assert_eq!(classify_bmi(22.4), "Normal");
//! assert_eq!(classify_vo2_max(33.0, 35.0), "Above Average");
//! assert_eq!(format_thousands(13_196), "13,196");
//! ```

/// Display configuration loaded from the environment
pub mod config;

/// Unified error handling re-exported from `vitals-core`
pub mod errors;

/// Output format abstraction
pub mod formatters;

/// Validation of incoming metric payloads
pub mod ingest;

/// Structured logging setup
pub mod logging;

/// Shared models and constants
pub use vitals_core as core;

/// Health metric derivation engine
pub use vitals_intelligence as intelligence;
