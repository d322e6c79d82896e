// ABOUTME: Core types and constants for the Vitals health summary workspace
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Core
//!
//! Foundation crate providing shared types and constants for the Vitals
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Reference thresholds, display labels, and time constants
//! - **models**: Transient value records handed in by the profile store

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MetricSample`, `ProfileSnapshot`, etc.)
pub mod models;
