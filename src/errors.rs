// ABOUTME: Error module re-exports from vitals-core
// ABOUTME: Keeps crate::errors paths stable for the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `vitals-core` so every workspace crate shares them.

pub use vitals_core::errors::*;
