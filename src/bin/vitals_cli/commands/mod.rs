// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for vitals-cli
// ABOUTME: Provides classification, summary and ingest commands

pub mod classify;
pub mod ingest;
pub mod summary;
