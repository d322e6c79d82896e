// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for vitals-cli
// ABOUTME: Provides clock resolution and display formatting utilities

pub mod clock;
pub mod display;
