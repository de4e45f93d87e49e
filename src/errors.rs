// ABOUTME: Error types used by the caller-side modules and the CLI
// ABOUTME: Re-exports the core AppError system together with configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` lives in `interval-core` so every crate reports the same codes.
//! Configuration failures convert into it through `From<ConfigError>`.

pub use interval_core::errors::{AppError, AppResult, ErrorCode};
pub use interval_intelligence::config::ConfigError;
