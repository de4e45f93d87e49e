// ABOUTME: Configuration module for interval-intelligence crate
// ABOUTME: Re-exports interval detection configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Interval detection thresholds
pub mod intervals;

pub use error::ConfigError;
pub use intervals::IntervalDetectionConfig;
