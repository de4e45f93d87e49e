// ABOUTME: Unit conversion constants shared by models, summaries, and the CLI
// ABOUTME: Keeps distance and time factors in one place instead of scattering literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;

    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}
