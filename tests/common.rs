// ABOUTME: Shared test utilities and fixtures for interval-laps integration tests
// ABOUTME: Provides quiet logging setup and activity builders for common workout shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `interval_laps`

use chrono::{TimeZone, Utc};
use interval_laps::models::{Activity, ActivityBuilder, Lap};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Speeds of a 6x400m session with two recovery jogs at the end
pub const SIX_BY_400_SPEEDS: [f64; 8] = [5.0, 5.0, 5.1, 5.1, 5.2, 5.2, 2.0, 2.0];

/// Laps of equal distance and time with the given speeds
pub fn laps_with_speeds(distance: f64, elapsed_time: u64, speeds: &[f64]) -> Vec<Lap> {
    speeds
        .iter()
        .map(|&speed| Lap::new(distance, elapsed_time, speed))
        .collect()
}

/// An activity with the given laps and a fixed start date
pub fn activity_with_laps(id: u64, laps: Vec<Lap>) -> Activity {
    ActivityBuilder::new(id, format!("Session {id}"), fixed_start())
        .laps(laps)
        .build()
}

/// The 6x400m session: 8 laps of 400 m in 90 s, six hard and two easy
pub fn six_by_400(id: u64) -> Activity {
    activity_with_laps(id, laps_with_speeds(400.0, 90, &SIX_BY_400_SPEEDS))
}

/// A session where no lap is long enough to be eligible
pub fn ten_by_100(id: u64) -> Activity {
    activity_with_laps(id, laps_with_speeds(100.0, 90, &[5.0; 10]))
}

/// Lap indices currently flagged as interval laps
pub fn flagged_indices(activity: &Activity) -> Vec<usize> {
    activity
        .laps()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter(|(_, lap)| lap.is_interval())
        .map(|(index, _)| index)
        .collect()
}

pub fn fixed_start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 28, 7, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}
