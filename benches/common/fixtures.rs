// ABOUTME: Benchmark fixtures generating interval and steady-state lap sessions
// ABOUTME: Provides deterministic activity data for reproducible classifier measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating lap data.

use chrono::{DateTime, Duration, TimeZone, Utc};
use interval_laps::models::{Activity, ActivityBuilder, Lap};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ActivityBatchSize {
    /// Small dataset (10 activities) - quick benchmarks
    Small,
    /// Medium dataset (100 activities) - typical season
    Medium,
    /// Large dataset (1000 activities) - full training history
    Large,
}

impl ActivityBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 28, 7, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Laps of a structured session: warm-up, `reps` hard/recovery pairs, cool-down
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn interval_session_laps(reps: usize) -> Vec<Lap> {
    let mut laps = vec![Lap::from_distance_and_time(2000.0, 660)];
    for rep in 0..reps {
        let jitter = (rep % 5) as f64 * 0.05;
        laps.push(Lap::new(800.0, 165, 4.85 + jitter).with_average_heartrate(174.0));
        laps.push(Lap::new(250.0, 90, 2.8).with_average_heartrate(141.0));
    }
    laps.push(Lap::from_distance_and_time(1500.0, 510));
    laps
}

/// Laps of an easy run split every kilometer
#[must_use]
pub fn steady_run_laps(kilometers: usize) -> Vec<Lap> {
    (0..kilometers)
        .map(|_| Lap::from_distance_and_time(1000.0, 330))
        .collect()
}

/// Generate a mix of interval sessions and steady runs, none evaluated yet
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_activities(size: ActivityBatchSize) -> Vec<Activity> {
    let start = base_date();
    (0..size.count())
        .map(|index| {
            let laps = if index % 3 == 0 {
                interval_session_laps(6 + index % 7)
            } else {
                steady_run_laps(5 + index % 10)
            };
            ActivityBuilder::new(
                index as u64,
                format!("Benchmark Activity {index}"),
                start - Duration::days(index as i64),
            )
            .laps(laps)
            .build()
        })
        .collect()
}
