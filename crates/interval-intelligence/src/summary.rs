// ABOUTME: Per-activity summary of tagged interval laps within an optional speed window
// ABOUTME: Aggregates interval distance, speed, heart rate, and lactate readings for one activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interval Summary
//!
//! Summarizes the laps already tagged by the classifier. Values stay in SI
//! units; presentation is left to callers.

use interval_core::constants::units::{METERS_PER_KILOMETER, SECONDS_PER_MINUTE};
use interval_core::{Activity, Lap};
use serde::{Deserialize, Serialize};

/// Convert a pace in minutes per kilometer to a speed in meters per second
///
/// Returns `None` for non-positive or non-finite paces.
#[must_use]
pub fn pace_to_speed(minutes_per_km: f64) -> Option<f64> {
    if minutes_per_km.is_finite() && minutes_per_km > 0.0 {
        Some(METERS_PER_KILOMETER / (minutes_per_km * SECONDS_PER_MINUTE))
    } else {
        None
    }
}

/// Inclusive bounds on lap speed (m/s); an absent bound does not filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedWindow {
    /// Slowest accepted speed
    pub min_speed_mps: Option<f64>,
    /// Fastest accepted speed
    pub max_speed_mps: Option<f64>,
}

impl SpeedWindow {
    /// A window accepting every speed
    pub const UNBOUNDED: Self = Self {
        min_speed_mps: None,
        max_speed_mps: None,
    };

    /// Build a window from pace bounds in minutes per kilometer
    ///
    /// The fastest pace bounds speed from above and the slowest pace from
    /// below. Non-positive paces leave that side unbounded.
    #[must_use]
    pub fn from_pace_range(
        fastest_min_per_km: Option<f64>,
        slowest_min_per_km: Option<f64>,
    ) -> Self {
        Self {
            min_speed_mps: slowest_min_per_km.and_then(pace_to_speed),
            max_speed_mps: fastest_min_per_km.and_then(pace_to_speed),
        }
    }

    /// Replace either bound with an explicit speed (m/s) where one is given
    #[must_use]
    pub fn with_speed_bounds(self, min_speed_mps: Option<f64>, max_speed_mps: Option<f64>) -> Self {
        Self {
            min_speed_mps: min_speed_mps.or(self.min_speed_mps),
            max_speed_mps: max_speed_mps.or(self.max_speed_mps),
        }
    }

    /// Whether a speed lies inside the window
    #[must_use]
    pub fn contains(&self, speed_mps: f64) -> bool {
        self.min_speed_mps.is_none_or(|min| speed_mps >= min)
            && self.max_speed_mps.is_none_or(|max| speed_mps <= max)
    }
}

/// Interval laps of one activity and their aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSummary {
    /// Activity the summary belongs to
    pub activity_id: u64,
    /// Number of interval laps inside the speed window
    pub interval_lap_count: usize,
    /// Provider ids of those laps, where known
    pub interval_lap_ids: Vec<u64>,
    /// Distance covered in interval laps (meters)
    pub interval_distance_meters: f64,
    /// Remaining activity distance (meters)
    pub non_interval_distance_meters: f64,
    /// Time spent in interval laps (seconds)
    pub interval_elapsed_seconds: u64,
    /// Mean speed across interval laps (m/s)
    pub average_speed_mps: Option<f64>,
    /// Mean heart rate across interval laps that report one (BPM)
    pub average_heartrate: Option<f64>,
    /// Longest interval lap (meters)
    pub max_distance_meters: Option<f64>,
    /// Fastest interval lap (m/s)
    pub max_speed_mps: Option<f64>,
    /// Longest interval lap by time (seconds)
    pub max_elapsed_seconds: Option<u64>,
    /// Activity-level reading first, then per-lap readings in lap order (mmol/L)
    pub lactate_readings: Vec<f64>,
    /// Mean of the lactate readings (mmol/L)
    pub average_lactate: Option<f64>,
}

impl IntervalSummary {
    /// Summarize the tagged interval laps of an activity
    #[must_use]
    pub fn from_activity(activity: &Activity, window: &SpeedWindow) -> Self {
        let interval_laps: Vec<&Lap> = activity
            .interval_laps()
            .filter(|lap| window.contains(lap.average_speed()))
            .collect();

        let interval_distance_meters: f64 = interval_laps.iter().map(|lap| lap.distance()).sum();
        let total_distance = activity.distance().unwrap_or_else(|| {
            activity
                .laps()
                .unwrap_or_default()
                .iter()
                .map(Lap::distance)
                .sum()
        });

        let lactate_readings: Vec<f64> = activity
            .lactate()
            .into_iter()
            .chain(activity.laps().unwrap_or_default().iter().filter_map(Lap::lactate))
            .collect();

        Self {
            activity_id: activity.id(),
            interval_lap_count: interval_laps.len(),
            interval_lap_ids: interval_laps.iter().filter_map(|lap| lap.id()).collect(),
            interval_distance_meters,
            non_interval_distance_meters: (total_distance - interval_distance_meters).max(0.0),
            interval_elapsed_seconds: interval_laps.iter().map(|lap| lap.elapsed_time()).sum(),
            average_speed_mps: mean(interval_laps.iter().map(|lap| lap.average_speed())),
            average_heartrate: mean(interval_laps.iter().filter_map(|lap| lap.average_heartrate())),
            max_distance_meters: max(interval_laps.iter().map(|lap| lap.distance())),
            max_speed_mps: max(interval_laps.iter().map(|lap| lap.average_speed())),
            max_elapsed_seconds: interval_laps.iter().map(|lap| lap.elapsed_time()).max(),
            average_lactate: mean(lactate_readings.iter().copied()),
            lactate_readings,
        }
    }

    /// Whether the activity has any interval laps inside the window
    #[must_use]
    pub const fn has_intervals(&self) -> bool {
        self.interval_lap_count > 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), value| {
        (sum + value, count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

fn max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.max_by(f64::total_cmp)
}
