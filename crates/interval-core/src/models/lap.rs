// ABOUTME: Lap split model with recorded distance, time, speed, and the interval flag
// ABOUTME: Recorded fields are read-only; only the interval flag can change after ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult};

/// A recorded lap split within an activity
///
/// Field names follow the Strava lap payload so provider JSON can be
/// deserialized directly. The recorded measurements are private and only
/// readable; the `is_interval` flag is the single piece of mutable state.
/// Provider fields the model does not interpret are kept as they were and
/// written back on serialization.
///
/// # Examples
///
/// ```rust
/// use interval_core::Lap;
///
/// let lap = Lap::new(400.0, 90, 4.44).with_average_heartrate(172.0);
/// assert!(!lap.is_interval());
/// assert_eq!(lap.elapsed_time(), 90);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    /// Provider lap identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    /// Lap distance in meters
    distance: f64,
    /// Elapsed time of the lap in seconds
    elapsed_time: u64,
    /// Average speed in meters per second
    average_speed: f64,
    /// Average heart rate (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heartrate: Option<f64>,
    /// Blood lactate reading taken after the lap (mmol/L)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lactate: Option<f64>,
    /// Whether the lap belongs to a structured interval segment
    #[serde(default)]
    is_interval: bool,
    /// Provider fields carried through untouched
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Lap {
    /// Creates a lap from its recorded measurements
    #[must_use]
    pub fn new(distance: f64, elapsed_time: u64, average_speed: f64) -> Self {
        Self {
            id: None,
            distance,
            elapsed_time,
            average_speed,
            average_heartrate: None,
            lactate: None,
            is_interval: false,
            extra: Map::new(),
        }
    }

    /// Creates a lap deriving the average speed from distance and time
    ///
    /// A zero elapsed time yields a speed of zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_distance_and_time(distance: f64, elapsed_time: u64) -> Self {
        let average_speed = if elapsed_time == 0 {
            0.0
        } else {
            distance / elapsed_time as f64
        };
        Self::new(distance, elapsed_time, average_speed)
    }

    /// Sets the provider lap identifier
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the average heart rate
    #[must_use]
    pub fn with_average_heartrate(mut self, bpm: f64) -> Self {
        self.average_heartrate = Some(bpm);
        self
    }

    /// Sets the lactate reading
    #[must_use]
    pub fn with_lactate(mut self, mmol_per_liter: f64) -> Self {
        self.lactate = Some(mmol_per_liter);
        self
    }

    /// Returns the provider lap identifier
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns the lap distance in meters
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the elapsed time in seconds
    #[must_use]
    pub const fn elapsed_time(&self) -> u64 {
        self.elapsed_time
    }

    /// Returns the average speed in meters per second
    #[must_use]
    pub const fn average_speed(&self) -> f64 {
        self.average_speed
    }

    /// Returns the average heart rate (BPM)
    #[must_use]
    pub const fn average_heartrate(&self) -> Option<f64> {
        self.average_heartrate
    }

    /// Returns the lactate reading (mmol/L)
    #[must_use]
    pub const fn lactate(&self) -> Option<f64> {
        self.lactate
    }

    /// Returns a provider field the model does not interpret
    #[must_use]
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Returns whether the lap is tagged as an interval lap
    #[must_use]
    pub const fn is_interval(&self) -> bool {
        self.is_interval
    }

    /// Tags the lap as part of an interval segment
    pub fn mark_interval(&mut self) {
        self.is_interval = true;
    }

    /// Resets the interval tag to its default
    pub fn clear_interval(&mut self) {
        self.is_interval = false;
    }

    /// Validates the recorded measurements
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if distance or speed is negative or not
    /// finite, or if heart rate or lactate are present but negative or not
    /// finite.
    pub fn validate(&self) -> AppResult<()> {
        check_measurement("distance", self.distance)?;
        check_measurement("average_speed", self.average_speed)?;
        if let Some(bpm) = self.average_heartrate {
            check_measurement("average_heartrate", bpm)?;
        }
        if let Some(lactate) = self.lactate {
            check_measurement("lactate", lactate)?;
        }
        Ok(())
    }
}

fn check_measurement(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{field} must be a finite non-negative number, got {value}"
        )))
    }
}
