// ABOUTME: Interval detection thresholds with environment overrides and validation
// ABOUTME: Derives the version token that memoizes classification results on each activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Interval Detection Configuration
//!
//! Defaults reproduce the tuned constants the historical regression data was
//! classified with: laps longer than 200 m and 60 s are eligible, at least six
//! eligible laps are required, the speed band tolerates 0.5 m/s below the lower
//! median, and the distance band spans a factor of three either side of the
//! lower median.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use super::ConfigError;
use crate::intervals::INTERVAL_ALGORITHM_VERSION;
use interval_core::Lap;

/// Thresholds used by the interval classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalDetectionConfig {
    /// Laps must be strictly longer than this to be eligible (meters)
    pub min_lap_distance_meters: f64,
    /// Laps must last strictly longer than this to be eligible (seconds)
    pub min_lap_elapsed_seconds: u64,
    /// Fewer eligible laps than this means no interval segment
    pub min_eligible_laps: usize,
    /// Slack below the lower-median speed still counted as a hard effort (m/s)
    pub speed_tolerance_mps: f64,
    /// Interval laps lie within `[median / factor, median * factor]` of the lower-median distance
    pub distance_band_factor: f64,
}

impl Default for IntervalDetectionConfig {
    fn default() -> Self {
        Self {
            min_lap_distance_meters: 200.0,
            min_lap_elapsed_seconds: 60,
            min_eligible_laps: 6,
            speed_tolerance_mps: 0.5,
            distance_band_factor: 3.0,
        }
    }
}

impl IntervalDetectionConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting thresholds fail validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is negative or not finite, if fewer than
    /// one eligible lap is required, or if the distance band factor is below one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_lap_distance_meters.is_finite() || self.min_lap_distance_meters < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_lap_distance_meters must be a finite non-negative number",
            ));
        }

        if self.min_eligible_laps == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_eligible_laps must be at least 1",
            ));
        }

        if !self.speed_tolerance_mps.is_finite() || self.speed_tolerance_mps < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "speed_tolerance_mps must be a finite non-negative number",
            ));
        }

        if !self.distance_band_factor.is_finite() || self.distance_band_factor < 1.0 {
            return Err(ConfigError::InvalidRange(
                "distance_band_factor must be >= 1 so the band contains the median",
            ));
        }

        Ok(())
    }

    /// Whether a lap is long enough, in distance and time, to be considered
    #[must_use]
    pub fn is_eligible(&self, lap: &Lap) -> bool {
        lap.distance() > self.min_lap_distance_meters
            && lap.elapsed_time() > self.min_lap_elapsed_seconds
    }

    /// Version token stored on activities evaluated with these thresholds
    ///
    /// The default thresholds map to [`INTERVAL_ALGORITHM_VERSION`] itself.
    /// Any other configuration appends a fingerprint of its thresholds, so
    /// retuning invalidates earlier results the same way a version bump does.
    #[must_use]
    pub fn version_token(&self) -> String {
        if *self == Self::default() {
            return INTERVAL_ALGORITHM_VERSION.to_owned();
        }

        format!(
            "{INTERVAL_ALGORITHM_VERSION}+d{}-t{}-n{}-s{}-b{}",
            self.min_lap_distance_meters,
            self.min_lap_elapsed_seconds,
            self.min_eligible_laps,
            self.speed_tolerance_mps,
            self.distance_band_factor,
        )
    }

    /// Parse an environment variable into the target if it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val:?}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "INTERVAL_MIN_LAP_DISTANCE_M",
            &mut self.min_lap_distance_meters,
        )?;
        Self::apply_env_var(
            "INTERVAL_MIN_LAP_ELAPSED_S",
            &mut self.min_lap_elapsed_seconds,
        )?;
        Self::apply_env_var("INTERVAL_MIN_ELIGIBLE_LAPS", &mut self.min_eligible_laps)?;
        Self::apply_env_var(
            "INTERVAL_SPEED_TOLERANCE_MPS",
            &mut self.speed_tolerance_mps,
        )?;
        Self::apply_env_var(
            "INTERVAL_DISTANCE_BAND_FACTOR",
            &mut self.distance_band_factor,
        )?;

        Ok(self)
    }
}
