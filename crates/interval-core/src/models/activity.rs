// ABOUTME: Activity model owning the lap sequence and the interval algorithm version token
// ABOUTME: Includes ActivityBuilder and caller-side invalidation of stored interval tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Lap;
use crate::errors::{AppError, AppResult};

/// A single recorded activity and its lap splits
///
/// The lap sequence may be absent (provider returned no laps) or empty; both
/// are valid. The `interval_algorithm_version` token records which version of
/// the interval classifier last evaluated the laps and is only meaningful as a
/// memoization guard. Provider fields outside the model survive a
/// deserialize/serialize round trip unchanged.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use interval_core::{ActivityBuilder, Lap};
///
/// let activity = ActivityBuilder::new(42, "Track session", Utc::now())
///     .distance(8000.0)
///     .laps(vec![Lap::new(400.0, 80, 5.0)])
///     .build();
///
/// assert_eq!(activity.id(), 42);
/// assert_eq!(activity.laps().map(<[Lap]>::len), Some(1));
/// assert!(activity.interval_algorithm_version().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Provider activity identifier
    id: u64,
    /// Human-readable name of the activity
    #[serde(default)]
    name: String,
    /// When the activity started (UTC)
    start_date: DateTime<Utc>,
    /// Total distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    /// Activity-level lactate reading (mmol/L)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lactate: Option<f64>,
    /// Recorded lap splits, in chronological order
    #[serde(default)]
    laps: Option<Vec<Lap>>,
    /// Interval classifier version that last evaluated the laps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval_algorithm_version: Option<String>,
    /// Provider fields carried through untouched
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Activity {
    /// Returns the provider activity identifier
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the activity name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the activity started
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the total distance in meters, if recorded
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Returns the activity-level lactate reading
    #[must_use]
    pub const fn lactate(&self) -> Option<f64> {
        self.lactate
    }

    /// Returns the lap sequence, if present
    #[must_use]
    pub fn laps(&self) -> Option<&[Lap]> {
        self.laps.as_deref()
    }

    /// Returns the lap sequence for flag updates
    ///
    /// Only a slice is handed out, so laps can be re-tagged but never added,
    /// removed, or reordered.
    pub fn laps_mut(&mut self) -> Option<&mut [Lap]> {
        self.laps.as_deref_mut()
    }

    /// Returns the stored interval algorithm version token
    #[must_use]
    pub fn interval_algorithm_version(&self) -> Option<&str> {
        self.interval_algorithm_version.as_deref()
    }

    /// Records the interval algorithm version that evaluated this activity
    pub fn set_interval_algorithm_version(&mut self, version: impl Into<String>) {
        self.interval_algorithm_version = Some(version.into());
    }

    /// Invalidates previously computed interval tags
    ///
    /// Clears the version token and every lap's interval flag so the next
    /// classifier run recomputes from scratch. Callers use this when upstream
    /// lap data has been edited or re-synced.
    pub fn invalidate_interval_tags(&mut self) {
        self.interval_algorithm_version = None;
        if let Some(laps) = self.laps.as_deref_mut() {
            laps.iter_mut().for_each(Lap::clear_interval);
        }
    }

    /// Returns a provider field the model does not interpret
    #[must_use]
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Returns the laps currently tagged as interval laps
    pub fn interval_laps(&self) -> impl Iterator<Item = &Lap> {
        self.laps
            .iter()
            .flatten()
            .filter(|lap| lap.is_interval())
    }

    /// Validates the activity and every lap
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the activity and lap index when the
    /// activity distance or any lap measurement is invalid.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(distance) = self.distance {
            if !distance.is_finite() || distance < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "activity {}: distance must be a finite non-negative number, got {distance}",
                    self.id
                )));
            }
        }

        for (index, lap) in self.laps.iter().flatten().enumerate() {
            lap.validate().map_err(|error| {
                AppError::out_of_range(format!(
                    "activity {} lap {index}: {}",
                    self.id, error.message
                ))
            })?;
        }

        Ok(())
    }
}

/// Builder for [`Activity`]
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a new `ActivityBuilder` with required fields
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Self {
            activity: Activity {
                id,
                name: name.into(),
                start_date,
                distance: None,
                lactate: None,
                laps: None,
                interval_algorithm_version: None,
                extra: Map::new(),
            },
        }
    }

    /// Sets the total distance in meters
    #[must_use]
    pub fn distance(mut self, value: f64) -> Self {
        self.activity.distance = Some(value);
        self
    }

    /// Sets the activity-level lactate reading
    #[must_use]
    pub fn lactate(mut self, value: f64) -> Self {
        self.activity.lactate = Some(value);
        self
    }

    /// Sets the lap sequence
    #[must_use]
    pub fn laps(mut self, laps: Vec<Lap>) -> Self {
        self.activity.laps = Some(laps);
        self
    }

    /// Sets a previously stored interval algorithm version token
    #[must_use]
    pub fn interval_algorithm_version(mut self, version: impl Into<String>) -> Self {
        self.activity.interval_algorithm_version = Some(version.into());
        self
    }

    /// Builds the activity
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
