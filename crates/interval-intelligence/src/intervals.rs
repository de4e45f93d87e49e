// ABOUTME: Interval lap classifier tagging the hard-effort laps of a structured workout
// ABOUTME: Version-gated multi-pass filter on lap eligibility, lower-median speed, and distance band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Interval Lap Classifier
//!
//! Evaluation runs in four stages:
//!
//! 1. **Version gate**: an activity already carrying the classifier's version
//!    token is skipped. Otherwise the token is written first, so activities
//!    judged to have no intervals are not re-evaluated on every pass.
//! 2. **Eligibility**: only laps longer than the distance and time thresholds
//!    count. Too few eligible laps (or no laps at all) ends evaluation without
//!    touching any lap.
//! 3. **Speed band**: eligible laps at or above the lower-median speed minus
//!    the tolerance are candidate hard efforts.
//! 4. **Distance band**: candidates within a factor of the candidates'
//!    lower-median distance are tagged as interval laps.
//!
//! Laps that do not survive are left as they are; the classifier only ever
//! sets flags. Callers that need a clean slate use
//! [`Activity::invalidate_interval_tags`].

use interval_core::{Activity, Lap};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::IntervalDetectionConfig;
use crate::statistics::lower_median;

/// Current interval algorithm version
///
/// Bump whenever the classification logic changes so activities evaluated by
/// an older version are recomputed.
pub const INTERVAL_ALGORITHM_VERSION: &str = "2021-03-28";

/// How an evaluation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DetectionOutcome {
    /// The stored version token matched; nothing was done
    AlreadyEvaluated,
    /// The activity has no lap sequence, or an empty one
    NoLaps,
    /// Too few laps passed the eligibility filter
    TooFewEligibleLaps {
        /// Number of eligible laps found
        eligible_laps: usize,
    },
    /// The filters ran and tagged this many laps
    Tagged {
        /// Number of laps tagged as interval laps
        interval_laps: usize,
    },
}

/// Result of evaluating one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalDetection {
    /// How the evaluation ended
    #[serde(flatten)]
    pub outcome: DetectionOutcome,
    /// Lower-median speed of the eligible laps (m/s)
    pub median_speed: Option<f64>,
    /// Lower-median distance of the speed-band survivors (meters)
    pub median_distance: Option<f64>,
    /// Positions of the tagged laps in the activity's lap sequence
    pub interval_lap_indices: Vec<usize>,
}

impl IntervalDetection {
    const fn without_selection(outcome: DetectionOutcome) -> Self {
        Self {
            outcome,
            median_speed: None,
            median_distance: None,
            interval_lap_indices: Vec::new(),
        }
    }

    /// Whether the activity's stored evaluation was updated
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self.outcome, DetectionOutcome::AlreadyEvaluated)
    }
}

/// Stages 2-4 applied to a lap slice
struct LapSelection {
    eligible_laps: usize,
    median_speed: Option<f64>,
    median_distance: Option<f64>,
    interval_lap_indices: Vec<usize>,
}

/// Interval lap classifier
///
/// Stateless apart from its thresholds; one instance can be shared across
/// threads and used on any number of activities.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use interval_core::{ActivityBuilder, Lap};
/// use interval_intelligence::IntervalClassifier;
///
/// let speeds = [5.0, 5.0, 5.1, 5.1, 5.2, 5.2, 2.0, 2.0];
/// let laps = speeds.iter().map(|&speed| Lap::new(400.0, 90, speed)).collect();
/// let mut activity = ActivityBuilder::new(1, "6x400m", Utc::now()).laps(laps).build();
///
/// let classifier = IntervalClassifier::default();
/// assert!(classifier.try_tag_interval_laps(&mut activity));
/// assert_eq!(activity.interval_laps().count(), 6);
///
/// // Second run is memoized by the version token
/// assert!(!classifier.try_tag_interval_laps(&mut activity));
/// ```
#[derive(Debug, Clone)]
pub struct IntervalClassifier {
    config: IntervalDetectionConfig,
    version: String,
}

impl Default for IntervalClassifier {
    fn default() -> Self {
        Self::new(IntervalDetectionConfig::default())
    }
}

impl IntervalClassifier {
    /// Creates a classifier with the given thresholds
    #[must_use]
    pub fn new(config: IntervalDetectionConfig) -> Self {
        let version = config.version_token();
        Self { config, version }
    }

    /// Returns the thresholds in use
    #[must_use]
    pub const fn config(&self) -> &IntervalDetectionConfig {
        &self.config
    }

    /// Returns the version token this classifier writes to activities
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the activity was last evaluated by a different version
    #[must_use]
    pub fn needs_evaluation(&self, activity: &Activity) -> bool {
        activity.interval_algorithm_version() != Some(self.version.as_str())
    }

    /// Tags the interval laps of an activity
    ///
    /// Returns `true` when the stored evaluation was updated and `false` when
    /// the activity already carried this classifier's version token.
    pub fn try_tag_interval_laps(&self, activity: &mut Activity) -> bool {
        self.evaluate(activity).changed()
    }

    /// Tags the interval laps of an activity and reports how evaluation went
    pub fn evaluate(&self, activity: &mut Activity) -> IntervalDetection {
        if !self.needs_evaluation(activity) {
            return IntervalDetection::without_selection(DetectionOutcome::AlreadyEvaluated);
        }

        activity.set_interval_algorithm_version(self.version.as_str());
        let activity_id = activity.id();

        let Some(laps) = activity.laps_mut().filter(|laps| !laps.is_empty()) else {
            debug!(activity.id = activity_id, "No laps recorded, nothing to tag");
            return IntervalDetection::without_selection(DetectionOutcome::NoLaps);
        };

        let selection = self.select(laps);

        if selection.eligible_laps < self.config.min_eligible_laps {
            debug!(
                activity.id = activity_id,
                eligible_laps = selection.eligible_laps,
                required = self.config.min_eligible_laps,
                "Too few eligible laps for an interval session"
            );
            return IntervalDetection::without_selection(DetectionOutcome::TooFewEligibleLaps {
                eligible_laps: selection.eligible_laps,
            });
        }

        for &index in &selection.interval_lap_indices {
            laps[index].mark_interval();
        }

        debug!(
            activity.id = activity_id,
            eligible_laps = selection.eligible_laps,
            median_speed = ?selection.median_speed,
            median_distance = ?selection.median_distance,
            interval_laps = selection.interval_lap_indices.len(),
            "Tagged interval laps"
        );

        IntervalDetection {
            outcome: DetectionOutcome::Tagged {
                interval_laps: selection.interval_lap_indices.len(),
            },
            median_speed: selection.median_speed,
            median_distance: selection.median_distance,
            interval_lap_indices: selection.interval_lap_indices,
        }
    }

    /// Positions of the laps that would be tagged, without touching anything
    ///
    /// Ignores the version token. Returns an empty list when fewer laps than
    /// `min_eligible_laps` are eligible.
    #[must_use]
    pub fn classify(&self, laps: &[Lap]) -> Vec<usize> {
        let selection = self.select(laps);
        if selection.eligible_laps < self.config.min_eligible_laps {
            return Vec::new();
        }
        selection.interval_lap_indices
    }

    fn select(&self, laps: &[Lap]) -> LapSelection {
        let eligible: Vec<usize> = laps
            .iter()
            .enumerate()
            .filter(|(_, lap)| self.config.is_eligible(lap))
            .map(|(index, _)| index)
            .collect();

        if eligible.len() < self.config.min_eligible_laps {
            return LapSelection {
                eligible_laps: eligible.len(),
                median_speed: None,
                median_distance: None,
                interval_lap_indices: Vec::new(),
            };
        }

        let median_speed = lower_median(eligible.iter().map(|&index| laps[index].average_speed()));
        let fast: Vec<usize> = match median_speed {
            Some(median) => {
                let floor = median - self.config.speed_tolerance_mps;
                eligible
                    .iter()
                    .copied()
                    .filter(|&index| laps[index].average_speed() >= floor)
                    .collect()
            }
            None => Vec::new(),
        };

        let median_distance = lower_median(fast.iter().map(|&index| laps[index].distance()));
        let interval_lap_indices = match median_distance {
            Some(median) => {
                let shortest = median / self.config.distance_band_factor;
                let longest = median * self.config.distance_band_factor;
                fast.into_iter()
                    .filter(|&index| {
                        let distance = laps[index].distance();
                        distance >= shortest && distance <= longest
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        LapSelection {
            eligible_laps: eligible.len(),
            median_speed,
            median_distance,
            interval_lap_indices,
        }
    }
}

/// Tags the interval laps of an activity with the default thresholds
///
/// Returns `true` when the stored evaluation was updated and `false` when the
/// activity was already evaluated by [`INTERVAL_ALGORITHM_VERSION`].
pub fn try_tag_interval_laps(activity: &mut Activity) -> bool {
    IntervalClassifier::default().try_tag_interval_laps(activity)
}
