// ABOUTME: Parallel interval classification over independent activities using rayon
// ABOUTME: Aggregates per-activity outcomes into a serializable batch report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Batch Evaluation
//!
//! The classifier is safe to run concurrently on different activities; each
//! worker gets exclusive access to one activity through `&mut`, so no extra
//! synchronization is needed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::intelligence::{DetectionOutcome, IntervalClassifier, IntervalDetection};
use crate::logging::AppLogger;
use crate::models::Activity;

/// Totals from evaluating a set of activities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Activities whose stored evaluation was updated
    pub evaluated: usize,
    /// Activities skipped because their version token was current
    pub skipped: usize,
    /// Evaluated activities with at least one interval lap tagged
    pub tagged_activities: usize,
    /// Interval laps tagged across all activities
    pub tagged_laps: usize,
}

impl BatchReport {
    fn record(&mut self, detection: &IntervalDetection) {
        match detection.outcome {
            DetectionOutcome::AlreadyEvaluated => self.skipped += 1,
            DetectionOutcome::NoLaps | DetectionOutcome::TooFewEligibleLaps { .. } => {
                self.evaluated += 1;
            }
            DetectionOutcome::Tagged { interval_laps } => {
                self.evaluated += 1;
                if interval_laps > 0 {
                    self.tagged_activities += 1;
                }
                self.tagged_laps += interval_laps;
            }
        }
    }

    /// Combine two partial reports
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            evaluated: self.evaluated + other.evaluated,
            skipped: self.skipped + other.skipped,
            tagged_activities: self.tagged_activities + other.tagged_activities,
            tagged_laps: self.tagged_laps + other.tagged_laps,
        }
    }

    /// Whether any activity's stored evaluation changed
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.evaluated > 0
    }
}

/// Evaluate every activity in parallel
pub fn tag_activities(classifier: &IntervalClassifier, activities: &mut [Activity]) -> BatchReport {
    let report = activities
        .par_iter_mut()
        .map(|activity| {
            let detection = classifier.evaluate(activity);
            if detection.changed() {
                AppLogger::log_activity_evaluated(
                    activity.id(),
                    true,
                    detection.interval_lap_indices.len(),
                );
            }
            let mut report = BatchReport::default();
            report.record(&detection);
            report
        })
        .reduce(BatchReport::default, BatchReport::merge);

    info!(
        batch.evaluated = report.evaluated,
        batch.skipped = report.skipped,
        batch.tagged_activities = report.tagged_activities,
        batch.tagged_laps = report.tagged_laps,
        classifier.version = %classifier.version(),
        "Batch evaluation complete"
    );

    report
}
