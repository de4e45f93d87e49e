// ABOUTME: Summary command for interval-laps
// ABOUTME: Prints per-activity interval summaries within an optional speed or pace window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use interval_laps::errors::AppResult;
use interval_laps::intelligence::{IntervalClassifier, IntervalSummary, SpeedWindow};
use interval_laps::store::ActivityDocument;
use std::path::Path;

use crate::helpers::print_json;

/// Build the speed window, explicit speeds taking precedence over paces
pub fn speed_window(
    min_speed: Option<f64>,
    max_speed: Option<f64>,
    fastest_pace: Option<f64>,
    slowest_pace: Option<f64>,
) -> SpeedWindow {
    SpeedWindow::from_pace_range(fastest_pace, slowest_pace).with_speed_bounds(min_speed, max_speed)
}

/// Summarize the interval laps of every activity in a document
///
/// Activities not yet evaluated by this classifier are tagged in memory
/// first; the document on disk is left untouched.
pub fn run(classifier: &IntervalClassifier, file: &Path, window: &SpeedWindow) -> AppResult<()> {
    let mut document = ActivityDocument::load(file)?;

    let summaries: Vec<IntervalSummary> = document
        .activities_mut()
        .iter_mut()
        .map(|activity| {
            classifier.try_tag_interval_laps(activity);
            IntervalSummary::from_activity(activity, window)
        })
        .collect();

    print_json(&summaries)
}
