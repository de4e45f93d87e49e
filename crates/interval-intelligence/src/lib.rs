// ABOUTME: Interval lap detection engine for recorded activities
// ABOUTME: Exposes the classifier, its configuration, and per-activity interval summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Interval Intelligence
//!
//! Determines which laps of an activity form a structured interval workout
//! (repeated hard efforts separated by recovery) and tags them.
//!
//! The classifier is pure and synchronous: it touches nothing but the
//! `Activity` it is handed. Results are memoized on the activity itself
//! through a version token, so re-running an unchanged classifier is free.

/// Classifier configuration and validation
pub mod config;

/// Interval lap classifier
pub mod intervals;

/// Discrete order statistics used by the classifier
pub mod statistics;

/// Per-activity summary of tagged interval laps
pub mod summary;

pub use config::{ConfigError, IntervalDetectionConfig};
pub use intervals::{
    try_tag_interval_laps, DetectionOutcome, IntervalClassifier, IntervalDetection,
    INTERVAL_ALGORITHM_VERSION,
};
pub use summary::{pace_to_speed, IntervalSummary, SpeedWindow};
