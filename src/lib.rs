// ABOUTME: Main library entry point for interval lap detection
// ABOUTME: Wires the classifier to logging, activity file storage, and batch evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Interval Laps
//!
//! Detects the structured interval segment of a recorded activity (repeated
//! hard efforts separated by recovery) and tags each interval lap.
//!
//! ## Architecture
//!
//! - **`interval-core`**: `Activity` and `Lap` models, `AppError`
//! - **`interval-intelligence`**: the classifier, its thresholds, and
//!   per-activity summaries
//! - this crate: the caller side, meaning logging setup, loading and saving
//!   activity documents, parallel batch evaluation, and document tagging
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use interval_laps::intelligence::try_tag_interval_laps;
//! use interval_laps::models::{ActivityBuilder, Lap};
//!
//! let speeds = [5.0, 5.0, 5.1, 5.1, 5.2, 5.2, 2.0, 2.0];
//! let laps = speeds.iter().map(|&speed| Lap::new(400.0, 90, speed)).collect();
//! let mut activity = ActivityBuilder::new(7, "Track", Utc::now()).laps(laps).build();
//!
//! assert!(try_tag_interval_laps(&mut activity));
//! assert_eq!(activity.interval_laps().count(), 6);
//! ```

/// Unified error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Activity document loading and saving
pub mod store;

/// Parallel evaluation of independent activities
pub mod batch;

/// Tagging and writing back activity documents
pub mod tagging;

/// Activity and lap models
pub use interval_core::models;

/// Interval classifier, configuration, and summaries
pub use interval_intelligence as intelligence;
