// ABOUTME: Data models for activities and their recorded lap splits
// ABOUTME: Re-exports Activity, ActivityBuilder, and Lap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Activity`: one recorded activity, owning its laps and the interval
//!   algorithm version token
//! - `Lap`: one recorded split with distance, elapsed time, and average speed
//!
//! Recorded measurements are immutable once ingested. The only state that
//! changes afterwards is each lap's interval flag and the activity's version
//! token.

mod activity;
mod lap;

pub use activity::{Activity, ActivityBuilder};
pub use lap::Lap;
