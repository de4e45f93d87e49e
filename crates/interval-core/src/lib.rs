// ABOUTME: Core types for the interval lap classifier workspace
// ABOUTME: Foundation crate with activity/lap models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Interval Core
//!
//! Foundation crate providing the shared types used by the interval
//! classifier and its callers. It has no knowledge of the classification
//! algorithm itself.
//!
//! ## Modules
//!
//! - **models**: `Activity` and `Lap`, with controlled mutability of the interval flag
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion constants shared across crates

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion constants
pub mod constants;

/// Activity and lap data models
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Activity, ActivityBuilder, Lap};
