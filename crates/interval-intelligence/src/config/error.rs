// ABOUTME: Configuration error types for interval detection threshold validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and environment access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for interval detection validation.

use interval_core::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Relationship between two values is invalid
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access or parse error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
            }
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => {
                Self::config(error.to_string()).with_source(error)
            }
        }
    }
}
