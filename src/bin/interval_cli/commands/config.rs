// ABOUTME: Config command for interval-laps
// ABOUTME: Prints effective detection thresholds and the version token they produce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use interval_laps::errors::AppResult;
use interval_laps::intelligence::IntervalClassifier;
use serde_json::json;

use crate::helpers::print_json;

/// Print the classifier configuration
pub fn run(classifier: &IntervalClassifier) -> AppResult<()> {
    print_json(&json!({
        "version": classifier.version(),
        "config": classifier.config(),
    }))
}
