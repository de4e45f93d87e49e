// ABOUTME: Tag command for interval-laps
// ABOUTME: Tags documents, prints the JSON report, and fails when any document was not processed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use interval_laps::errors::AppResult;
use interval_laps::intelligence::IntervalClassifier;
use interval_laps::tagging::{tag_documents, TagOptions};
use std::path::PathBuf;

use crate::helpers::print_json;

/// Tag every document and report the outcome on stdout
pub fn run(classifier: &IntervalClassifier, files: &[PathBuf], options: TagOptions) -> AppResult<()> {
    let report = tag_documents(classifier, files, options);
    print_json(&report)?;
    report.ensure_complete()
}
