// ABOUTME: Tags interval laps across activity documents and writes changed documents back
// ABOUTME: Collects per-file load and save failures into a report instead of aborting the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Document Tagging
//!
//! Drives the classifier over a list of activity documents. Each document is
//! handled on its own: a file that cannot be loaded or written is recorded in
//! the [`TagReport`] and the run moves on to the next one.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::batch::{tag_activities, BatchReport};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::intelligence::IntervalClassifier;
use crate::models::Activity;
use crate::store::ActivityDocument;

/// How documents are tagged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Invalidate stored tags first so every activity is recomputed
    pub force: bool,
    /// Evaluate without writing any file
    pub dry_run: bool,
}

/// A document that could not be loaded or written
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// Document path
    pub path: String,
    /// Error code of the failure
    pub code: ErrorCode,
    /// Human-readable error
    pub error: String,
}

impl FileFailure {
    fn new(path: &Path, error: &AppError) -> Self {
        Self {
            path: path.display().to_string(),
            code: error.code,
            error: error.to_string(),
        }
    }
}

/// Outcome of tagging a set of documents
#[derive(Debug, Clone, Serialize)]
pub struct TagReport {
    /// Version token written to evaluated activities
    pub classifier_version: String,
    /// Whether writes were skipped
    pub dry_run: bool,
    /// Documents whose stored evaluation changed
    pub files_changed: Vec<String>,
    /// Documents written back
    pub files_written: Vec<String>,
    /// Documents that could not be loaded
    pub files_rejected: Vec<FileFailure>,
    /// Documents that changed but could not be written
    pub files_failed: Vec<FileFailure>,
    /// Activity totals across every loaded document
    #[serde(flatten)]
    pub totals: BatchReport,
}

impl TagReport {
    fn new(classifier: &IntervalClassifier, options: TagOptions) -> Self {
        Self {
            classifier_version: classifier.version().to_owned(),
            dry_run: options.dry_run,
            files_changed: Vec::new(),
            files_written: Vec::new(),
            files_rejected: Vec::new(),
            files_failed: Vec::new(),
            totals: BatchReport::default(),
        }
    }

    /// Whether every document was loaded and, where needed, written
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.files_rejected.is_empty() && self.files_failed.is_empty()
    }

    /// Turn an incomplete run into an error
    ///
    /// # Errors
    ///
    /// Returns an error carrying the code of the first failure when any
    /// document was rejected or could not be written
    pub fn ensure_complete(&self) -> AppResult<()> {
        let failures = self.files_rejected.len() + self.files_failed.len();
        match self.files_rejected.iter().chain(&self.files_failed).next() {
            None => Ok(()),
            Some(first) => Err(AppError::new(
                first.code,
                format!("{failures} documents not processed, first: {}", first.error),
            )),
        }
    }
}

/// Tag every document, writing back the ones whose evaluation changed
pub fn tag_documents(
    classifier: &IntervalClassifier,
    files: &[PathBuf],
    options: TagOptions,
) -> TagReport {
    let mut report = TagReport::new(classifier, options);

    for path in files {
        let mut document = match ActivityDocument::load(path) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %path.display(), error.code = ?e.code, "Rejected activity document: {}", e.message);
                report.files_rejected.push(FileFailure::new(path, &e));
                continue;
            }
        };

        if options.force {
            document
                .activities_mut()
                .iter_mut()
                .for_each(Activity::invalidate_interval_tags);
        }

        let totals = tag_activities(classifier, document.activities_mut());
        report.totals = report.totals.merge(totals);

        if !totals.has_changes() {
            continue;
        }
        report.files_changed.push(path.display().to_string());
        if options.dry_run {
            continue;
        }

        match document.save() {
            Ok(()) => report.files_written.push(path.display().to_string()),
            Err(e) => {
                warn!(path = %path.display(), error.code = ?e.code, "Failed to write activity document: {}", e.message);
                report.files_failed.push(FileFailure::new(path, &e));
            }
        }
    }

    info!(
        files = files.len(),
        changed = report.files_changed.len(),
        written = report.files_written.len(),
        rejected = report.files_rejected.len(),
        failed = report.files_failed.len(),
        "Tagging finished"
    );
    report
}
