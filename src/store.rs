// ABOUTME: Activity document storage for the CLI acting as classifier caller
// ABOUTME: Loads and validates JSON activity files and writes them back via temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Documents
//!
//! A document is a JSON file holding either one activity object or an array
//! of activities, in the provider's lap payload shape. Saving preserves the
//! original shape and every provider field the models do not interpret, so
//! re-reading the file yields the same data with the updated interval flags
//! and version tokens.

use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::Activity;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentShape {
    Many(Vec<Activity>),
    Single(Box<Activity>),
}

/// Activities loaded from one JSON file
#[derive(Debug, Clone)]
pub struct ActivityDocument {
    path: PathBuf,
    activities: Vec<Activity>,
    single: bool,
}

impl ActivityDocument {
    /// Load and validate a document from disk
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file does not exist, `StorageError`
    /// if it cannot be read, `SerializationError` if it is not an activity
    /// document, and `ValueOutOfRange` if a lap fails validation
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let loaded = Self::read(path);

        AppLogger::log_document_operation(
            "load",
            &path.display().to_string(),
            loaded.as_ref().map_or(0, |document| document.activities.len()),
            loaded.is_ok(),
        );
        loaded
    }

    fn read(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::not_found(format!("activity document {}", path.display())).with_source(e)
            } else {
                AppError::storage(format!("{}: {e}", path.display())).with_source(e)
            }
        })?;

        let (activities, single) = Self::parse(&contents).map_err(|error| {
            AppError::new(error.code, format!("{}: {}", path.display(), error.message))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            activities,
            single,
        })
    }

    /// Parse document contents, returning the activities and whether the
    /// document held a single object rather than an array
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and `ValueOutOfRange`
    /// for invalid lap measurements
    pub fn parse(contents: &str) -> AppResult<(Vec<Activity>, bool)> {
        let (activities, single) = match serde_json::from_str::<DocumentShape>(contents)? {
            DocumentShape::Many(activities) => (activities, false),
            DocumentShape::Single(activity) => (vec![*activity], true),
        };

        for activity in &activities {
            activity.validate()?;
        }

        Ok((activities, single))
    }

    /// Path the document was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Activities in the document
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Activities in the document, for classification
    pub fn activities_mut(&mut self) -> &mut [Activity] {
        &mut self.activities
    }

    /// Serialize the document in its original shape
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        let json = match (self.single, self.activities.as_slice()) {
            (true, [activity]) => serde_json::to_string_pretty(activity)?,
            _ => serde_json::to_string_pretty(&self.activities)?,
        };
        Ok(json)
    }

    /// Write the document back to its path
    ///
    /// Writes a sibling temporary file first and renames it over the
    /// original, so readers never see a half-written document.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails and `StorageError`
    /// if the file cannot be written
    pub fn save(&self) -> AppResult<()> {
        let saved = self.write();

        AppLogger::log_document_operation(
            "save",
            &self.path.display().to_string(),
            self.activities.len(),
            saved.is_ok(),
        );
        saved
    }

    fn write(&self) -> AppResult<()> {
        let json = self.to_json()?;

        let mut temp_name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("activity"), ToOwned::to_owned);
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        fs::write(&temp_path, json).map_err(|e| {
            AppError::storage(format!("{}: {e}", temp_path.display())).with_source(e)
        })?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            // Leave no stray temp file behind
            let _ = fs::remove_file(&temp_path);
            return Err(AppError::storage(format!("{}: {e}", self.path.display())).with_source(e));
        }

        debug!(path = %self.path.display(), "Activity document written");
        Ok(())
    }
}
