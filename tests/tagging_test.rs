// ABOUTME: Tests for tagging activity documents on disk
// ABOUTME: Covers force invalidation, dry runs, selective write-back, and per-file failure collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use interval_laps::errors::ErrorCode;
use interval_laps::intelligence::{IntervalClassifier, INTERVAL_ALGORITHM_VERSION};
use interval_laps::models::Activity;
use interval_laps::store::ActivityDocument;
use interval_laps::tagging::{tag_documents, TagOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FRESH_SESSION: &str = r#"{
  "id": 1,
  "name": "6x400m",
  "start_date": "2021-03-28T07:30:00Z",
  "laps": [
    { "id": 1, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.0 },
    { "id": 2, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.0 },
    { "id": 3, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.1 },
    { "id": 4, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.1 },
    { "id": 5, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.2 },
    { "id": 6, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.2 },
    { "id": 7, "distance": 400.0, "elapsed_time": 90, "average_speed": 2.0 },
    { "id": 8, "distance": 400.0, "elapsed_time": 90, "average_speed": 2.0 }
  ]
}"#;

/// Already evaluated by the current version, with a stale flag on a recovery lap
const STALE_SESSION: &str = r#"{
  "id": 2,
  "name": "6x400m, edited",
  "start_date": "2021-03-29T07:30:00Z",
  "interval_algorithm_version": "2021-03-28",
  "laps": [
    { "id": 1, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.0 },
    { "id": 2, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.0 },
    { "id": 3, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.1 },
    { "id": 4, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.1 },
    { "id": 5, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.2 },
    { "id": 6, "distance": 400.0, "elapsed_time": 90, "average_speed": 5.2 },
    { "id": 7, "distance": 400.0, "elapsed_time": 90, "average_speed": 2.0, "is_interval": true },
    { "id": 8, "distance": 400.0, "elapsed_time": 90, "average_speed": 2.0 }
  ]
}"#;

fn write_document(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn load_activity(path: &Path) -> Activity {
    ActivityDocument::load(path).unwrap().activities()[0].clone()
}

fn flagged_lap_ids(activity: &Activity) -> Vec<u64> {
    activity.interval_laps().filter_map(|lap| lap.id()).collect()
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_only_changed_documents_are_written() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let fresh = write_document(&dir, "fresh.json", FRESH_SESSION);
    let stale = write_document(&dir, "stale.json", STALE_SESSION);

    let report = tag_documents(
        &IntervalClassifier::default(),
        &[fresh.clone(), stale.clone()],
        TagOptions::default(),
    );

    assert!(report.is_complete());
    assert!(report.ensure_complete().is_ok());
    assert_eq!(report.files_changed, vec![display(&fresh)]);
    assert_eq!(report.files_written, vec![display(&fresh)]);
    assert_eq!(report.totals.evaluated, 1);
    assert_eq!(report.totals.skipped, 1);
    assert_eq!(report.totals.tagged_laps, 6);

    assert_eq!(flagged_lap_ids(&load_activity(&fresh)), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(fs::read_to_string(&stale).unwrap(), STALE_SESSION);
}

#[test]
fn test_second_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let fresh = write_document(&dir, "fresh.json", FRESH_SESSION);
    let classifier = IntervalClassifier::default();
    let files = [fresh.clone()];

    tag_documents(&classifier, &files, TagOptions::default());
    let after_first = fs::read_to_string(&fresh).unwrap();

    let report = tag_documents(&classifier, &files, TagOptions::default());

    assert!(report.files_changed.is_empty());
    assert!(report.files_written.is_empty());
    assert_eq!(report.totals.skipped, 1);
    assert_eq!(fs::read_to_string(&fresh).unwrap(), after_first);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let fresh = write_document(&dir, "fresh.json", FRESH_SESSION);

    let report = tag_documents(
        &IntervalClassifier::default(),
        &[fresh.clone()],
        TagOptions {
            force: false,
            dry_run: true,
        },
    );

    assert!(report.dry_run);
    assert_eq!(report.files_changed, vec![display(&fresh)]);
    assert!(report.files_written.is_empty());
    assert_eq!(report.totals.tagged_laps, 6);
    assert_eq!(fs::read_to_string(&fresh).unwrap(), FRESH_SESSION);
}

#[test]
fn test_force_clears_stale_flags_and_recomputes() {
    let dir = TempDir::new().unwrap();
    let stale = write_document(&dir, "stale.json", STALE_SESSION);

    let report = tag_documents(
        &IntervalClassifier::default(),
        &[stale.clone()],
        TagOptions {
            force: true,
            dry_run: false,
        },
    );

    assert_eq!(report.files_written, vec![display(&stale)]);
    assert_eq!(report.totals.evaluated, 1);
    let activity = load_activity(&stale);
    assert_eq!(flagged_lap_ids(&activity), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        activity.interval_algorithm_version(),
        Some(INTERVAL_ALGORITHM_VERSION)
    );
}

#[test]
fn test_without_force_stale_flags_remain() {
    let dir = TempDir::new().unwrap();
    let stale = write_document(&dir, "stale.json", STALE_SESSION);

    tag_documents(&IntervalClassifier::default(), &[stale.clone()], TagOptions::default());

    assert_eq!(flagged_lap_ids(&load_activity(&stale)), vec![7]);
}

#[test]
fn test_rejected_documents_do_not_stop_the_run() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let broken = write_document(&dir, "broken.json", "{ \"id\": ");
    let fresh = write_document(&dir, "fresh.json", FRESH_SESSION);

    let report = tag_documents(
        &IntervalClassifier::default(),
        &[missing.clone(), broken.clone(), fresh.clone()],
        TagOptions::default(),
    );

    assert!(!report.is_complete());
    assert_eq!(report.files_rejected.len(), 2);
    assert_eq!(report.files_rejected[0].path, display(&missing));
    assert_eq!(report.files_rejected[0].code, ErrorCode::ResourceNotFound);
    assert_eq!(report.files_rejected[1].code, ErrorCode::SerializationError);
    assert_eq!(report.files_written, vec![display(&fresh)]);

    let error = report.ensure_complete().unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_ne!(error.exit_code(), 0);
}

#[test]
fn test_write_failure_is_recorded_and_run_continues() {
    let dir = TempDir::new().unwrap();
    let blocked = write_document(&dir, "blocked.json", FRESH_SESSION);
    let fresh = write_document(&dir, "fresh.json", FRESH_SESSION);
    fs::create_dir(dir.path().join("blocked.json.tmp")).unwrap();

    let report = tag_documents(
        &IntervalClassifier::default(),
        &[blocked.clone(), fresh.clone()],
        TagOptions::default(),
    );

    assert_eq!(report.files_changed, vec![display(&blocked), display(&fresh)]);
    assert_eq!(report.files_written, vec![display(&fresh)]);
    assert_eq!(report.files_failed.len(), 1);
    assert_eq!(report.files_failed[0].path, display(&blocked));
    assert_eq!(report.files_failed[0].code, ErrorCode::StorageError);
    assert_eq!(fs::read_to_string(&blocked).unwrap(), FRESH_SESSION);

    let error = report.ensure_complete().unwrap_err();
    assert_eq!(error.exit_code(), 74);
}

#[test]
fn test_report_serializes_totals_inline() {
    let dir = TempDir::new().unwrap();
    let fresh = write_document(&dir, "fresh.json", FRESH_SESSION);

    let report = tag_documents(&IntervalClassifier::default(), &[fresh], TagOptions::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["classifier_version"], INTERVAL_ALGORITHM_VERSION);
    assert_eq!(json["tagged_laps"], 6);
    assert_eq!(json["files_failed"].as_array().map(Vec::len), Some(0));
}
