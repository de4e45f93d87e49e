// ABOUTME: Criterion benchmarks for interval lap classification
// ABOUTME: Measures single-activity classification and parallel batch tagging throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the interval classifier.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    generate_activities, interval_session_laps, steady_run_laps, ActivityBatchSize,
};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use interval_laps::batch::tag_activities;
use interval_laps::intelligence::{IntervalClassifier, IntervalSummary, SpeedWindow};

/// Benchmark lap selection on sessions of growing length
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = IntervalClassifier::default();

    for reps in [6_usize, 12, 24, 48] {
        let laps = interval_session_laps(reps);
        group.throughput(Throughput::Elements(laps.len() as u64));
        group.bench_with_input(BenchmarkId::new("interval_session", reps), &laps, |b, laps| {
            b.iter(|| classifier.classify(black_box(laps)));
        });
    }

    let laps = steady_run_laps(21);
    group.bench_function("steady_half_marathon", |b| {
        b.iter(|| classifier.classify(black_box(&laps)));
    });

    group.finish();
}

/// Benchmark the version gate on an already evaluated activity
fn bench_memoized_evaluation(c: &mut Criterion) {
    let classifier = IntervalClassifier::default();
    let mut activities = generate_activities(ActivityBatchSize::Small);
    tag_activities(&classifier, &mut activities);
    let mut activity = activities.swap_remove(0);

    c.bench_function("evaluate_already_tagged", |b| {
        b.iter(|| classifier.evaluate(black_box(&mut activity)));
    });
}

/// Benchmark parallel tagging of fresh activities
fn bench_batch_tagging(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_tagging");
    let classifier = IntervalClassifier::default();

    for size in [
        ActivityBatchSize::Small,
        ActivityBatchSize::Medium,
        ActivityBatchSize::Large,
    ] {
        let activities = generate_activities(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("tag_activities", size.count()),
            &activities,
            |b, activities| {
                b.iter_batched(
                    || activities.clone(),
                    |mut batch| tag_activities(&classifier, &mut batch),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark summary aggregation over tagged activities
fn bench_summary(c: &mut Criterion) {
    let classifier = IntervalClassifier::default();
    let mut activities = generate_activities(ActivityBatchSize::Medium);
    tag_activities(&classifier, &mut activities);

    c.bench_function("summarize_medium_batch", |b| {
        b.iter(|| {
            activities
                .iter()
                .map(|activity| IntervalSummary::from_activity(black_box(activity), &SpeedWindow::UNBOUNDED))
                .filter(IntervalSummary::has_intervals)
                .count()
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_memoized_evaluation,
    bench_batch_tagging,
    bench_summary
);
criterion_main!(benches);
