#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the sorting, coloring, aggregation, smoothing, and
//! correlation pipeline over generated record collections.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use clfviz::prelude::*;
use serde_json::{json, Map};

fn make_records(count: usize) -> Vec<ClassificationResult> {
    let methods = ["svm", "rf", "knn", "mlp"];
    (0..count)
        .map(|i| {
            let method = methods[i % methods.len()];
            let accuracy = 0.5 + 0.4 * ((i as f64 * 0.37).sin().abs());
            let mut args = Map::new();
            args.insert("title".to_string(), json!(format!("{method} fold{}", i % 5)));
            args.insert("method".to_string(), json!(method));
            args.insert("c".to_string(), json!((i % 7) as f64 * 0.5));
            let history = (i % 3 == 0).then(|| History {
                acc: Some((0..50).map(|e| 0.4 + 0.01 * e as f64).collect()),
                val_acc: Some((0..50).map(|e| 0.35 + 0.009 * e as f64).collect()),
                loss: Some((0..50).map(|e| 1.0 / (1.0 + e as f64)).collect()),
                val_loss: Some((0..50).map(|e| 1.2 / (1.0 + e as f64)).collect()),
            });
            ClassificationResult {
                hash: format!("{i:08x}"),
                args,
                train_scores: Scores {
                    accuracy: accuracy + 0.02,
                    pre_rec_fs_supp: vec![accuracy, accuracy, accuracy],
                    conf_matrix: None,
                },
                test_scores: Scores {
                    accuracy,
                    pre_rec_fs_supp: vec![accuracy, accuracy, accuracy],
                    conf_matrix: Some(vec![vec![8.0, 2.0], vec![1.0, 9.0]]),
                },
                clf_time: 0.1 + (i as f64 % 13.0),
                pred_time: 0.01 + (i as f64 % 5.0) * 0.1,
                history,
                history_smoothed: None,
                represents: None,
            }
        })
        .collect()
}

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1_000, 10_000] {
        let records = make_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| sort_records(black_box(&records), &SortKey::TestAccuracy, false));
        });
    }

    group.finish();
}

fn color_assignment_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_colors");
    let records = make_records(1_000);
    let config = PaletteConfig::default();

    group.bench_function("categorical", |b| {
        b.iter(|| assign_colors(black_box(&records), &ColorMode::Method, &config));
    });
    group.bench_function("continuous", |b| {
        b.iter(|| assign_colors(black_box(&records), &ColorMode::TestAccuracy, &config));
    });

    group.finish();
}

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1_000] {
        let records = make_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                aggregate(
                    black_box(&records),
                    &GroupKey::Method,
                    Representative::Mean,
                    &SortKey::TestAccuracy,
                    false,
                )
                .expect("aggregation should succeed")
            });
        });
    }

    group.finish();
}

fn smoothing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth");
    let records = make_records(1_000);

    for weight in [0.0, 0.6, 0.99] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("w_{weight}")),
            &weight,
            |b, &weight| {
                b.iter(|| smooth_all(black_box(&records), weight));
            },
        );
    }

    group.finish();
}

fn correlation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate");
    let records = make_records(1_000);
    let keys = vec![
        SortKey::TestAccuracy,
        SortKey::TrainAccuracy,
        SortKey::TrainTime,
        SortKey::TestTime,
        SortKey::Param("c".to_string()),
    ];

    group.bench_function("pair", |b| {
        b.iter(|| {
            correlate_attributes(
                black_box(&records),
                &SortKey::TrainTime,
                &SortKey::TestAccuracy,
            )
        });
    });
    group.bench_function("matrix_5x5", |b| {
        b.iter(|| correlation_matrix(black_box(&records), black_box(&keys)));
    });

    group.finish();
}

criterion_group!(
    benches,
    sort_benchmark,
    color_assignment_benchmark,
    aggregate_benchmark,
    smoothing_benchmark,
    correlation_benchmark
);
criterion_main!(benches);
