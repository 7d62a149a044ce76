// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Navigation operations (next/previous) with and without subscribers
//! - View projection of the current item
//! - Resolving the embedded SVG assets into handles

use car_gallery::application::projection::ProjectionOptions;
use car_gallery::application::GalleryStore;
use car_gallery::domain::gallery::catalog;
use car_gallery::infrastructure::EmbeddedAssets;
use car_gallery::ui::gallery::ImageHandles;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut store = GalleryStore::new(catalog::cars().unwrap());

    group.bench_function("next", |b| {
        b.iter(|| {
            store.next();
            black_box(store.view_state());
        });
    });

    group.bench_function("previous", |b| {
        b.iter(|| {
            store.previous();
            black_box(store.view_state());
        });
    });

    let mut observed = GalleryStore::new(catalog::cars().unwrap());
    for _ in 0..8 {
        observed.subscribe(|change, state| {
            black_box((change, state));
        });
    }

    group.bench_function("next_with_subscribers", |b| {
        b.iter(|| {
            observed.next();
            black_box(observed.view_state());
        });
    });

    group.finish();
}

/// Benchmark the projection that feeds every `view` call.
fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut store = GalleryStore::new(catalog::cars().unwrap());
    store.toggle_description();
    let options = ProjectionOptions::default();

    group.bench_function("project", |b| {
        b.iter(|| {
            black_box(store.project(black_box(&options)));
        });
    });

    group.finish();
}

/// Benchmark the startup preload of embedded illustrations.
fn bench_preload(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let collection = catalog::cars().unwrap();

    group.bench_function("preload_handles", |b| {
        b.iter(|| {
            black_box(ImageHandles::preload(&collection, &EmbeddedAssets));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_project, bench_preload);
criterion_main!(benches);
