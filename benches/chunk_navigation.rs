// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for chunk navigation operations.
//!
//! Measures the performance of:
//! - Decoding a backend response
//! - Navigation operations (next/previous)
//! - Full reading workflow (load response, page through, toggle view)

use criterion::{criterion_group, criterion_main, Criterion};
use focus_lens::domain::{Chunk, ResponseData};
use focus_lens::source;
use focus_lens::ui::results::{self, ChunkNavigator, Message};
use std::hint::black_box;

const CHUNK_COUNT: u64 = 500;

fn sample_chunks() -> Vec<Chunk> {
    (0..CHUNK_COUNT)
        .map(|i| {
            Chunk::new(
                i,
                format!("Original paragraph number {i}. ").repeat(20),
                format!("Summary {i}."),
            )
        })
        .collect()
}

/// Benchmark decoding of a large backend response.
fn bench_parse_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_navigation");

    let json = serde_json::to_string(&ResponseData::new(sample_chunks()))
        .unwrap_or_default();

    group.bench_function("parse_response", |b| {
        b.iter(|| {
            let response = source::parse_response(black_box(&json));
            black_box(response.ok());
        });
    });

    group.finish();
}

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_navigation");

    let mut navigator = ChunkNavigator::new();
    navigator.replace(sample_chunks());

    group.bench_function("next_to_end", |b| {
        b.iter(|| {
            let mut nav = navigator.clone();
            while nav.next() {}
            black_box(nav.current_index());
        });
    });

    group.bench_function("navigation_info", |b| {
        b.iter(|| black_box(navigator.navigation_info()));
    });

    group.finish();
}

/// Benchmark a complete reading pass through the results state.
fn bench_reading_workflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_navigation");

    let response = ResponseData::new(sample_chunks());

    group.bench_function("read_all_chunks", |b| {
        b.iter(|| {
            let mut state = results::State::new();
            let _ = state.set_response_data(response.clone());
            for _ in 0..CHUNK_COUNT {
                black_box(state.displayed_text());
                state.update(Message::ToggleView);
                black_box(state.displayed_text());
                state.update(Message::NextChunk);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_response,
    bench_navigate,
    bench_reading_workflow
);
criterion_main!(benches);
