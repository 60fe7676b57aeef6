//! Benchmark for the `Vec` extension traits.
//!
//! Compares hashed and equality-only duplicate removal, and projection
//! sorting against the standard library's `sort_by_key`.

use array_ext::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Generates a sequence in which every value appears roughly four times.
fn generate_repeating_vec(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % (size / 4 + 1)).collect()
}

// =============================================================================
// Deduplication Benchmark
// =============================================================================

fn benchmark_remove_duplicates(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_duplicates");

    for size in SIZES {
        let base_vec = generate_repeating_vec(size);

        group.bench_with_input(BenchmarkId::new("hashed", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |mut elements| {
                    elements.remove_duplicates();
                    black_box(elements)
                },
                BatchSize::SmallInput,
            );
        });

        // Quadratic fallback; skipped for the largest size
        if size <= 1000 {
            group.bench_with_input(BenchmarkId::new("equality", size), &size, |bencher, _| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |mut elements| {
                        elements.remove_duplicates_by_equality();
                        black_box(elements)
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

// =============================================================================
// Projection Sort Benchmark
// =============================================================================

fn benchmark_sort_by_projection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by_projection");

    for size in SIZES {
        let base_vec: Vec<(Option<i32>, i32)> = generate_repeating_vec(size)
            .into_iter()
            .map(|value| ((value % 5 != 0).then_some(value), value))
            .collect();

        group.bench_with_input(BenchmarkId::new("projection", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |mut elements| {
                    elements.sort_by_projection(|element| element.0, SortOrder::Descending);
                    black_box(elements)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std_sort_by_key", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |mut elements| {
                    elements.sort_by_key(|element| std::cmp::Reverse(element.0));
                    black_box(elements)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Removal and Partition Benchmark
// =============================================================================

fn benchmark_remove_all_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_all_of");
    let items = [0, 3, 5, 7];

    for size in SIZES {
        let base_vec = generate_repeating_vec(size);
        group.bench_with_input(BenchmarkId::new("remove_all_of", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |mut elements| {
                    elements.remove_all_of(black_box(&items));
                    black_box(elements)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_divided(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("divided");

    for size in SIZES {
        let base_vec = generate_repeating_vec(size);
        group.bench_with_input(BenchmarkId::new("divided", size), &size, |bencher, _| {
            bencher.iter(|| black_box(base_vec.divided(|value| value % 2 == 0)));
        });
        group.bench_with_input(BenchmarkId::new("into_divided", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(elements.into_divided(|value| value % 2 == 0)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_remove_duplicates,
    benchmark_sort_by_projection,
    benchmark_remove_all_of,
    benchmark_divided
);

criterion_main!(benches);
