//! Strategy comparison benchmarks.
//!
//! Each group runs every strategy of one problem on the same seeded inputs.
//! Quadratic baselines stop at `BRUTE_FORCE_LIMIT` elements, the cubic one
//! earlier.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pointerkit::pair_finder::{self, PairStrategy};
use pointerkit::{
    AreaStrategy, ColorStrategy, Strategy, SubstringStrategy, color_sorter, max_area,
    unique_substring,
};
use pointerkit_bench::{BRUTE_FORCE_LIMIT, SIZES, colors, heights, numbers_with_pair, text};

const SEED: u64 = 0x5eed;

// ============================================================================
// Two-sum
// ============================================================================

fn bench_two_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_sum");

    for len in SIZES {
        let (nums, target) = numbers_with_pair(len, SEED);
        group.throughput(Throughput::Elements(len as u64));

        for &strategy in PairStrategy::ALL {
            if strategy == PairStrategy::BruteForce && len > BRUTE_FORCE_LIMIT {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &nums, |b, nums| {
                b.iter(|| pair_finder::find(black_box(nums), black_box(target), strategy));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Sort colors
// ============================================================================

fn bench_sort_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_colors");

    for len in SIZES {
        let input = colors(len, SEED);
        group.throughput(Throughput::Elements(len as u64));

        for &strategy in ColorStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut colors| {
                        color_sorter::sort(&mut colors, strategy);
                        colors
                    },
                    criterion::BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

// ============================================================================
// Max area
// ============================================================================

fn bench_max_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_area");

    for len in SIZES {
        let input = heights(len, SEED);
        group.throughput(Throughput::Elements(len as u64));

        for &strategy in AreaStrategy::ALL {
            if strategy == AreaStrategy::BruteForce && len > BRUTE_FORCE_LIMIT {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &input, |b, input| {
                b.iter(|| max_area::find(black_box(input), strategy));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Longest unique substring
// ============================================================================

fn bench_longest_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_unique");

    for len in SIZES {
        // A 16-letter alphabet keeps runs short, like typical inputs.
        let input = text(len, 16, SEED);
        group.throughput(Throughput::Elements(len as u64));

        for &strategy in SubstringStrategy::ALL {
            // The cubic baseline is only practical on the smallest inputs.
            let limit = match strategy {
                SubstringStrategy::BruteForce => SIZES[1],
                SubstringStrategy::ExpandingSet => BRUTE_FORCE_LIMIT,
                SubstringStrategy::SlidingWindow => usize::MAX,
            };
            if len > limit {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &input, |b, input| {
                b.iter(|| unique_substring::find(black_box(input), strategy));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    strategy_benches,
    bench_two_sum,
    bench_sort_colors,
    bench_max_area,
    bench_longest_unique
);

criterion_main!(strategy_benches);
