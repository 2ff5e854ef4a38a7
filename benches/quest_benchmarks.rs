//! Detective Quest Benchmarks
//!
//! Benchmarks for the data structures behind the game, using Criterion.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use detective_quest_lib::data_structures::{ClueIndex, KeywordMatcher, SuspectLookup};
use std::time::Duration;

/// Deterministic clue texts in scrambled order.
fn clues(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Pista {:08} encontrada no cômodo", (i * 7919) % (count * 13 + 1)))
        .collect()
}

/// Benchmark the clue index
fn bench_clue_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("clue_index");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let texts = clues(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &texts, |b, texts| {
            b.iter(|| {
                let mut index = ClueIndex::new();
                for text in texts {
                    index.insert(black_box(text));
                }
                index
            });
        });

        let mut index = ClueIndex::new();
        for text in &texts {
            index.insert(text);
        }
        group.bench_with_input(BenchmarkId::new("in_order", size), &index, |b, index| {
            b.iter(|| index.in_order().map(str::len).sum::<usize>());
        });
    }

    group.finish();
}

/// Benchmark the suspect lookup table
fn bench_suspect_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("suspect_lookup");
    group.measurement_time(Duration::from_secs(2));

    for size in [100, 1000].iter() {
        let texts = clues(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &texts, |b, texts| {
            b.iter_batched(
                SuspectLookup::new,
                |mut table| {
                    for text in texts {
                        table.insert(text.as_str(), "Carlos");
                    }
                    table
                },
                BatchSize::SmallInput,
            );
        });

        let mut table = SuspectLookup::new();
        for text in &texts {
            table.insert(text.as_str(), "Carlos");
        }
        group.bench_with_input(BenchmarkId::new("lookup", size), &texts, |b, texts| {
            b.iter(|| {
                texts
                    .iter()
                    .filter(|text| table.lookup(black_box(text)).is_some())
                    .count()
            });
        });
    }

    group.finish();
}

/// Benchmark keyword matching against mansion-sized clues
fn bench_keyword_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyword_matcher");
    let matcher = KeywordMatcher::new("sapatos enlameados");
    let hit = "Um par de sapatos enlameados na entrada (aponta para Carlos).";
    let miss = "Uma garrafa de vinho tinto de safra rara, quase vazia (aponta para Alfredo).";

    group.bench_function("hit", |b| b.iter(|| matcher.find(black_box(hit))));
    group.bench_function("miss", |b| b.iter(|| matcher.find(black_box(miss))));

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02);
    targets = bench_clue_index, bench_suspect_lookup, bench_keyword_matcher
}

criterion_main!(benches);
