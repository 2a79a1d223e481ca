//! Benchmarks for the distance kernels and nearest-candidate search.
//!
//! Tests various scenarios:
//! - String length variations (short, word boundary, long)
//! - Similarity patterns (identical, similar, different)
//! - Character sets (ASCII, Unicode)
//! - Bit-parallel kernels vs the reference DP table
//! - Thread-local, owned and mutex-backed engines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastlev::distance::*;
use fastlev::search::{closest, NearestNeighborFinder};

// ============================================================================
// Test Data Generation
// ============================================================================

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        // Short strings (0-10 chars)
        ("empty", "", ""),
        ("short_identical", "test", "test"),
        ("short_1edit", "test", "best"),
        ("short_different", "abc", "xyz"),
        // Medium strings, single-word kernel
        ("medium_similar", "programming", "programing"),
        ("medium_prefix", "commonprefix_abc", "commonprefix_xyz"),
        ("medium_different", "completely", "different"),
        // Long strings, multi-word kernel
        (
            "long_identical",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumps over the lazy dog",
        ),
        (
            "long_similar",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumped over the lazy dog",
        ),
        (
            "long_different",
            "Pack my box with five dozen liquor jugs",
            "How vexingly quick daft zebras jump",
        ),
        // Unicode strings
        ("unicode_short", "café", "cafe"),
        ("unicode_japanese", "こんにちは世界", "こんにちわ世界"),
        ("unicode_emoji", "Hello 👋 World 🌍", "Hello 👋 World 🌎"),
    ]
}

fn encode(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// ============================================================================
// Distance Benchmarks
// ============================================================================

fn bench_distance_thread_local(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/thread_local");

    for (name, source, target) in generate_test_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

fn bench_distance_owned_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/owned_engine");

    for (name, source, target) in generate_test_pairs() {
        let (s, t) = (encode(source), encode(target));
        group.throughput(Throughput::Elements((s.len() + t.len()) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &(s, t), |b, (s, t)| {
            let mut engine = EditDistanceEngine::new();
            b.iter(|| engine.distance_units(black_box(s), black_box(t)));
        });
    }

    group.finish();
}

fn bench_distance_shared_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/shared_engine");
    let engine = SharedEngine::new();

    for (name, source, target) in generate_test_pairs() {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| engine.distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn bench_myers_vs_dp(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers_vs_dp");

    let test_cases = vec![
        ("short", "test", "best"),
        ("medium", "programming", "programing"),
        (
            "long",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumped over the lazy dog",
        ),
    ];

    for (name, source, target) in test_cases {
        let (s, t) = (encode(source), encode(target));

        group.bench_function(format!("{}/myers", name), |b| {
            let mut engine = EditDistanceEngine::new();
            b.iter(|| engine.distance_units(black_box(&s), black_box(&t)));
        });

        group.bench_function(format!("{}/dp", name), |b| {
            b.iter(|| dp_distance(black_box(&s), black_box(&t)));
        });
    }

    group.finish();
}

// ============================================================================
// Scaling Benchmarks
// ============================================================================

fn bench_string_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/string_length");

    // 31..33 straddle the single-word/multi-word switch
    let lengths = vec![10, 31, 32, 33, 64, 100, 200, 1000];

    for len in lengths {
        let source: Vec<u16> = "abcdefgh".encode_utf16().cycle().take(len).collect();
        let target: Vec<u16> = "hgfedcba".encode_utf16().cycle().take(len).collect();

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("myers", len),
            &(&source, &target),
            |b, (s, t)| {
                let mut engine = EditDistanceEngine::new();
                b.iter(|| engine.distance_units(black_box(s), black_box(t)));
            },
        );

        if len <= 200 {
            group.bench_with_input(
                BenchmarkId::new("dp", len),
                &(&source, &target),
                |b, (s, t)| {
                    b.iter(|| dp_distance(black_box(s), black_box(t)));
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Nearest-candidate Benchmarks
// ============================================================================

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest");

    for size in [10usize, 100, 1000] {
        let words: Vec<String> = (0..size).map(|i| format!("candidate_{:05}", i * 37 % size)).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("thread_local", size), &words, |b, words| {
            b.iter(|| closest(black_box("candidte_00042"), words).unwrap().len());
        });

        group.bench_with_input(BenchmarkId::new("finder", size), &words, |b, words| {
            let mut finder = NearestNeighborFinder::new();
            b.iter(|| finder.closest(black_box("candidte_00042"), words).unwrap().len());
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("par", size), &words, |b, words| {
            b.iter(|| {
                fastlev::search::par_closest(black_box("candidte_00042"), words)
                    .unwrap()
                    .len()
            });
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_distance_thread_local,
    bench_distance_owned_engine,
    bench_distance_shared_engine,
    bench_myers_vs_dp,
    bench_string_length_scaling,
    bench_closest,
);

criterion_main!(benches);
