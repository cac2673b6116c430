//! Benchmarks for board generation.
//!
//! Measures the complete generation process (network growth plus
//! orientation scrambling) for a mid-sized flat board and a wrapping
//! board.
//!
//! # Test Data
//!
//! Uses fixed seeds so runs are reproducible while still covering
//! different network shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipelace_generator::{BoardGenerator, BoardSeed, GenerateOptions};

const SEEDS: [&str; 3] = [
    "6d1bd7e93f95a26897cfa6b1f53a8d5bfb2f1f8630af26cf45d2b1e7cf8d1a02",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_flat(c: &mut Criterion) {
    let generator = BoardGenerator::new();
    let options = GenerateOptions::new(8, 8).nb_empty(6).nb_extra(3);

    for (i, text) in SEEDS.into_iter().enumerate() {
        let seed: BoardSeed = text.parse().unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_flat_8x8", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter(|| {
                    generator
                        .generate_with_seed(hint::black_box(seed), &options)
                        .unwrap()
                });
            },
        );
    }
}

fn bench_generate_wrapping(c: &mut Criterion) {
    let generator = BoardGenerator::new();
    let options = GenerateOptions::new(8, 8).wrapping(true).nb_extra(3);

    for (i, text) in SEEDS.into_iter().enumerate() {
        let seed: BoardSeed = text.parse().unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_wrapping_8x8", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter(|| {
                    generator
                        .generate_with_seed(hint::black_box(seed), &options)
                        .unwrap()
                });
            },
        );
    }
}

criterion_group!(benches, bench_generate_flat, bench_generate_wrapping);
criterion_main!(benches);
