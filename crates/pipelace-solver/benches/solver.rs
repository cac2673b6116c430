//! Benchmarks for the backtracking solver.
//!
//! Measures the two search modes on the canonical 5×5 sample board. The
//! counting mode visits the whole configuration space and dominates; the
//! find-one mode short-circuits at the first solution.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pipelace_core::samples;
use pipelace_solver::BacktrackSolver;

fn bench_solve_sample(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle = samples::default_puzzle();

    c.bench_function("solve_sample_5x5", |b| {
        b.iter_batched(
            || puzzle.clone(),
            |mut board| {
                let solved = solver.solve(&mut board);
                hint::black_box((solved, board))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_count_sample(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle = samples::default_puzzle();

    c.bench_function("count_sample_5x5", |b| {
        b.iter(|| hint::black_box(solver.count_solutions(hint::black_box(&puzzle))));
    });
}

criterion_group!(benches, bench_solve_sample, bench_count_sample);
criterion_main!(benches);
