//! Criterion benchmarks for `chancap`.
//!
//! Covers the two regimes that matter in practice: tiny textbook
//! channels that converge in a handful of iterations, and denser
//! matrices where the per-iteration O(m*n) work dominates.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chancap::{channels, BlahutArimoto};

/// Deterministic row-stochastic matrix for the dense benchmark.
fn dense_channel(m: usize, n: usize) -> Vec<f64> {
    let mut state = 31415u64;
    let mut next_uniform = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let mut p = vec![0.0; m * n];
    for row in p.chunks_mut(n) {
        for x in row.iter_mut() {
            *x = 0.05 + next_uniform();
        }
        let s: f64 = row.iter().sum();
        for x in row.iter_mut() {
            *x /= s;
        }
    }
    p
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("blahut_arimoto");
    let solver = BlahutArimoto::default();

    for (name, e) in [("e_010", 0.1), ("e_030", 0.3)] {
        let p = channels::binary_symmetric(e).unwrap();
        group.bench_with_input(BenchmarkId::new("binary_symmetric", name), &p, |b, p| {
            b.iter(|| black_box(solver.solve(black_box(p), 2, 2).unwrap()));
        });
    }

    for (m, n) in [(8, 8), (16, 16), (32, 64)] {
        let p = dense_channel(m, n);
        group.bench_with_input(
            BenchmarkId::new("dense", format!("{m}x{n}")),
            &p,
            |b, p| {
                b.iter(|| black_box(solver.solve(black_box(p), m, n).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
