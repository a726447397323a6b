//! Criterion micro-benchmarks for lattice construction and point generation.

use criterion::{criterion_group, criterion_main, Criterion};
use rips_bench::{reference_lattice, stress_lattice};
use rips_core::WorkerPool;
use rips_lattice::LatticeIndex;
use rips_process::PointGenerator;
use std::hint::black_box;

fn bench_lattice_build(c: &mut Criterion) {
    c.bench_function("lattice_build_60x60", |b| {
        b.iter(|| {
            let lattice = LatticeIndex::build(vec![0..60, 0..60]).unwrap();
            black_box(lattice.cell_count());
        });
    });
}

fn bench_neighborhoods(c: &mut Criterion) {
    let lattice = reference_lattice();
    c.bench_function("neighborhood_r2_all_cells", |b| {
        b.iter(|| {
            let mut total = 0;
            for cell in lattice.cells() {
                total += lattice.neighborhood(cell, 2).len();
            }
            black_box(total);
        });
    });
}

fn bench_generation(c: &mut Criterion) {
    let lattice = stress_lattice();
    for (name, pool) in [
        ("generate_60x60_serial", WorkerPool::serial()),
        ("generate_60x60_auto", WorkerPool::auto()),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let result = PointGenerator::simple(&lattice, 4.0)
                    .unwrap()
                    .seed(42)
                    .pool(pool)
                    .generate()
                    .unwrap();
                black_box(result.all().len());
            });
        });
    }
}

criterion_group!(
    benches,
    bench_lattice_build,
    bench_neighborhoods,
    bench_generation
);
criterion_main!(benches);
