//! Criterion micro-benchmarks for lattice indexing and neighbour resolution.

use criterion::{criterion_group, criterion_main, Criterion};
use spinlat_lattice::{Direction, Lattice};
use std::hint::black_box;

/// Benchmark: neighbours() on every site of a 32x32x32 cube.
fn bench_neighbours_cube_32(c: &mut Criterion) {
    let lattice = Lattice::from_flags(32, 32, 32, true, true).unwrap();

    c.bench_function("neighbours_cube_32", |b| {
        b.iter(|| {
            for site in lattice.sites() {
                black_box(lattice.neighbours(site));
            }
        });
    });
}

/// Benchmark: single-direction resolution, the inner step of both kernels.
fn bench_neighbour_single_direction(c: &mut Criterion) {
    let lattice = Lattice::from_flags(32, 32, 32, true, false).unwrap();

    c.bench_function("neighbour_xplus_cube_32", |b| {
        b.iter(|| {
            for site in lattice.sites() {
                black_box(lattice.neighbour(site, Direction::XPlus));
            }
        });
    });
}

/// Benchmark: index <-> site round trip over the full cube.
fn bench_index_site(c: &mut Criterion) {
    let lattice = Lattice::from_flags(32, 32, 32, false, false).unwrap();

    c.bench_function("index_site_cube_32", |b| {
        b.iter(|| {
            for idx in 0..lattice.n_sites() {
                black_box(lattice.index(lattice.site(black_box(idx))));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_cube_32,
    bench_neighbour_single_direction,
    bench_index_site
);
criterion_main!(benches);
