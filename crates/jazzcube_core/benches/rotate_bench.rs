#![allow(missing_docs, unused_crate_dependencies)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jazzcube_core::{Cube, Dimensions, Face, Move, ScrambleParams};

fn criterion_benchmark(c: &mut Criterion) {
    for size in [3, 7, 17, 33] {
        let dims = Dimensions::cube(size).unwrap();

        c.bench_with_input(BenchmarkId::new("outer_turn", size), &dims, |b, &dims| {
            let mut cube = Cube::new(dims);
            b.iter(|| cube.apply(Move::cw(Face::R)).unwrap());
        });

        c.bench_with_input(BenchmarkId::new("middle_turn", size), &dims, |b, &dims| {
            let mut cube = Cube::new(dims);
            let mv = Move::new(Face::U, size / 2, false);
            b.iter(|| cube.apply(mv).unwrap());
        });

        c.bench_with_input(BenchmarkId::new("scramble_and_undo", size), &dims, |b, &dims| {
            let params = ScrambleParams::with_seed(dims.default_scramble_length(), "bench");
            b.iter_batched(
                || Cube::new(dims),
                |mut cube| {
                    cube.scramble_with(&params);
                    cube.finish_scramble().unwrap();
                    while !cube.history().is_empty() {
                        cube.solve_step().unwrap();
                    }
                    cube
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
