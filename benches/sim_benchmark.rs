//! Benchmarks for full combat runs and the BFS hot path.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use skirmish::game::{DistanceField, Occupancy, parse_scenario};
use skirmish::{Coord, Simulation};

const MAP: &str = "\
#######
#.G...#
#...EG#
#.#.#G#
#..G#E#
#.....#
#######";

const LARGE_MAP: &str = "\
#########
#G......#
#.E.#...#
#..##..G#
#...##..#
#...#...#
#.G...G.#
#.....G.#
#########";

fn bench_full_combat(c: &mut Criterion) {
    c.bench_function("full_combat_7x7", |b| {
        b.iter(|| {
            let mut sim = Simulation::parse(black_box(MAP)).expect("fixture parses");
            black_box(sim.run())
        });
    });

    c.bench_function("full_combat_9x9", |b| {
        b.iter(|| {
            let mut sim = Simulation::parse(black_box(LARGE_MAP)).expect("fixture parses");
            black_box(sim.run())
        });
    });
}

fn bench_distance_field(c: &mut Criterion) {
    let scenario = parse_scenario(LARGE_MAP).expect("fixture parses");
    let occupancy = Occupancy::of(&scenario.grid, &scenario.units);
    let start = Coord::new(2, 2);

    c.bench_function("distance_field_9x9", |b| {
        b.iter(|| {
            black_box(DistanceField::compute(
                black_box(&scenario.grid),
                black_box(&occupancy),
                start,
            ))
        });
    });
}

criterion_group!(benches, bench_full_combat, bench_distance_field);
criterion_main!(benches);
