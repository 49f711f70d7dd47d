use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use frog_pathfinding::{GreedySolver, Pond, PondSolver, Terrain, UniquePriorityQueue};
use grid_util::point::Point;
use pond_scenarios::get_scenarios;
use rand::prelude::*;
use std::hint::black_box;

fn random_pond(n: i32, rng: &mut StdRng) -> Pond {
    let mut pond = Pond::new();
    for y in 0..n {
        for x in 0..n {
            let terrain = match rng.gen_range(0..10) {
                0 => Terrain::Mud,
                1 => Terrain::Alligator,
                2 | 3 => Terrain::Reeds,
                4 | 5 => Terrain::LilyPad,
                6 => Terrain::Food {
                    flies: rng.gen_range(1..=3),
                },
                _ => Terrain::Water,
            };
            pond.insert(Point::new(x, y), terrain);
        }
    }
    pond.insert(Point::new(0, 0), Terrain::Start);
    pond.insert(Point::new(n - 1, n - 1), Terrain::End);
    pond
}

fn scenario_bench(c: &mut Criterion) {
    let solver = GreedySolver::new();
    for (map, scenario) in get_scenarios() {
        let pond: Pond = map.parse().expect("Could not parse map");
        c.bench_function(format!("scenario {}", scenario.map).as_str(), |b| {
            b.iter_batched(
                || pond.clone(),
                |mut pond| black_box(solver.find_path(&mut pond)),
                BatchSize::SmallInput,
            )
        });
    }
}

fn random_bench(c: &mut Criterion) {
    let solver = GreedySolver::new();
    let mut rng = StdRng::seed_from_u64(0);
    for n in [16, 64] {
        let ponds: Vec<Pond> = (0..32).map(|_| random_pond(n, &mut rng)).collect();
        c.bench_function(format!("random {n}x{n}").as_str(), |b| {
            b.iter_batched(
                || ponds.clone(),
                |ponds| {
                    for mut pond in ponds {
                        black_box(solver.find_path(&mut pond));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn queue_bench(c: &mut Criterion) {
    c.bench_function("queue add 18 candidates", |b| {
        b.iter(|| {
            let mut queue = UniquePriorityQueue::new();
            for i in 0..18u32 {
                queue.add(i, ((i * 7) % 11) as f64 * 0.5);
            }
            black_box(queue.peek().ok().copied())
        })
    });
}

criterion_group!(benches, scenario_bench, random_bench, queue_bench);
criterion_main!(benches);
