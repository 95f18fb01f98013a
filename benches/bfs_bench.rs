use criterion::{criterion_group, criterion_main, Criterion};
use maze_bfs::{Coord, Maze, NoOpObserver, TileKind};
use rand::prelude::*;
use std::hint::black_box;

fn random_maze(size: usize, wall_p: f64, seed: u64) -> Maze {
    let mut rng = StdRng::seed_from_u64(seed);
    let end = Coord::new(size as i32 - 1, size as i32 - 1);
    let mut maze = Maze::open(size, size, Coord::new(0, 0), end).unwrap();
    for coord in maze.coords().collect::<Vec<_>>() {
        if coord != maze.start() && coord != end && rng.gen_bool(wall_p) {
            maze.set_kind(coord, TileKind::Wall).unwrap();
        }
    }
    maze.update();
    maze
}

fn bfs_bench(c: &mut Criterion) {
    for (size, wall_p) in [(64, 0.0), (256, 0.0), (256, 0.3)] {
        let mut maze = random_maze(size, wall_p, 0);
        c.bench_function(format!("bfs {size}x{size}, walls {wall_p}").as_str(), |b| {
            b.iter(|| {
                maze.reset_search();
                black_box(maze.bfs_iterate(&mut NoOpObserver).unwrap());
            })
        });
    }
    let mut maze = random_maze(256, 0.3, 1);
    c.bench_function("components 256x256, walls 0.3", |b| {
        b.iter(|| {
            maze.generate_components();
            black_box(maze.reachable(maze.start(), maze.end()));
        })
    });
}

criterion_group!(benches, bfs_bench);
criterion_main!(benches);
