use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::puzzle2048::{Direction, Grid, apply_move, compact_line, is_game_over, spawn_tile};

fn mid_game_grid() -> Grid {
    Grid::from_rows([
        [2, 2, 4, 8],
        [0, 4, 4, 16],
        [2, 0, 32, 32],
        [128, 64, 0, 2],
    ])
}

fn bench_compact_line() {
    for line in [[2, 2, 2, 2], [0, 2, 0, 2], [4, 4, 8, 8], [2, 4, 8, 16]] {
        black_box(compact_line(black_box(line)));
    }
}

fn bench_every_direction() {
    let grid = mid_game_grid();
    let mut session_rng = SessionRng::new(42);
    for direction in Direction::ALL {
        black_box(apply_move(&grid, direction, &mut session_rng));
    }
}

fn bench_random_game() {
    let mut session_rng = SessionRng::new(7);
    let mut grid = Grid::empty();
    spawn_tile(&mut grid, &mut session_rng);
    spawn_tile(&mut grid, &mut session_rng);
    let mut moves = 0;
    while !is_game_over(&grid) && moves < 2000 {
        let direction = Direction::ALL[session_rng.random_range(0..4)];
        grid = apply_move(&grid, direction, &mut session_rng).grid;
        moves += 1;
    }
    black_box(grid);
}

fn grid_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("compact_line", |b| {
        b.iter(bench_compact_line)
    });

    group.bench_function("every_direction", |b| {
        b.iter(bench_every_direction)
    });

    group.bench_function("random_game", |b| {
        b.iter(bench_random_game)
    });

    group.finish();
}

criterion_group!(benches, grid_bench);
criterion_main!(benches);
