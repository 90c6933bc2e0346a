use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minesweep_core::*;
use std::hint::black_box;

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        group.bench_function(format!("{difficulty:?}"), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(Game::with_seed(difficulty.config(), seed))
            })
        });
    }
    group.finish();
}

fn open_empty_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for size in [64, 256, 1024] {
        let layout = MineLayout::from_mine_coords((size, size), &[(0, 0)]).unwrap();
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || Game::from_layout(&layout),
                |mut game| black_box(game.open((size - 1, size - 1))),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generate, open_empty_board);
criterion_main!(benches);
