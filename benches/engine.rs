use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockgrid::{ColorId, GameEngine, Grid, Piece, PieceId, ShapeKind, GRID_SIZE};

fn bench_can_place(c: &mut Criterion) {
    let engine = GameEngine::new(12345);
    let piece = engine.queue()[0];

    c.bench_function("can_place", |b| {
        b.iter(|| engine.can_place(black_box(&piece), black_box(4), black_box(4)))
    });
}

fn bench_place_and_clear(c: &mut Criterion) {
    // Row 0 complete except one cell; each placement clears a line.
    let mut grid = Grid::new();
    for col in 0..9 {
        grid.set(0, col, Some(ColorId::new(1)));
    }
    let plug = Piece::new(PieceId::new(0), ShapeKind::Dot, ColorId::new(0));
    let engine = GameEngine::from_parts(grid, [plug], 1);

    c.bench_function("place_and_clear_line", |b| {
        b.iter(|| {
            let mut fork = engine.clone();
            fork.place(black_box(plug.id), 0, 9).unwrap()
        })
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    // Checkerboard grid: the scan visits every anchor and fails.
    let mut grid = Grid::new();
    for row in 0..GRID_SIZE as i8 {
        for col in 0..GRID_SIZE as i8 {
            if (row + col) % 2 == 0 {
                grid.set(row, col, Some(ColorId::new(3)));
            }
        }
    }
    let pieces = [
        Piece::new(PieceId::new(0), ShapeKind::Square, ColorId::new(0)),
        Piece::new(PieceId::new(1), ShapeKind::RowTwo, ColorId::new(1)),
        Piece::new(PieceId::new(2), ShapeKind::Tee, ColorId::new(2)),
    ];
    let engine = GameEngine::from_parts(grid, pieces, 1);

    c.bench_function("game_over_exhaustive_scan", |b| {
        b.iter(|| black_box(&engine).check_game_over())
    });
}

fn bench_engine_clone(c: &mut Criterion) {
    let engine = GameEngine::new(12345);

    c.bench_function("engine_clone", |b| b.iter(|| black_box(&engine).clone()));
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = GameEngine::new(12345);

    c.bench_function("snapshot", |b| b.iter(|| black_box(&engine).snapshot()));
}

criterion_group!(
    benches,
    bench_can_place,
    bench_place_and_clear,
    bench_game_over_scan,
    bench_engine_clone,
    bench_snapshot
);
criterion_main!(benches);
