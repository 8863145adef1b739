use criterion::{black_box, criterion_group, criterion_main, Criterion};
use console_tetris::core::{GameSnapshot, GameState, Playfield};
use console_tetris::term::{encode_diff_into, FrameBuffer, GameView};
use console_tetris::types::{Cell, Control, ControlState, PieceKind, Rotation, SCREEN_HEIGHT, SCREEN_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick_idle", |b| {
        b.iter(|| {
            if state.is_over() {
                state = GameState::with_seed(12345);
            }
            state.tick(black_box(ControlState::default()));
        })
    });
}

fn bench_tick_soft_drop(c: &mut Criterion) {
    let mut state = GameState::with_seed(777);
    let drop = ControlState::only(Control::SoftDrop);

    c.bench_function("game_tick_soft_drop", |b| {
        b.iter(|| {
            if state.is_over() {
                state = GameState::with_seed(777);
            }
            state.tick(black_box(drop));
            if state.has_pending_clear() {
                state.collapse_cleared_rows();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("mark_and_collapse_4_rows", |b| {
        b.iter(|| {
            let mut field = Playfield::default();
            for y in 13..17 {
                for x in 1..11 {
                    field.set(x, y, Cell::Locked(PieceKind::I));
                }
            }
            let rows = field.mark_full_rows(black_box(13));
            field.collapse_rows(&rows);
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let field = Playfield::default();

    c.bench_function("fits", |b| {
        b.iter(|| field.fits(black_box(PieceKind::T), black_box(Rotation::East), black_box(4), black_box(8)))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::with_seed(1);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), &mut fb);
        })
    });
}

fn bench_encode_diff(c: &mut Criterion) {
    let view = GameView::default();
    let mut state = GameState::with_seed(3);
    let prev = view.render(&state.snapshot());
    for _ in 0..20 {
        state.tick(ControlState::only(Control::SoftDrop));
    }
    let next = view.render(&state.snapshot());
    let mut out = Vec::with_capacity(4096);

    c.bench_function("encode_diff_after_descent", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_soft_drop,
    bench_line_clear,
    bench_fits,
    bench_render,
    bench_encode_diff
);
criterion_main!(benches);
