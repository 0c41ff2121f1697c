use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_breakout::core::Board;
use tui_breakout::term::{encode_frame_into, BoardView};
use tui_breakout::types::GameAction;

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            board.tick();
            black_box(board.take_sounds());
            if !board.in_play() || board.all_bricks_gone() {
                board.apply_action(GameAction::Restart);
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let board = Board::new(12345);
    let view = BoardView::default();
    let mut fb = view.framebuffer();

    c.bench_function("render_board", |b| {
        b.iter(|| {
            view.render_into(black_box(&board), &mut fb);
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let board = Board::new(12345);
    let fb = BoardView::default().render(&board);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_full_frame", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&fb), &mut out).unwrap();
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("reset_game", |b| {
        b.iter(|| {
            board.reset_game();
        })
    });
}

criterion_group!(benches, bench_tick, bench_render, bench_encode, bench_reset);
criterion_main!(benches);
