//! Micro-benchmarks for X-Wing detection and the fixpoint loop.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench x_wing
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use crosswing_core::Board;
use crosswing_solver::{FixpointSolver, XWing};

const XWING_BOARD: &str = "\
    .....9.7.\
    ..7...9..\
    9..287..3\
    .8.154.3.\
    ...8.3...\
    .5.967.8.\
    3..571..6\
    ..5...1..\
    .7.3.....";

fn xwing_board() -> Board {
    let mut board: Board = XWING_BOARD.parse().unwrap();
    board.init_candidates();
    board
}

fn bench_find_eliminations(c: &mut Criterion) {
    let boards = [("x_wing", xwing_board()), ("open", Board::new())];
    let technique = XWing::new();

    for (param, board) in boards {
        c.bench_with_input(
            BenchmarkId::new("find_eliminations", param),
            &board,
            |b, board| {
                b.iter(|| hint::black_box(technique.find_eliminations(hint::black_box(board))));
            },
        );
    }
}

fn bench_fixpoint_run(c: &mut Criterion) {
    let board = xwing_board();
    let solver = FixpointSolver::new();

    c.bench_with_input(
        BenchmarkId::new("fixpoint_run", "x_wing"),
        &board,
        |b, board| {
            b.iter_batched_ref(
                || hint::black_box(board.clone()),
                |board| {
                    let (trace, state) = solver.run(board);
                    hint::black_box((trace, state))
                },
                BatchSize::SmallInput,
            );
        },
    );
}

criterion_group!(benches, bench_find_eliminations, bench_fixpoint_run);
criterion_main!(benches);
