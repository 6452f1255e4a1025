//! Test utilities shared by the solver tests.

use crosswing_core::{Board, Digit, Position};

/// The board from the bundled demo: converges after one X-Wing pass.
pub(crate) const XWING_BOARD: &str = "\
    .....9.7.\n\
    ..7...9..\n\
    9..287..3\n\
    .8.154.3.\n\
    ...8.3...\n\
    .5.967.8.\n\
    3..571..6\n\
    ..5...1..\n\
    .7.3.....";

/// Parses a board string and initializes its candidates.
///
/// # Panics
///
/// Panics if the string cannot be parsed.
#[track_caller]
pub(crate) fn init_board(s: &str) -> Board {
    let mut board: Board = s.parse().unwrap();
    board.init_candidates();
    board
}

/// Removes `digit` from every cell of row `y` except the given columns.
///
/// Used to sculpt defining lines for pattern tests on an all-open board.
pub(crate) fn confine_digit_in_row(board: &mut Board, y: u8, digit: Digit, cols: &[u8]) {
    for x in 0..9 {
        if !cols.contains(&x) {
            board.remove_candidate(Position::new(x, y), digit);
        }
    }
}

/// Removes `digit` from every cell of column `x` except the given rows.
pub(crate) fn confine_digit_in_col(board: &mut Board, x: u8, digit: Digit, rows: &[u8]) {
    for y in 0..9 {
        if !rows.contains(&y) {
            board.remove_candidate(Position::new(x, y), digit);
        }
    }
}
