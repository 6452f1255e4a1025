use crosswing_core::{Board, Digit, Position};
use tinyvec::ArrayVec;

use crate::elimination::Elimination;

/// The X-Wing candidate-elimination technique.
///
/// An X-Wing occurs when a digit's candidates in two rows occupy exactly
/// the same two columns (or, mirrored, two columns sharing the same two
/// rows). The digit must then land on one diagonal of that rectangle, so
/// it can be eliminated from every other cell of the two crossing lines.
///
/// Detection is a pure read-only scan; the eliminations it returns are
/// applied in a separate pass with [`apply_eliminations`]. Keeping the two
/// phases apart means candidate sets are never mutated while still being
/// read, and the output order stays deterministic.
///
/// # Examples
///
/// ```
/// use crosswing_core::Board;
/// use crosswing_solver::{XWing, apply_eliminations};
///
/// let mut board: Board = "\
///     .....9.7.\
///     ..7...9..\
///     9..287..3\
///     .8.154.3.\
///     ...8.3...\
///     .5.967.8.\
///     3..571..6\
///     ..5...1..\
///     .7.3....."
///     .parse()?;
/// board.init_candidates();
///
/// let eliminations = XWing::new().find_eliminations(&board);
/// assert!(apply_eliminations(&mut board, &eliminations));
/// # Ok::<(), crosswing_core::ParseBoardError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct XWing {}

impl XWing {
    /// Creates a new `XWing` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Scans the board and returns all eliminations implied by X-Wing
    /// patterns, given the current candidate sets.
    ///
    /// The scan is deterministic: a full row-based sweep over digits 1-9
    /// in ascending order, then the column-based mirror sweep, with line
    /// pairs visited in ascending index order. Eliminations implied by
    /// more than one confirmed pattern appear once per pattern; the list
    /// is not deduplicated.
    #[must_use]
    pub fn find_eliminations(&self, board: &Board) -> Vec<Elimination> {
        let mut eliminations = Vec::new();

        for digit in Digit::ALL {
            for y1 in 0..9 {
                let cols = candidate_cols(board, y1, digit);
                // exactly two candidate positions make a defining line
                if cols.len() != 2 {
                    continue;
                }
                for y2 in y1 + 1..9 {
                    if candidate_cols(board, y2, digit) != cols {
                        continue;
                    }
                    log::trace!(
                        "row x-wing: {digit} in rows {y1}/{y2}, columns {}/{}",
                        cols[0],
                        cols[1]
                    );
                    for y in 0..9 {
                        if y == y1 || y == y2 {
                            continue;
                        }
                        for &x in &cols {
                            if board.has_candidate(Position::new(x, y), digit) {
                                eliminations.push(Elimination::new(Position::new(x, y), digit));
                            }
                        }
                    }
                }
            }
        }

        for digit in Digit::ALL {
            for x1 in 0..9 {
                let rows = candidate_rows(board, x1, digit);
                if rows.len() != 2 {
                    continue;
                }
                for x2 in x1 + 1..9 {
                    if candidate_rows(board, x2, digit) != rows {
                        continue;
                    }
                    log::trace!(
                        "column x-wing: {digit} in columns {x1}/{x2}, rows {}/{}",
                        rows[0],
                        rows[1]
                    );
                    for x in 0..9 {
                        if x == x1 || x == x2 {
                            continue;
                        }
                        for &y in &rows {
                            if board.has_candidate(Position::new(x, y), digit) {
                                eliminations.push(Elimination::new(Position::new(x, y), digit));
                            }
                        }
                    }
                }
            }
        }

        eliminations
    }
}

/// Columns of row `y` where `digit` is an open-cell candidate, ascending.
fn candidate_cols(board: &Board, y: u8, digit: Digit) -> ArrayVec<[u8; 9]> {
    let mut cols = ArrayVec::new();
    for x in 0..9 {
        if board.has_candidate(Position::new(x, y), digit) {
            cols.push(x);
        }
    }
    cols
}

/// Rows of column `x` where `digit` is an open-cell candidate, ascending.
fn candidate_rows(board: &Board, x: u8, digit: Digit) -> ArrayVec<[u8; 9]> {
    let mut rows = ArrayVec::new();
    for y in 0..9 {
        if board.has_candidate(Position::new(x, y), digit) {
            rows.push(y);
        }
    }
    rows
}

/// Applies a batch of eliminations to the board.
///
/// Each record removes its digit from the cell's candidate set if the cell
/// is open and the digit still present; anything else is a no-op. Returns
/// `true` iff at least one candidate was actually removed, which is how a
/// batch of already-applied duplicates is told apart from real progress.
pub fn apply_eliminations(board: &mut Board, eliminations: &[Elimination]) -> bool {
    let mut changed = false;
    for elimination in eliminations {
        changed |= board.remove_candidate(elimination.pos(), elimination.digit());
    }
    changed
}
