//! The 9x9 board: parsing, candidate initialization, and bookkeeping.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, position::Position};

/// Error parsing a board string.
///
/// Only the structural shape of the input is validated: length after
/// whitespace removal and the character set. Puzzle legality (duplicate
/// digits in a row, column, or box) is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 81 cells.
    #[display("board must have 81 cells, got {len}")]
    BadLength {
        /// Number of cells found after whitespace removal.
        len: usize,
    },
    /// The input contained a character outside `.`, `0`-`9`.
    #[display("invalid character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its cell index (0-80) after whitespace removal.
        index: usize,
    },
}

/// A 9x9 Sudoku board of [`Cell`]s, stored row-major.
///
/// A board is created by parsing an 81-character string (see the
/// [`FromStr`](std::str::FromStr) impl), its open-cell candidates are derived once
/// with [`init_candidates`](Self::init_candidates), and from then on it is
/// only ever narrowed by candidate removals. It is owned exclusively by the
/// running solve call; nothing here is shared or global.
///
/// # Examples
///
/// ```
/// use crosswing_core::{Board, Digit, Position};
///
/// let mut board: Board = "\
///     4........\
///     .........\
///     .........\
///     .........\
///     .........\
///     .........\
///     .........\
///     .........\
///     ........4"
///     .parse()?;
/// board.init_candidates();
///
/// // 4 is fixed at (0, 0), so it is no candidate elsewhere in row 0
/// assert!(!board.has_candidate(Position::new(5, 0), Digit::D4));
/// assert!(board.has_candidate(Position::new(5, 1), Digit::D4));
/// # Ok::<(), crosswing_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board of open cells with every candidate available.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Open(DigitSet::FULL); 81],
        }
    }

    /// Returns the cell at a position.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns the candidate set of the cell, or `None` if it is fixed.
    #[must_use]
    pub const fn candidates_at(&self, pos: Position) -> Option<DigitSet> {
        self.cell(pos).candidates()
    }

    /// Returns `true` if the cell is open and has the digit as a candidate.
    #[must_use]
    pub const fn has_candidate(&self, pos: Position, digit: Digit) -> bool {
        self.cell(pos).has_candidate(digit)
    }

    /// Removes a digit from the cell's candidate set.
    ///
    /// Returns `true` if the candidate was present and is now removed.
    /// Removing an absent candidate, or targeting a fixed cell, is a no-op.
    pub const fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        match &mut self.cells[pos.index()] {
            Cell::Open(candidates) => candidates.remove(digit),
            Cell::Fixed(_) => false,
        }
    }

    /// Derives every open cell's candidates from the fixed digits in its
    /// row, column, and box.
    ///
    /// This is a one-shot pass over a freshly parsed board. It never needs
    /// to run again during solving: eliminations only remove candidates and
    /// never place digits, so the derivation stays valid.
    pub fn init_candidates(&mut self) {
        for pos in Position::all() {
            if self.cell(pos).is_fixed() {
                continue;
            }
            let used = self.fixed_in_row(pos.y())
                | self.fixed_in_col(pos.x())
                | self.fixed_in_box(pos.box_index());
            self.cells[pos.index()] = Cell::Open(DigitSet::FULL.difference(used));
        }
    }

    /// Returns the digits fixed in row `y`.
    #[must_use]
    pub fn fixed_in_row(&self, y: u8) -> DigitSet {
        (0..9).filter_map(|x| self.cell(Position::new(x, y)).fixed_digit()).collect()
    }

    /// Returns the digits fixed in column `x`.
    #[must_use]
    pub fn fixed_in_col(&self, x: u8) -> DigitSet {
        (0..9).filter_map(|y| self.cell(Position::new(x, y)).fixed_digit()).collect()
    }

    /// Returns the digits fixed in the box with the given index.
    #[must_use]
    pub fn fixed_in_box(&self, box_index: u8) -> DigitSet {
        (0..9)
            .filter_map(|i| self.cell(Position::from_box(box_index, i)).fixed_digit())
            .collect()
    }

    /// Returns all cells with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> {
        Position::all().map(|pos| (pos, self.cell(pos)))
    }

    /// Returns the total number of candidates over all open cells.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.cells
            .iter()
            .filter_map(|cell| cell.candidates())
            .map(DigitSet::len)
            .sum()
    }

    /// Returns `true` if some open cell has no candidate left.
    #[must_use]
    pub fn has_empty_candidate_cell(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| matches!(cell, Cell::Open(candidates) if candidates.is_empty()))
    }

    /// Returns `true` if every cell holds a placed digit.
    #[must_use]
    pub fn is_fully_fixed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_fixed())
    }

    /// Returns the 81-character row-major form, `.` for open cells.
    ///
    /// For a fully fixed board the result parses back to an equal board.
    #[must_use]
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.fixed_digit() {
                Some(digit) => char::from(b'0' + digit.value()),
                None => '.',
            })
            .collect()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses an 81-cell board string, row-major.
    ///
    /// ASCII whitespace is stripped first. `.` and `0` denote open cells;
    /// `1`-`9` denote fixed digits. Open cells are given the full candidate
    /// set as a placeholder; call [`Board::init_candidates`] to narrow them.
    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let stripped: Vec<char> = s.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
        if stripped.len() != 81 {
            return Err(ParseBoardError::BadLength { len: stripped.len() });
        }

        let mut board = Self::new();
        for (index, ch) in stripped.into_iter().enumerate() {
            board.cells[index] = match ch {
                '.' | '0' => Cell::Open(DigitSet::FULL),
                _ => {
                    let digit = ch
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value)
                        .ok_or(ParseBoardError::InvalidCharacter { ch, index })?;
                    Cell::Fixed(digit)
                }
            };
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line_string())
    }
}
