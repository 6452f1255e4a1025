//! Core data structures for the Crosswing candidate-elimination engine.
//!
//! This crate provides the grid model that the solver operates on:
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`digit_set`]: a compact set of digits, used for cell candidates
//! - [`position`]: board coordinates and house (row/column/box) arithmetic
//! - [`cell`]: the tagged fixed-or-open cell variant
//! - [`board`]: the 9x9 board, including parsing from an 81-character
//!   string and candidate initialization
//!
//! # Examples
//!
//! ```
//! use crosswing_core::{Board, Digit, Position};
//!
//! let mut board: Board = "\
//!     53..7....\
//!     6..195...\
//!     .98....6.\
//!     8...6...3\
//!     4..8.3..1\
//!     7...2...6\
//!     .6....28.\
//!     ...419..5\
//!     ....8..79"
//!     .parse()?;
//! board.init_candidates();
//!
//! // 5 is fixed in the top-left box, so it is no candidate at (2, 0)
//! let candidates = board.candidates_at(Position::new(2, 0)).unwrap();
//! assert!(!candidates.contains(Digit::D5));
//! # Ok::<(), crosswing_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
