//! The fixed-or-open cell variant.

use crate::{digit::Digit, digit_set::DigitSet};

/// A single board cell: either a placed digit or a set of candidates.
///
/// The two states are an explicit tagged variant so that every scan over
/// the board branches on them exhaustively; candidate operations cannot be
/// applied to a fixed cell by construction. An `Open` cell with an empty
/// candidate set is a valid (contradicted) state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A digit already placed on the board.
    Fixed(Digit),
    /// An unsolved cell and the digits not yet excluded for it.
    Open(DigitSet),
}

impl Cell {
    /// Returns `true` if the cell holds a placed digit.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Returns the placed digit, or `None` for an open cell.
    #[must_use]
    pub const fn fixed_digit(self) -> Option<Digit> {
        match self {
            Self::Fixed(digit) => Some(digit),
            Self::Open(_) => None,
        }
    }

    /// Returns the candidate set, or `None` for a fixed cell.
    #[must_use]
    pub const fn candidates(self) -> Option<DigitSet> {
        match self {
            Self::Fixed(_) => None,
            Self::Open(candidates) => Some(candidates),
        }
    }

    /// Returns `true` if the cell is open and has the digit as a candidate.
    ///
    /// A fixed cell has no candidates, whatever its digit.
    #[must_use]
    pub const fn has_candidate(self, digit: Digit) -> bool {
        match self {
            Self::Fixed(_) => false,
            Self::Open(candidates) => candidates.contains(digit),
        }
    }
}
