//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// Using an enum rather than a bare `u8` keeps out-of-range values
/// unrepresentable; every consumer can branch on the nine variants
/// exhaustively.
///
/// # Examples
///
/// ```
/// use crosswing_core::Digit;
///
/// let digit = Digit::D7;
/// assert_eq!(digit.value(), 7);
/// assert_eq!(Digit::try_from_value(7), Some(digit));
/// assert_eq!(Digit::try_from_value(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits from 1 to 9, in ascending order.
    ///
    /// The order is relied upon by callers that need deterministic
    /// digit-major iteration.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9, or `None` otherwise.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use
    /// [`try_from_value`](Self::try_from_value) for untrusted input.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("invalid digit value: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
