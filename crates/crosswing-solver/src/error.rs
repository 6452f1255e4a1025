use crosswing_core::ParseBoardError;

/// Error returned by a solve call.
///
/// A contradicted puzzle is not an error: it is reported as
/// [`SolveState::Contradiction`](crate::SolveState::Contradiction) in the
/// outcome, since it is a property of the puzzle rather than of the call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The board string failed structural validation.
    #[display("malformed board: {_0}")]
    MalformedBoard(ParseBoardError),
}
