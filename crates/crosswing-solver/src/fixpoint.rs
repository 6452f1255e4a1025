use crosswing_core::Board;

use crate::{
    elimination::Elimination,
    error::SolverError,
    x_wing::{XWing, apply_eliminations},
};

/// State of the fixpoint loop.
///
/// The loop starts in `Running` and ends in one of the two terminal
/// states. `Contradiction` is a property of the puzzle, not a failure of
/// the solver, so it is reported here rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveState {
    /// Eliminations are still being found and applied.
    Running,
    /// A detection pass changed nothing; the board is stable.
    Converged,
    /// Some open cell has no candidate left.
    Contradiction,
}

/// The per-iteration elimination record of a solve.
///
/// Each batch holds the eliminations one detection pass produced, in
/// detector order, duplicates included. Only productive iterations (ones
/// that removed at least one candidate) contribute a batch; the final pass
/// that proves convergence does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveTrace {
    batches: Vec<Vec<Elimination>>,
}

impl SolveTrace {
    /// Returns the elimination batches, one per productive iteration.
    #[must_use]
    pub fn batches(&self) -> &[Vec<Elimination>] {
        &self.batches
    }

    /// Returns the number of productive iterations.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.batches.len()
    }

    /// Returns the total number of recorded eliminations across all
    /// iterations, duplicates included.
    #[must_use]
    pub fn total_eliminations(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    /// Returns `true` if any iteration removed a candidate.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.batches.is_empty()
    }

    /// Returns all eliminations with their 0-based iteration index.
    pub fn eliminations(&self) -> impl Iterator<Item = (usize, Elimination)> {
        self.batches
            .iter()
            .enumerate()
            .flat_map(|(i, batch)| batch.iter().map(move |&elimination| (i, elimination)))
    }

    fn push_batch(&mut self, batch: Vec<Elimination>) {
        self.batches.push(batch);
    }
}

/// The result of a solve: final board, trace, and terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    board: Board,
    trace: SolveTrace,
    state: SolveState,
}

impl SolveOutcome {
    /// Returns the board after all eliminations were applied.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the per-iteration elimination trace.
    #[must_use]
    pub fn trace(&self) -> &SolveTrace {
        &self.trace
    }

    /// Returns the terminal state.
    #[must_use]
    pub fn state(&self) -> SolveState {
        self.state
    }
}

/// Drives the X-Wing technique to a fixpoint.
///
/// Each iteration runs one detection pass and applies its full batch of
/// eliminations. The loop ends when a pass changes nothing
/// ([`SolveState::Converged`]) or when an open cell's candidate set
/// becomes empty ([`SolveState::Contradiction`]). Termination is
/// guaranteed: every productive iteration removes at least one of the at
/// most 729 candidates on the board.
///
/// # Examples
///
/// ```
/// use crosswing_core::Board;
/// use crosswing_solver::FixpointSolver;
///
/// let mut board: Board = ".".repeat(81).parse()?;
/// board.init_candidates();
///
/// let (trace, state) = FixpointSolver::new().run(&mut board);
/// assert!(state.is_converged());
/// assert!(!trace.has_progress());
/// # Ok::<(), crosswing_core::ParseBoardError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FixpointSolver {
    technique: XWing,
}

impl FixpointSolver {
    /// Creates a new fixpoint solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            technique: XWing::new(),
        }
    }

    /// Runs one detection+application round.
    ///
    /// Returns the applied batch, or `None` if the pass removed nothing
    /// (either no pattern was found, or every implied elimination had
    /// already been applied).
    pub fn step(&self, board: &mut Board) -> Option<Vec<Elimination>> {
        let eliminations = self.technique.find_eliminations(board);
        apply_eliminations(board, &eliminations).then_some(eliminations)
    }

    /// Runs the loop to a terminal state.
    ///
    /// The board must have its candidates initialized
    /// ([`Board::init_candidates`]). A board that already contains an
    /// empty candidate set is reported as [`SolveState::Contradiction`]
    /// without running a detection pass.
    pub fn run(&self, board: &mut Board) -> (SolveTrace, SolveState) {
        let mut trace = SolveTrace::default();
        if board.has_empty_candidate_cell() {
            return (trace, SolveState::Contradiction);
        }
        loop {
            let Some(batch) = self.step(board) else {
                return (trace, SolveState::Converged);
            };
            log::debug!(
                "iteration {}: {} eliminations, {} candidates left",
                trace.iterations() + 1,
                batch.len(),
                board.candidate_count()
            );
            trace.push_batch(batch);
            if board.has_empty_candidate_cell() {
                return (trace, SolveState::Contradiction);
            }
        }
    }
}

/// Solves a board string with the X-Wing technique.
///
/// Parses the 81-cell string, derives every open cell's candidates, and
/// runs the fixpoint loop. The outcome carries the final board, the full
/// elimination trace, and the terminal state.
///
/// # Errors
///
/// Returns [`SolverError::MalformedBoard`] if the string fails structural
/// validation (length or character set). This is the only failure mode;
/// a contradicted puzzle still produces an outcome.
pub fn solve(board_str: &str) -> Result<SolveOutcome, SolverError> {
    let mut board: Board = board_str.parse()?;
    board.init_candidates();
    let (trace, state) = FixpointSolver::new().run(&mut board);
    Ok(SolveOutcome {
        board,
        trace,
        state,
    })
}

#[cfg(test)]
mod tests {
    use crosswing_core::Digit::*;
    use crosswing_core::{Digit, ParseBoardError, Position};
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{XWING_BOARD, confine_digit_in_row, init_board};

    // Duplicate 8s in row 0; the open cell's column contributes 1 and 9,
    // leaving (7, 0) with no candidate after initialization.
    const CONTRADICTION_BOARD: &str = "\
        8234567.8\n\
        .........\n\
        .........\n\
        .......1.\n\
        .........\n\
        .......9.\n\
        .........\n\
        .........\n\
        .........";

    #[test]
    fn test_known_board_converges_after_one_iteration() {
        let outcome = solve(XWING_BOARD).unwrap();

        assert_eq!(outcome.state(), SolveState::Converged);
        assert_eq!(outcome.trace().iterations(), 1);
        assert_eq!(outcome.trace().total_eliminations(), 3);
        assert_eq!(
            outcome.trace().batches()[0],
            vec![
                Elimination::new(Position::new(2, 0), D3),
                Elimination::new(Position::new(8, 3), D7),
                Elimination::new(Position::new(8, 4), D7),
            ]
        );
        assert_eq!(outcome.board().candidate_count(), 194);
    }

    #[test]
    fn test_trace_eliminations_are_indexed_by_iteration() {
        let outcome = solve(XWING_BOARD).unwrap();
        let flattened: Vec<_> = outcome.trace().eliminations().collect();
        assert_eq!(flattened.len(), 3);
        assert!(flattened.iter().all(|&(iteration, _)| iteration == 0));
    }

    #[test]
    fn test_solved_board_converges_immediately() {
        let solved = "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179";
        let outcome = solve(solved).unwrap();

        assert_eq!(outcome.state(), SolveState::Converged);
        assert_eq!(outcome.trace().iterations(), 0);
        assert!(!outcome.trace().has_progress());
        assert!(outcome.board().is_fully_fixed());
        assert_eq!(outcome.board().to_line_string(), solved);
    }

    #[test]
    fn test_malformed_board_is_an_error() {
        let err = solve(&".".repeat(80)).unwrap_err();
        assert_eq!(
            err,
            SolverError::MalformedBoard(ParseBoardError::BadLength { len: 80 })
        );

        let mut with_letter = ".".repeat(81);
        with_letter.replace_range(0..1, "a");
        assert!(matches!(
            solve(&with_letter),
            Err(SolverError::MalformedBoard(
                ParseBoardError::InvalidCharacter { ch: 'a', index: 0 }
            ))
        ));
    }

    #[test]
    fn test_contradiction_at_initialization() {
        let outcome = solve(CONTRADICTION_BOARD).unwrap();

        assert_eq!(outcome.state(), SolveState::Contradiction);
        assert_eq!(outcome.trace().iterations(), 0);
        assert_eq!(
            outcome.board().candidates_at(Position::new(7, 0)),
            Some(crosswing_core::DigitSet::EMPTY)
        );
    }

    #[test]
    fn test_contradiction_during_solving() {
        // An X-Wing on digit 1 (rows 0 and 4, columns {1, 7}) wipes out a
        // cell that was down to that single candidate.
        let mut board = Board::new();
        confine_digit_in_row(&mut board, 0, D1, &[1, 7]);
        confine_digit_in_row(&mut board, 4, D1, &[1, 7]);
        for digit in Digit::ALL {
            if digit != D1 {
                board.remove_candidate(Position::new(1, 2), digit);
            }
        }

        let (trace, state) = FixpointSolver::new().run(&mut board);
        assert_eq!(state, SolveState::Contradiction);
        assert_eq!(trace.iterations(), 1);
        assert!(board.has_empty_candidate_cell());
    }

    #[test]
    fn test_rerunning_a_converged_board_changes_nothing() {
        let outcome = solve(XWING_BOARD).unwrap();
        let mut board = outcome.board().clone();

        let (trace, state) = FixpointSolver::new().run(&mut board);
        assert_eq!(state, SolveState::Converged);
        assert_eq!(trace.iterations(), 0);
        assert_eq!(&board, outcome.board());
    }

    #[test]
    fn test_solving_is_deterministic() {
        let a = solve(XWING_BOARD).unwrap();
        let b = solve(XWING_BOARD).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_is_monotonic_on_known_board() {
        let mut board = init_board(XWING_BOARD);
        let solver = FixpointSolver::new();

        let mut previous = board.clone();
        while let Some(batch) = solver.step(&mut board) {
            assert!(!batch.is_empty());
            assert!(board.candidate_count() < previous.candidate_count());
            for (pos, cell) in board.cells() {
                let Some(now) = cell.candidates() else { continue };
                let before = previous.candidates_at(pos).unwrap();
                assert_eq!(before.intersection(now), now, "candidates regrew at {pos:?}");
            }
            previous = board.clone();
        }
    }

    proptest! {
        #[test]
        fn solve_never_panics_and_is_deterministic(s in "[.0-9]{81}") {
            let a = solve(&s).unwrap();
            let b = solve(&s).unwrap();
            prop_assert_eq!(&a, &b);
        }

        #[test]
        fn converged_outcomes_are_stable(s in "[.0-9]{81}") {
            let outcome = solve(&s).unwrap();
            if outcome.state().is_converged() {
                let mut board = outcome.board().clone();
                let (trace, state) = FixpointSolver::new().run(&mut board);
                prop_assert!(state.is_converged());
                prop_assert_eq!(trace.iterations(), 0);
                prop_assert_eq!(&board, outcome.board());
            }
        }
    }
}
