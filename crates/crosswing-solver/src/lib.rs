//! X-Wing candidate elimination for Sudoku boards.
//!
//! This crate takes a board from [`crosswing_core`], scans it for X-Wing
//! patterns (a digit whose candidates in two rows occupy exactly the same
//! two columns, or the column/row mirror image), applies the implied
//! candidate eliminations, and repeats until a fixpoint is reached. The
//! result carries the final board, the full per-iteration elimination
//! trace, and the terminal state: [`SolveState::Converged`] when a pass
//! changes nothing, or [`SolveState::Contradiction`] when some open cell
//! runs out of candidates.
//!
//! # Examples
//!
//! ```
//! let outcome = crosswing_solver::solve(
//!     "\
//!     .....9.7.\
//!     ..7...9..\
//!     9..287..3\
//!     .8.154.3.\
//!     ...8.3...\
//!     .5.967.8.\
//!     3..571..6\
//!     ..5...1..\
//!     .7.3.....",
//! )?;
//!
//! assert!(outcome.state().is_converged());
//! assert_eq!(outcome.trace().iterations(), 1);
//! assert_eq!(outcome.trace().total_eliminations(), 3);
//! # Ok::<(), crosswing_solver::SolverError>(())
//! ```

pub use self::{elimination::*, error::*, fixpoint::*, x_wing::*};

mod elimination;
mod error;
mod fixpoint;
mod x_wing;

#[cfg(test)]
mod testing;
