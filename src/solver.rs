//! Boundary to the external cube solver
//!
//! The solving search itself lives outside this crate. A solver takes the
//! 54-letter state string and returns a move sequence, or reports that the
//! state is invalid or already solved.

use std::fmt;

use log::info;

use crate::error::SolveError;
use crate::scan::CubeStateBuilder;
use crate::Result;

/// External solver for complete cube states
pub trait CubeSolver {
    /// Solve a state string in facelet order U, R, F, D, L, B
    fn solve(&self, state: &str) -> std::result::Result<Solution, SolveError>;
}

/// Move sequence returned by a solver
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub moves: Vec<String>,
}

impl Solution {
    /// Parse a whitespace separated move sequence, e.g. `"R U R' U2"`
    pub fn parse(algorithm: &str) -> Self {
        Self {
            moves: algorithm.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.moves.join(" "))
    }
}

/// Hand a completed scan to the solver
///
/// # Errors
///
/// Returns `ScanError::IncompleteScan` if faces are missing, or
/// `ScanError::Solver` with the solver's own failure kind.
pub fn solve_scan<S>(solver: &S, builder: &CubeStateBuilder) -> Result<Solution>
where
    S: CubeSolver + ?Sized,
{
    let state = builder.state_string()?;
    let solution = solver.solve(&state)?;
    info!("solution found in {} moves", solution.len());
    Ok(solution)
}
