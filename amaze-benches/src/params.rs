//! Benchmark parameter types.

use std::fmt;

/// Parameters for one solver benchmark run.
#[derive(Clone, Debug)]
pub struct SolveBenchParams {
    /// Number of maze cells along each side of the grid.
    pub cells: usize,
    /// Fork quota handed to the solver.
    pub fork_after: i64,
}

impl fmt::Display for SolveBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cells={},fork_after={}", self.cells, self.fork_after)
    }
}
