//! Benchmark setup error type.

use amaze_core::SolverError;
use amaze_providers_grid::GridMazeError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated grid text was rejected by the parser.
    #[error("generated grid was rejected: {0}")]
    Grid(#[from] GridMazeError),
    /// Building or running the solver failed.
    #[error("solver failed: {0}")]
    Solver(#[from] SolverError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// A probability outside `0.0..=1.0` was supplied.
    #[error("probability for {context} must lie in 0.0..=1.0")]
    InvalidProbability {
        /// The parameter holding the invalid probability.
        context: &'static str,
    },
    /// The requested grid does not fit in memory addressing limits.
    #[error("grid of {cells_wide}x{cells_high} cells is too large")]
    GridTooLarge {
        /// Requested number of cell columns.
        cells_wide: usize,
        /// Requested number of cell rows.
        cells_high: usize,
    },
    /// A benchmark maze came back without a path.
    #[error("maze `{maze}` has no path from start to goal")]
    Unsolvable {
        /// Name of the maze that could not be solved.
        maze: String,
    },
}
