//! Command-line interface orchestration for the amaze solver.
//!
//! The `solve` command loads a text grid maze and runs the fork/join search
//! over it.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, SolveCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
