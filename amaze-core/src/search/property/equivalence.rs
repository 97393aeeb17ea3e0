//! Property 1: agreement with the sequential search.
//!
//! For any generated maze and any fork quota, the concurrent solver finds a
//! path exactly when the sequential search does, and repeated runs agree.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{NoProgress, SolverBuilder, depth_first_search};

use super::types::{FORK_QUOTAS, MazeFixture, PROPERTY_THREADS};

/// Number of times each fork quota is re-run to expose scheduling races.
const REPETITIONS: usize = 3;

pub(super) fn run_outcome_equivalence_property(fixture: &MazeFixture) -> TestCaseResult {
    let oracle = depth_first_search(&fixture.maze, fixture.start, &NoProgress).map_err(|e| {
        TestCaseError::fail(format!(
            "sequential search failed: {e} (shape={:?})",
            fixture.shape
        ))
    })?;

    for fork_after in FORK_QUOTAS {
        let solver = SolverBuilder::new()
            .with_fork_after(fork_after)
            .with_threads(PROPERTY_THREADS)
            .build()
            .map_err(|e| TestCaseError::fail(format!("solver build failed: {e}")))?;

        for attempt in 0..REPETITIONS {
            let outcome = solver.solve(&fixture.maze, fixture.start).map_err(|e| {
                TestCaseError::fail(format!(
                    "solve failed: {e} (shape={:?}, fork_after={fork_after}, attempt={attempt})",
                    fixture.shape
                ))
            })?;
            if outcome.is_some() != oracle.is_some() {
                return Err(TestCaseError::fail(format!(
                    "outcome mismatch: concurrent found={}, sequential found={} \
                     (shape={:?}, fork_after={fork_after}, attempt={attempt}, nodes={})",
                    outcome.is_some(),
                    oracle.is_some(),
                    fixture.shape,
                    fixture.maze.node_count(),
                )));
            }
        }
    }
    Ok(())
}
