//! Property 2: structural invariants of search results.
//!
//! Returned paths must be valid walks from the start to a goal. A search
//! that finds nothing must have claimed exactly the reachable nodes, and
//! every claimed node must have been reported to progress exactly once.

use std::collections::{BTreeSet, HashMap};

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Maze, NodeId, SolverBuilder, test_utils::RecordingProgress};

use super::types::{FORK_QUOTAS, MazeFixture, PROPERTY_THREADS};

pub(super) fn run_structural_invariants_property(fixture: &MazeFixture) -> TestCaseResult {
    let reachable = reachable_from(fixture)?;

    for fork_after in FORK_QUOTAS {
        let solver = SolverBuilder::new()
            .with_fork_after(fork_after)
            .with_threads(PROPERTY_THREADS)
            .build()
            .map_err(|e| TestCaseError::fail(format!("solver build failed: {e}")))?;
        let progress = RecordingProgress::default();
        let report = solver
            .search(&fixture.maze, fixture.start, &progress)
            .map_err(|e| TestCaseError::fail(format!("search failed: {e}")))?;
        let context = format!("shape={:?}, fork_after={fork_after}", fixture.shape);

        let visited: BTreeSet<NodeId> = report.visited().iter().copied().collect();
        if !visited.is_subset(&reachable) {
            return Err(TestCaseError::fail(format!(
                "claimed an unreachable node ({context})"
            )));
        }

        match report.path() {
            Some(path) => {
                path.validate_in(&fixture.maze).map_err(|e| {
                    TestCaseError::fail(format!("invalid path {:?}: {e} ({context})", path.nodes()))
                })?;
                if path.start() != fixture.start {
                    return Err(TestCaseError::fail(format!(
                        "path starts at {} instead of {} ({context})",
                        path.start(),
                        fixture.start
                    )));
                }
            }
            None => {
                if visited != reachable {
                    return Err(TestCaseError::fail(format!(
                        "exhausted search claimed {} of {} reachable nodes ({context})",
                        visited.len(),
                        reachable.len()
                    )));
                }
                if reachable.iter().any(|node| fixture.maze.is_goal(*node)) {
                    return Err(TestCaseError::fail(format!(
                        "reachable goal was missed ({context})"
                    )));
                }
            }
        }

        check_progress_reports(&progress, &visited, report.tasks(), &context)?;
    }
    Ok(())
}

fn check_progress_reports(
    progress: &RecordingProgress,
    visited: &BTreeSet<NodeId>,
    tasks: usize,
    context: &str,
) -> TestCaseResult {
    let mut reports: HashMap<NodeId, usize> = HashMap::new();
    for (_, node) in progress.moves() {
        *reports.entry(node).or_default() += 1;
    }
    if reports.len() != visited.len() || reports.values().any(|count| *count != 1) {
        return Err(TestCaseError::fail(format!(
            "progress saw {} distinct nodes for {} claims ({context})",
            reports.len(),
            visited.len()
        )));
    }
    if usize::try_from(progress.actors()).map_or(true, |actors| actors > tasks) {
        return Err(TestCaseError::fail(format!(
            "{} actors created by {tasks} tasks ({context})",
            progress.actors()
        )));
    }
    Ok(())
}

/// Collects the nodes reachable from the fixture's start.
fn reachable_from(fixture: &MazeFixture) -> Result<BTreeSet<NodeId>, TestCaseError> {
    let mut seen = BTreeSet::from([fixture.start]);
    let mut pending = vec![fixture.start];
    while let Some(node) = pending.pop() {
        let neighbours = fixture
            .maze
            .neighbors(node)
            .map_err(|e| TestCaseError::fail(format!("fixture maze failed: {e}")))?;
        for next in neighbours {
            if seen.insert(next) {
                pending.push(next);
            }
        }
    }
    Ok(seen)
}
