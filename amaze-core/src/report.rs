//! Search outcome types.

use crate::{maze::NodeId, path::MazePath};

/// Outcome of a [`crate::Solver::search`] run.
///
/// Besides the path, the report lists every node that was claimed and how
/// many search tasks took part.
///
/// # Examples
/// ```
/// use amaze_core::{AdjacencyMaze, NodeId, SolverBuilder};
///
/// let maze = AdjacencyMaze::new("pair", 2).with_edge(0, 1).with_goal(1);
/// let solver = SolverBuilder::new().with_threads(1).build()?;
/// let report = solver.search(&maze, NodeId::new(0), &amaze_core::NoProgress)?;
/// assert!(report.was_visited(NodeId::new(1)));
/// assert_eq!(report.tasks(), 1);
/// assert_eq!(report.into_path().map(|path| path.len()), Some(2));
/// # Ok::<(), amaze_core::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    path: Option<MazePath>,
    visited: Vec<NodeId>,
    tasks: usize,
}

impl SearchReport {
    pub(crate) fn new(path: Option<MazePath>, mut visited: Vec<NodeId>, tasks: usize) -> Self {
        visited.sort_unstable();
        visited.dedup();
        Self {
            path,
            visited,
            tasks,
        }
    }

    /// Returns the path found, if any.
    #[must_use]
    pub fn path(&self) -> Option<&MazePath> {
        self.path.as_ref()
    }

    /// Consumes the report and returns the path found, if any.
    #[must_use]
    pub fn into_path(self) -> Option<MazePath> {
        self.path
    }

    /// Returns whether a path was found.
    #[must_use]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the claimed nodes in ascending order.
    #[must_use]
    pub fn visited(&self) -> &[NodeId] {
        &self.visited
    }

    /// Returns whether `node` was claimed by some task.
    #[must_use]
    pub fn was_visited(&self, node: NodeId) -> bool {
        self.visited.binary_search(&node).is_ok()
    }

    /// Returns the number of search tasks that ran, including the root task.
    #[must_use]
    pub fn tasks(&self) -> usize {
        self.tasks
    }
}
