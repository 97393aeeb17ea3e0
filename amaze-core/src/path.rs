//! Path types returned by the solver.
//!
//! Provides [`MazePath`], its structural validation, and the predecessor
//! walk used by both search engines to rebuild a path once a goal is found.

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    error::{MazeError, SolverError},
    maze::{Maze, NodeId},
};

/// Sequence of nodes leading from a start node to a goal.
///
/// A path is never empty and never visits the same node twice.
///
/// # Examples
/// ```
/// use amaze_core::{MazePath, NodeId};
///
/// let path = MazePath::try_from_nodes(vec![NodeId::new(0), NodeId::new(2)])?;
/// assert_eq!(path.start(), NodeId::new(0));
/// assert_eq!(path.goal(), NodeId::new(2));
/// assert_eq!(path.len(), 2);
/// # Ok::<(), amaze_core::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazePath {
    nodes: Vec<NodeId>,
}

/// Error returned when a node sequence does not form a valid path.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The sequence contains no nodes.
    #[error("a path must contain at least one node")]
    Empty,
    /// The sequence visits a node more than once.
    #[error("node {node} appears more than once")]
    RepeatedNode {
        /// The repeated node.
        node: NodeId,
    },
    /// Two consecutive nodes are not connected in the maze.
    #[error("node {to} is not a neighbour of node {from}")]
    NotAdjacent {
        /// The earlier node of the offending pair.
        from: NodeId,
        /// The later node of the offending pair.
        to: NodeId,
    },
    /// The last node is not a goal of the maze.
    #[error("path ends at node {node}, which is not a goal")]
    MissingGoal {
        /// Final node of the path.
        node: NodeId,
    },
    /// The maze failed while the path was being checked.
    #[error(transparent)]
    Maze(#[from] MazeError),
}

impl MazePath {
    /// Builds a path from an explicit node sequence.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] for an empty sequence and
    /// [`PathError::RepeatedNode`] when a node occurs twice.
    pub fn try_from_nodes(nodes: Vec<NodeId>) -> Result<Self, PathError> {
        if nodes.is_empty() {
            return Err(PathError::Empty);
        }
        let mut seen = HashSet::with_capacity(nodes.len());
        if let Some(node) = nodes.iter().copied().find(|node| !seen.insert(*node)) {
            return Err(PathError::RepeatedNode { node });
        }
        Ok(Self { nodes })
    }

    /// Returns the nodes from start to goal.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Consumes the path and returns its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Returns the first node of the path.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.nodes.first().copied().unwrap_or(NodeId::new(0))
    }

    /// Returns the last node of the path.
    #[must_use]
    pub fn goal(&self) -> NodeId {
        self.nodes.last().copied().unwrap_or(NodeId::new(0))
    }

    /// Returns the number of nodes on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; paths hold at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks that the path walks along edges of `maze` and ends at a goal.
    ///
    /// # Errors
    /// Returns [`PathError::NotAdjacent`] for the first pair of consecutive
    /// nodes without an edge, [`PathError::MissingGoal`] when the last node is
    /// not a goal, and [`PathError::Maze`] when an adjacency query fails.
    ///
    /// # Examples
    /// ```
    /// use amaze_core::{AdjacencyMaze, MazePath, NodeId, PathError};
    ///
    /// let maze = AdjacencyMaze::new("pair", 2).with_edge(0, 1).with_goal(1);
    /// let path = MazePath::try_from_nodes(vec![NodeId::new(0), NodeId::new(1)])?;
    /// path.validate_in(&maze)?;
    ///
    /// let backwards = MazePath::try_from_nodes(vec![NodeId::new(1), NodeId::new(0)])?;
    /// assert!(backwards.validate_in(&maze).is_err());
    /// # Ok::<(), PathError>(())
    /// ```
    pub fn validate_in<M: Maze + ?Sized>(&self, maze: &M) -> Result<(), PathError> {
        for pair in self.nodes.windows(2) {
            let &[from, to] = pair else {
                continue;
            };
            if !maze.neighbors(from)?.contains(&to) {
                return Err(PathError::NotAdjacent { from, to });
            }
        }
        let goal = self.goal();
        if !maze.is_goal(goal) {
            return Err(PathError::MissingGoal { node: goal });
        }
        Ok(())
    }
}

/// Rebuilds the path ending at `goal` by following predecessor links.
///
/// The walk stops at the first node without a predecessor. A well-formed
/// predecessor relation is acyclic, so a walk longer than `max_links` means
/// the relation is corrupt and is reported instead of looping.
pub(crate) fn trace_path<F>(
    goal: NodeId,
    max_links: usize,
    mut predecessor_of: F,
) -> Result<MazePath, SolverError>
where
    F: FnMut(NodeId) -> Option<NodeId>,
{
    let mut nodes = vec![goal];
    let mut current = goal;
    while let Some(previous) = predecessor_of(current) {
        if nodes.len() > max_links {
            return Err(SolverError::BrokenPredecessorChain {
                goal,
                walked: nodes.len(),
            });
        }
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();
    Ok(MazePath { nodes })
}
