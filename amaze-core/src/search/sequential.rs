//! Single-threaded depth-first search.

use std::collections::{HashMap, HashSet, hash_map::Entry};
use std::sync::Arc;

use super::frontier::Frontier;
use crate::{
    Result,
    error::SolverError,
    maze::{Maze, NodeId},
    path::{MazePath, trace_path},
    progress::{ActorCursor, Progress},
};

/// Searches `maze` from `start` on the calling thread.
///
/// Follows the same exploration rules as [`crate::Solver`] with forking
/// disabled: neighbours are pushed in the order the maze reports them and the
/// most recently discovered node is explored first. A node is pushed onto the
/// frontier at most once.
///
/// # Errors
/// Returns [`SolverError::UnknownStart`] when `start` is outside the maze and
/// [`SolverError::Maze`] when a neighbour query fails.
///
/// # Examples
/// ```
/// use amaze_core::{AdjacencyMaze, NoProgress, NodeId, depth_first_search};
///
/// let maze = AdjacencyMaze::new("chain", 4)
///     .with_edge(0, 1)
///     .with_edge(1, 2)
///     .with_edge(2, 3)
///     .with_goal(3);
/// let path = depth_first_search(&maze, NodeId::new(0), &NoProgress)?
///     .expect("goal is reachable");
/// assert_eq!(path.len(), 4);
/// # Ok::<(), amaze_core::SolverError>(())
/// ```
pub fn depth_first_search<M, P>(
    maze: &M,
    start: NodeId,
    progress: &P,
) -> Result<Option<MazePath>>
where
    M: Maze + ?Sized,
    P: Progress + ?Sized,
{
    if !maze.contains(start) {
        return Err(SolverError::UnknownStart {
            maze: Arc::from(maze.name()),
            start,
        });
    }

    let mut frontier = Frontier::with_root(start);
    let mut visited = HashSet::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut cursor = ActorCursor::default();

    while let Some(current) = frontier.pop() {
        if !visited.insert(current) {
            continue;
        }
        cursor.report(progress, current);
        if maze.is_goal(current) {
            return trace_path(current, predecessors.len(), |node| {
                predecessors.get(&node).copied()
            })
            .map(Some);
        }

        let neighbours = maze.neighbors(current).map_err(|error| SolverError::Maze {
            maze: Arc::from(maze.name()),
            error,
        })?;
        for next in neighbours {
            if next == start {
                continue;
            }
            if let Entry::Vacant(slot) = predecessors.entry(next) {
                slot.insert(current);
                frontier.push(next);
            }
        }
    }
    Ok(None)
}
