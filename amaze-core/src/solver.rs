//! Concurrent solver entry points.

use std::sync::Arc;

use rayon::ThreadPool;
use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::{ForkPolicy, SolverBuilder},
    error::SolverError,
    maze::{Maze, NodeId},
    path::MazePath,
    progress::{NoProgress, Progress},
    report::SearchReport,
    search::{
        state::SearchState,
        task::{SearchTask, run_search},
    },
};

/// Fork/join depth-first maze solver.
///
/// A solver owns a worker pool and may be reused for any number of searches.
/// Clones share the pool.
///
/// # Examples
/// ```
/// use amaze_core::{AdjacencyMaze, NodeId, SolverBuilder};
///
/// let maze = AdjacencyMaze::new("chain", 4)
///     .with_edge(0, 1)
///     .with_edge(1, 2)
///     .with_edge(2, 3)
///     .with_goal(3);
/// let solver = SolverBuilder::new().with_fork_after(1).build()?;
/// let path = solver.solve(&maze, NodeId::new(0))?.expect("goal is reachable");
/// assert_eq!(path.goal(), NodeId::new(3));
/// # Ok::<(), amaze_core::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    fork_policy: ForkPolicy,
    pool: Arc<ThreadPool>,
}

impl Solver {
    pub(crate) fn new(fork_policy: ForkPolicy, pool: Arc<ThreadPool>) -> Self {
        Self { fork_policy, pool }
    }

    /// Returns the policy deciding when tasks fork.
    #[must_use]
    pub fn fork_policy(&self) -> ForkPolicy {
        self.fork_policy
    }

    /// Returns the number of worker threads in the pool.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Searches `maze` from `start` without progress reporting.
    ///
    /// # Errors
    /// See [`Self::search`].
    pub fn solve<M>(&self, maze: &M, start: NodeId) -> Result<Option<MazePath>>
    where
        M: Maze + Sync + ?Sized,
    {
        self.solve_with_progress(maze, start, &NoProgress)
    }

    /// Searches `maze` from `start`, reporting actor movements to `progress`.
    ///
    /// Returns `Ok(None)` when no goal is reachable.
    ///
    /// # Errors
    /// See [`Self::search`].
    #[instrument(
        name = "core.solve",
        err,
        skip(self, maze, progress),
        fields(maze = %maze.name(), start = %start),
    )]
    pub fn solve_with_progress<M, P>(
        &self,
        maze: &M,
        start: NodeId,
        progress: &P,
    ) -> Result<Option<MazePath>>
    where
        M: Maze + Sync + ?Sized,
        P: Progress + Sync + ?Sized,
    {
        self.search(maze, start, progress)
            .map(SearchReport::into_path)
    }

    /// Runs a full search and returns its [`SearchReport`].
    ///
    /// The root task starts at `start` on the solver's pool. Every task stops
    /// as soon as any task reaches a goal, and the call returns only after
    /// all tasks have finished.
    ///
    /// # Errors
    /// Returns [`SolverError::UnknownStart`] when `start` is outside the maze,
    /// [`SolverError::Maze`] when a neighbour query fails in any task, and
    /// [`SolverError::BrokenPredecessorChain`] if the recorded predecessors
    /// do not lead back to `start`.
    #[instrument(
        name = "core.search",
        err,
        skip(self, maze, progress),
        fields(
            maze = %maze.name(),
            start = %start,
            fork_policy = ?self.fork_policy,
            threads = self.threads(),
        ),
    )]
    pub fn search<M, P>(&self, maze: &M, start: NodeId, progress: &P) -> Result<SearchReport>
    where
        M: Maze + Sync + ?Sized,
        P: Progress + Sync + ?Sized,
    {
        if !maze.contains(start) {
            warn!(maze = maze.name(), start = %start, "start node is not part of the maze");
            return Err(SolverError::UnknownStart {
                maze: Arc::from(maze.name()),
                start,
            });
        }

        let state = Arc::new(SearchState::new(start));
        let root = SearchTask::root(maze, progress, Arc::clone(&state), self.fork_policy);
        let path = self.pool.install(|| run_search(root))?;

        let report = SearchReport::new(path, state.visited_nodes(), state.tasks());
        info!(
            found = report.found(),
            path_len = report.path().map_or(0, MazePath::len),
            visited = report.visited().len(),
            tasks = report.tasks(),
            "search completed",
        );
        Ok(report)
    }
}

/// Builds a one-off solver with the default pool size and searches `maze`.
///
/// `fork_after` is the number of nodes a task processes before it forks its
/// frontier into sibling tasks; zero keeps the whole search in one task.
///
/// # Errors
/// Returns [`SolverError::InvalidForkAfter`] for a negative `fork_after`, and
/// any error reported by [`Solver::search`].
///
/// # Examples
/// ```
/// use amaze_core::{AdjacencyMaze, NodeId, solve};
///
/// let maze = AdjacencyMaze::new("split", 4).with_passage(0, 1).with_goal(3);
/// assert_eq!(solve(&maze, NodeId::new(0), 2)?, None);
/// # Ok::<(), amaze_core::SolverError>(())
/// ```
pub fn solve<M>(maze: &M, start: NodeId, fork_after: i64) -> Result<Option<MazePath>>
where
    M: Maze + Sync + ?Sized,
{
    SolverBuilder::new()
        .with_fork_after(fork_after)
        .build()?
        .solve(maze, start)
}
