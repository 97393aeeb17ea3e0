//! Fork/join search tasks.
//!
//! One [`rayon::scope`] spans the whole search. Every forked task is spawned
//! into that scope, so no worker ever waits on a nested scope and the stack
//! depth stays flat however deep the task tree grows. Closing the scope is
//! the join point: afterwards [`combine`] walks the tree of published
//! outcomes in fork order without recursion.

use std::sync::{Arc, OnceLock};

use rayon::Scope;
use tracing::{debug, warn};

use super::{frontier::Frontier, state::SearchState, telemetry};
use crate::{
    Result,
    builder::ForkPolicy,
    error::{MazeError, SolverError},
    maze::{Maze, NodeId},
    path::MazePath,
    progress::{ActorCursor, Progress},
};

pub(crate) type TaskOutcome = Result<Option<MazePath>>;

/// What one task produced, plus handles to the siblings it forked.
#[derive(Debug)]
struct TaskRecord {
    outcome: TaskOutcome,
    children: Vec<ForkedTask>,
}

/// Handle to a task spawned into the search scope.
#[derive(Debug)]
struct ForkedTask {
    start: NodeId,
    record: Arc<OnceLock<TaskRecord>>,
}

impl ForkedTask {
    fn join(self) -> Result<TaskRecord> {
        let start = self.start;
        Arc::try_unwrap(self.record)
            .ok()
            .and_then(OnceLock::into_inner)
            .ok_or(SolverError::LostTaskOutcome { start })
    }
}

/// Runs `root` and every task it transitively forks inside one scope, then
/// combines their outcomes.
pub(crate) fn run_search<M, P>(root: SearchTask<'_, M, P>) -> TaskOutcome
where
    M: Maze + Sync + ?Sized,
    P: Progress + Sync + ?Sized,
{
    let record = rayon::scope(|scope| root.run(scope));
    combine(record)
}

/// Picks the search result from a finished task tree.
///
/// Tasks are inspected depth first in fork order: a task's own outcome is
/// looked at before those of its children, the first error is returned and
/// the first path is adopted.
fn combine(root: TaskRecord) -> TaskOutcome {
    let mut pending = Vec::new();
    let outcome = first_outcome(root, &mut pending);
    release(pending);
    outcome
}

fn first_outcome(root: TaskRecord, pending: &mut Vec<ForkedTask>) -> TaskOutcome {
    let mut record = root;
    loop {
        let TaskRecord { outcome, children } = record;
        pending.extend(children.into_iter().rev());
        if let Some(path) = outcome? {
            return Ok(Some(path));
        }
        let Some(next) = pending.pop() else {
            return Ok(None);
        };
        record = next.join()?;
    }
}

/// Takes uninspected records apart one level at a time; dropping a deep
/// tree in one go would recurse once per level.
fn release(mut pending: Vec<ForkedTask>) {
    while let Some(task) = pending.pop() {
        if let Ok(record) = task.join() {
            pending.extend(record.children);
        }
    }
}

/// One unit of concurrent search work.
pub(crate) struct SearchTask<'a, M: ?Sized, P: ?Sized> {
    maze: &'a M,
    progress: &'a P,
    state: Arc<SearchState>,
    policy: ForkPolicy,
    start: NodeId,
    frontier: Frontier,
    steps: usize,
    cursor: ActorCursor,
}

impl<'a, M, P> SearchTask<'a, M, P>
where
    M: Maze + Sync + ?Sized,
    P: Progress + Sync + ?Sized,
{
    /// Creates the task that starts at the search root.
    pub(crate) fn root(
        maze: &'a M,
        progress: &'a P,
        state: Arc<SearchState>,
        policy: ForkPolicy,
    ) -> Self {
        let start = state.root();
        Self::starting_at(maze, progress, state, policy, start)
    }

    fn starting_at(
        maze: &'a M,
        progress: &'a P,
        state: Arc<SearchState>,
        policy: ForkPolicy,
        start: NodeId,
    ) -> Self {
        Self {
            maze,
            progress,
            state,
            policy,
            start,
            frontier: Frontier::with_root(start),
            steps: 0,
            cursor: ActorCursor::default(),
        }
    }

    /// Explores from this task's start, spawning forked siblings into
    /// `scope`. Returns without waiting for them.
    fn run<'scope>(mut self, scope: &Scope<'scope>) -> TaskRecord
    where
        'a: 'scope,
    {
        self.state.record_task();
        let mut children = Vec::new();
        let outcome = self.explore(scope, &mut children);
        debug!(
            task = %self.start,
            children = children.len(),
            found = matches!(outcome, Ok(Some(_))),
            "search task finished"
        );
        TaskRecord { outcome, children }
    }

    fn explore<'scope>(
        &mut self,
        scope: &Scope<'scope>,
        children: &mut Vec<ForkedTask>,
    ) -> TaskOutcome
    where
        'a: 'scope,
    {
        while !self.state.should_stop() {
            let Some(current) = self.frontier.pop() else {
                break;
            };
            if !self.state.claim(current) {
                continue;
            }
            self.steps += 1;
            self.cursor.report(self.progress, current);

            if self.maze.is_goal(current) {
                self.state.signal_found();
                debug!(goal = %current, task = %self.start, "goal reached");
                return self.state.path_to(current).map(Some);
            }

            let neighbours = self
                .maze
                .neighbors(current)
                .map_err(|error| self.fail(current, error))?;
            for next in neighbours {
                if self.state.discover(next, current) {
                    self.frontier.push(next);
                }
            }

            if self.policy.should_fork(self.frontier.len(), self.steps) {
                self.fork(scope, children);
            }
        }
        Ok(None)
    }

    /// Hands every frontier entry except the top to a new sibling task.
    fn fork<'scope>(&mut self, scope: &Scope<'scope>, children: &mut Vec<ForkedTask>)
    where
        'a: 'scope,
    {
        let detached = self.frontier.detach_all_but_top();
        debug!(
            task = %self.start,
            forked = detached.len(),
            steps = self.steps,
            "forking search tasks"
        );
        telemetry::record_forks(detached.len());

        for start in detached {
            let child = Self::starting_at(
                self.maze,
                self.progress,
                Arc::clone(&self.state),
                self.policy,
                start,
            );
            let record = Arc::new(OnceLock::new());
            let publish = Arc::clone(&record);
            scope.spawn(move |search_scope| {
                publish.get_or_init(|| child.run(search_scope));
            });
            children.push(ForkedTask { start, record });
        }
        self.steps = 0;
    }

    fn fail(&self, node: NodeId, error: MazeError) -> SolverError {
        self.state.halt();
        warn!(
            maze = self.maze.name(),
            node = %node,
            error = %error,
            "neighbour query failed; halting search"
        );
        SolverError::Maze {
            maze: Arc::from(self.maze.name()),
            error,
        }
    }
}
