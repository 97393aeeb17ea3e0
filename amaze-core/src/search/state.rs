//! Exploration state shared by every task of one search.
//!
//! The visited set and the predecessor map are the only structures that need
//! cross-task mutual exclusion. Both are sharded maps: a node decision locks
//! the shard owning that node and nothing else, so tasks working on unrelated
//! regions of the maze do not serialise on each other.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dashmap::{DashMap, DashSet, mapref::entry::Entry};

use super::telemetry;
use crate::{
    Result,
    error::SolverError,
    maze::NodeId,
    path::{MazePath, trace_path},
};

/// Visited set, predecessor links and termination flags of one search.
#[derive(Debug)]
pub(crate) struct SearchState {
    root: NodeId,
    visited: DashSet<NodeId>,
    predecessors: DashMap<NodeId, NodeId>,
    found: AtomicBool,
    halted: AtomicBool,
    tasks: AtomicUsize,
}

impl SearchState {
    pub(crate) fn new(root: NodeId) -> Self {
        Self {
            root,
            visited: DashSet::new(),
            predecessors: DashMap::new(),
            found: AtomicBool::new(false),
            halted: AtomicBool::new(false),
            tasks: AtomicUsize::new(0),
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    /// Atomically marks `node` as visited.
    ///
    /// Returns `true` for exactly one caller per node, however many tasks
    /// race on it.
    pub(crate) fn claim(&self, node: NodeId) -> bool {
        let fresh = self.visited.insert(node);
        if fresh {
            telemetry::record_visit();
        } else {
            telemetry::record_duplicate_pop();
        }
        fresh
    }

    /// Records `from` as the predecessor of `node` unless `node` was already
    /// discovered.
    ///
    /// The membership test and the write happen under one shard lock, so a
    /// node is handed to at most one frontier system-wide. The root is
    /// discovered from the outset and never receives a predecessor.
    pub(crate) fn discover(&self, node: NodeId, from: NodeId) -> bool {
        if node == self.root {
            return false;
        }
        match self.predecessors.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(from);
                true
            }
        }
    }

    pub(crate) fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).map(|entry| *entry.value())
    }

    /// Rebuilds the path from the search root to `goal`.
    pub(crate) fn path_to(&self, goal: NodeId) -> Result<MazePath> {
        let path = trace_path(goal, self.predecessors.len(), |node| self.predecessor(node))?;
        if path.start() != self.root {
            return Err(SolverError::BrokenPredecessorChain {
                goal,
                walked: path.len().saturating_sub(1),
            });
        }
        Ok(path)
    }

    pub(crate) fn signal_found(&self) {
        self.found.store(true, Ordering::Release);
    }

    pub(crate) fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Stops every task after a collaborator failure.
    pub(crate) fn halt(&self) {
        self.halted.store(true, Ordering::Release);
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.is_found() || self.halted.load(Ordering::Acquire)
    }

    pub(crate) fn record_task(&self) {
        self.tasks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn tasks(&self) -> usize {
        self.tasks.load(Ordering::Relaxed)
    }

    /// Returns the visited nodes in ascending order.
    pub(crate) fn visited_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.visited.iter().map(|node| *node).collect();
        nodes.sort_unstable();
        nodes
    }
}
