//! Shared test utilities for `amaze-core`.

use amaze_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use crate::{
    error::MazeError,
    maze::{Maze, NodeId},
    progress::{ActorId, Progress},
};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Wraps a maze and fails every neighbour query for one node.
#[derive(Debug, Clone)]
pub(crate) struct FailingMaze<M> {
    inner: M,
    failing: NodeId,
}

impl<M> FailingMaze<M> {
    pub(crate) fn new(inner: M, failing: usize) -> Self {
        Self {
            inner,
            failing: NodeId::new(failing),
        }
    }
}

impl<M: Maze> Maze for FailingMaze<M> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.inner.contains(node)
    }

    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        if node == self.failing {
            return Err(MazeError::Unavailable {
                node,
                reason: Arc::from("injected failure"),
            });
        }
        self.inner.neighbors(node)
    }

    fn is_goal(&self, node: NodeId) -> bool {
        self.inner.is_goal(node)
    }
}

/// [`Progress`] implementation that records every report for assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingProgress {
    next_actor: AtomicU64,
    moves: Mutex<Vec<(ActorId, NodeId)>>,
}

impl RecordingProgress {
    /// Returns every recorded position, creations included.
    pub(crate) fn moves(&self) -> Vec<(ActorId, NodeId)> {
        self.moves.lock().map(|moves| moves.clone()).unwrap_or_default()
    }

    pub(crate) fn actors(&self) -> u64 {
        self.next_actor.load(Ordering::Relaxed)
    }

    fn record(&self, actor: ActorId, node: NodeId) {
        if let Ok(mut moves) = self.moves.lock() {
            moves.push((actor, node));
        }
    }
}

impl Progress for RecordingProgress {
    fn create_actor(&self, node: NodeId) -> ActorId {
        let actor = ActorId::new(self.next_actor.fetch_add(1, Ordering::Relaxed));
        self.record(actor, node);
        actor
    }

    fn advance_actor(&self, actor: ActorId, node: NodeId) {
        self.record(actor, node);
    }
}
