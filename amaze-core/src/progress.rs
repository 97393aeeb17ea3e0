//! Progress reporting collaborators.
//!
//! Every search task drives one actor through the maze as it claims nodes.
//! Reporting is a side effect only: the solver never reads anything back
//! from a [`Progress`] implementation.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::maze::NodeId;

/// Handle naming an actor created by a [`Progress`] implementation.
///
/// # Examples
/// ```
/// use amaze_core::ActorId;
///
/// assert_eq!(ActorId::new(3).get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u64);

impl ActorId {
    /// Creates a new actor identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

/// Receives actor movements while a search runs.
///
/// Implementations are shared by every search task and must therefore be
/// [`Sync`] when used with [`crate::Solver`].
pub trait Progress {
    /// Creates an actor standing on `node`.
    fn create_actor(&self, node: NodeId) -> ActorId;

    /// Moves `actor` onto `node`.
    fn advance_actor(&self, actor: ActorId, node: NodeId);
}

/// [`Progress`] implementation that discards every report.
///
/// # Examples
/// ```
/// use amaze_core::{NoProgress, NodeId, Progress};
///
/// let actor = NoProgress.create_actor(NodeId::new(0));
/// NoProgress.advance_actor(actor, NodeId::new(1));
/// assert_eq!(actor.get(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn create_actor(&self, _node: NodeId) -> ActorId {
        ActorId::new(0)
    }

    fn advance_actor(&self, _actor: ActorId, _node: NodeId) {}
}

/// [`Progress`] implementation emitting `trace` events for each movement.
#[derive(Debug, Default)]
pub struct TracingProgress {
    next_actor: AtomicU64,
}

impl TracingProgress {
    /// Creates a reporter whose first actor is numbered zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many actors have been created so far.
    #[must_use]
    pub fn actors_created(&self) -> u64 {
        self.next_actor.load(Ordering::Relaxed)
    }
}

impl Progress for TracingProgress {
    fn create_actor(&self, node: NodeId) -> ActorId {
        let actor = ActorId::new(self.next_actor.fetch_add(1, Ordering::Relaxed));
        trace!(actor = actor.get(), node = node.get(), "actor created");
        actor
    }

    fn advance_actor(&self, actor: ActorId, node: NodeId) {
        trace!(actor = actor.get(), node = node.get(), "actor advanced");
    }
}

/// Lazily created actor owned by one search.
///
/// The actor appears on the first node its owner claims and follows it from
/// then on, so tasks that never claim a node never create one.
#[derive(Debug, Default)]
pub(crate) struct ActorCursor {
    actor: Option<ActorId>,
}

impl ActorCursor {
    pub(crate) fn report<P: Progress + ?Sized>(&mut self, progress: &P, node: NodeId) {
        match self.actor {
            Some(actor) => progress.advance_actor(actor, node),
            None => self.actor = Some(progress.create_actor(node)),
        }
    }
}
