//! Error types for the amaze core library.
//!
//! Defines the collaborator and solver error enums exposed by the public API,
//! their stable machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::maze::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Maze`] queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MazeError {
    /// The queried node is not part of the maze.
    #[error("node {node} is not part of the maze")]
    UnknownNode {
        /// The node that was queried.
        node: NodeId,
    },
    /// The maze could not answer an adjacency query.
    #[error("neighbours of node {node} are unavailable: {reason}")]
    Unavailable {
        /// The node whose neighbours were requested.
        node: NodeId,
        /// Human-readable explanation supplied by the maze.
        reason: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`MazeError`] variants.
    enum MazeErrorCode for MazeError {
        /// The queried node is not part of the maze.
        UnknownNode => UnknownNode { .. } => "MAZE_UNKNOWN_NODE",
        /// The maze could not answer an adjacency query.
        Unavailable => Unavailable { .. } => "MAZE_UNAVAILABLE",
    }
}

/// Error type produced when configuring or running a [`crate::Solver`].
///
/// A search that finds no path is not an error: [`crate::Solver::solve`]
/// returns `Ok(None)` in that case.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolverError {
    /// `fork_after` must not be negative.
    #[error("fork_after must be zero or positive (got {got})")]
    InvalidForkAfter {
        /// The rejected value supplied by the caller.
        got: i64,
    },
    /// The worker pool needs at least one thread.
    #[error("worker thread count must be at least 1 (got {got})")]
    InvalidThreadCount {
        /// The rejected thread count.
        got: usize,
    },
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {message}")]
    ThreadPool {
        /// Message reported by the pool builder.
        message: Arc<str>,
    },
    /// The requested start node does not exist in the maze.
    #[error("start node {start} is not part of maze `{maze}`")]
    UnknownStart {
        /// Name of the maze that was searched.
        maze: Arc<str>,
        /// The rejected start node.
        start: NodeId,
    },
    /// A [`crate::Maze`] query failed while searching.
    #[error("maze `{maze}` failed: {error}")]
    Maze {
        /// Name of the maze that produced the error.
        maze: Arc<str>,
        #[source]
        /// Underlying maze error raised by the failing task.
        error: MazeError,
    },
    /// Following predecessor links from a goal did not terminate at the
    /// search root.
    #[error("predecessor chain from goal {goal} is broken after {walked} links")]
    BrokenPredecessorChain {
        /// Goal the reconstruction started from.
        goal: NodeId,
        /// Number of links followed before giving up.
        walked: usize,
    },
    /// A forked task completed without publishing its outcome.
    #[error("forked task starting at node {start} finished without an outcome")]
    LostTaskOutcome {
        /// Start node of the forked task.
        start: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolverError`] variants.
    enum SolverErrorCode for SolverError {
        /// `fork_after` must not be negative.
        InvalidForkAfter => InvalidForkAfter { .. } => "SOLVER_INVALID_FORK_AFTER",
        /// The worker pool needs at least one thread.
        InvalidThreadCount => InvalidThreadCount { .. } => "SOLVER_INVALID_THREAD_COUNT",
        /// The worker pool could not be created.
        ThreadPool => ThreadPool { .. } => "SOLVER_THREAD_POOL",
        /// The requested start node does not exist in the maze.
        UnknownStart => UnknownStart { .. } => "SOLVER_UNKNOWN_START",
        /// A [`crate::Maze`] query failed while searching.
        MazeFailure => Maze { .. } => "SOLVER_MAZE_FAILURE",
        /// Predecessor links did not lead back to the search root.
        BrokenPredecessorChain => BrokenPredecessorChain { .. } => "SOLVER_BROKEN_PREDECESSOR_CHAIN",
        /// A forked task completed without publishing its outcome.
        LostTaskOutcome => LostTaskOutcome { .. } => "SOLVER_LOST_TASK_OUTCOME",
    }
}

impl SolverError {
    /// Retrieve the inner [`MazeErrorCode`] when the error originated in a [`crate::Maze`].
    #[must_use]
    pub const fn maze_code(&self) -> Option<MazeErrorCode> {
        match self {
            Self::Maze { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SolverError>;
