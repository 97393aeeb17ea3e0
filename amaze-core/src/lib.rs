//! Amaze core library.
//!
//! Concurrent depth-first maze solving on a fork/join worker pool.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod maze;
mod path;
mod progress;
mod report;
mod search;
mod solver;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ForkPolicy, SolverBuilder},
    error::{MazeError, MazeErrorCode, Result, SolverError, SolverErrorCode},
    maze::{AdjacencyMaze, Maze, NodeId},
    path::{MazePath, PathError},
    progress::{ActorId, NoProgress, Progress, TracingProgress},
    report::SearchReport,
    search::depth_first_search,
    solver::{Solver, solve},
};
