//! Depth-first search engines.
//!
//! [`depth_first_search`] runs on the calling thread with private state. The
//! concurrent engine in [`task`] splits the same traversal into fork/join
//! tasks that share one [`state::SearchState`].

mod frontier;
mod sequential;
pub(crate) mod state;
pub(crate) mod task;
mod telemetry;

pub use sequential::depth_first_search;

#[cfg(test)]
mod property;
