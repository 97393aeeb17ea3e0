//! Property-based tests for the fork/join search.
//!
//! Checks the concurrent solver against the sequential search on generated
//! mazes, validates every returned path, and confirms that exhausted searches
//! claim each reachable node exactly once whatever the fork quota.

mod equivalence;
mod strategies;
mod structural;
mod types;
