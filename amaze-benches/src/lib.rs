//! Benchmark support crate for amaze.
//!
//! Generates seeded grid mazes and parameter types used by the Criterion
//! solver benchmarks.

pub mod error;
pub mod params;
pub mod source;
