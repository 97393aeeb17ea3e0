//! Support library for the amaze CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
