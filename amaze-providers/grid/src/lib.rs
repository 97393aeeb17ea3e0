//! Grid maze provider for text mazes implementing `Maze`.

mod errors;
mod grid;
mod render;

pub use errors::GridMazeError;
pub use grid::{Cell, GridMaze};

#[cfg(test)]
mod tests;
