pub(crate) use super::{Cell, GridMaze, GridMazeError};
