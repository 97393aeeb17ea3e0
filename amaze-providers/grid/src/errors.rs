use thiserror::Error;

/// Errors raised while parsing a text grid.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GridMazeError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has width {actual} but expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unexpected character {found:?} at row {row}, column {column}")]
    UnknownCell {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("grid has no start cell `S`")]
    MissingStart,
    #[error("second start cell at row {row}, column {column}")]
    DuplicateStart { row: usize, column: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
