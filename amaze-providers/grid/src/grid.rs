//! Parsing and adjacency for rectangular text grids.

use std::io::BufRead;

use amaze_core::{Maze, MazeError, NodeId};

use crate::errors::GridMazeError;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell (`#`).
    Wall,
    /// Walkable cell (`.`, space, or the start `S`).
    Open,
    /// Walkable goal cell (`G`).
    Goal,
}

impl Cell {
    fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Rectangular maze read from text.
///
/// Cells are numbered row by row, so the node for row `r` and column `c` is
/// `r * width + c`. Neighbours are the open orthogonal cells in the order
/// up, right, down, left.
#[derive(Debug, Clone)]
pub struct GridMaze {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: NodeId,
}

impl GridMaze {
    /// Parses a grid from `text`.
    ///
    /// # Errors
    /// Returns a [`GridMazeError`] describing the first malformed row or cell.
    ///
    /// # Examples
    /// ```
    /// use amaze_core::{Maze, NodeId};
    /// use amaze_providers_grid::GridMaze;
    ///
    /// let maze = GridMaze::try_from_str("demo", "S.#\n#.G\n")?;
    /// assert_eq!(maze.start(), NodeId::new(0));
    /// assert_eq!(maze.neighbors(NodeId::new(1))?, [NodeId::new(4), NodeId::new(0)]);
    /// assert!(maze.is_goal(NodeId::new(5)));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_str(name: impl Into<String>, text: &str) -> Result<Self, GridMazeError> {
        Self::try_from_reader(name, text.as_bytes())
    }

    /// Parses a grid line by line from `reader`.
    ///
    /// Trailing blank lines are ignored; any other line must be as wide as
    /// the first.
    ///
    /// # Errors
    /// Returns [`GridMazeError::Io`] when reading fails and the parsing
    /// errors of [`Self::try_from_str`] otherwise.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, GridMazeError> {
        let mut lines = Vec::new();
        for read in reader.lines() {
            let mut line = read?;
            if line.ends_with('\r') {
                line.pop();
            }
            lines.push(line);
        }
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        let Some(first) = lines.first() else {
            return Err(GridMazeError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(GridMazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        let mut start = None;
        for (row, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(GridMazeError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (column, found) in line.chars().enumerate() {
                let cell = match found {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Open,
                    'G' => Cell::Goal,
                    'S' => {
                        if start.is_some() {
                            return Err(GridMazeError::DuplicateStart { row, column });
                        }
                        start = Some(NodeId::new(row * width + column));
                        Cell::Open
                    }
                    _ => {
                        return Err(GridMazeError::UnknownCell { row, column, found });
                    }
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            name: name.into(),
            width,
            height: lines.len(),
            cells,
            start: start.ok_or(GridMazeError::MissingStart)?,
        })
    }

    /// Returns the node marked `S`.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell behind `node`, if it lies inside the grid.
    #[must_use]
    pub fn cell(&self, node: NodeId) -> Option<Cell> {
        self.cells.get(node.get()).copied()
    }

    /// Returns the `(row, column)` of `node`.
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<(usize, usize)> {
        self.contains(node)
            .then(|| (node.get() / self.width, node.get() % self.width))
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn open_at(&self, row: usize, column: usize) -> Option<NodeId> {
        if row >= self.height || column >= self.width {
            return None;
        }
        let node = NodeId::new(row * self.width + column);
        self.cell(node)
            .filter(|cell| cell.is_open())
            .map(|_| node)
    }
}

impl Maze for GridMaze {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, node: NodeId) -> bool {
        node.get() < self.cells.len()
    }

    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        let (row, column) = self
            .position(node)
            .ok_or(MazeError::UnknownNode { node })?;
        let candidates = [
            row.checked_sub(1).and_then(|up| self.open_at(up, column)),
            self.open_at(row, column + 1),
            self.open_at(row + 1, column),
            column.checked_sub(1).and_then(|left| self.open_at(row, left)),
        ];
        Ok(candidates.into_iter().flatten().collect())
    }

    fn is_goal(&self, node: NodeId) -> bool {
        self.cell(node) == Some(Cell::Goal)
    }
}
