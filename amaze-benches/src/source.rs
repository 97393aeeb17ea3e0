//! Seeded grid maze generation.
//!
//! Mazes are carved with a randomised depth-first backtracker on a lattice
//! of cells separated by walls, which yields a perfect maze with exactly one
//! route between any two cells. Knocking out further walls at random then
//! adds loops, so benchmarks can cover both long single corridors and wide
//! frontiers.

use amaze_core::{Maze, MazePath, Solver};
use amaze_providers_grid::GridMaze;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

const WALL: u8 = b'#';
const OPEN: u8 = b'.';

/// Configuration for [`GridSource::generate`].
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Number of cell columns; the text grid is `2 * cells_wide + 1` wide.
    pub cells_wide: usize,
    /// Number of cell rows; the text grid is `2 * cells_high + 1` high.
    pub cells_high: usize,
    /// Chance of removing each remaining inner wall after carving.
    pub loop_probability: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Generator for benchmark grid mazes.
///
/// # Examples
/// ```
/// use amaze_benches::source::{GridConfig, GridSource};
///
/// let maze = GridSource::generate(
///     "bench",
///     &GridConfig { cells_wide: 4, cells_high: 3, loop_probability: 0.1, seed: 7 },
/// )?;
/// assert_eq!(maze.width(), 9);
/// assert_eq!(maze.height(), 7);
/// # Ok::<(), amaze_benches::error::BenchSetupError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GridSource;

impl GridSource {
    /// Generates a maze with the start in the top-left cell and the goal in
    /// the bottom-right cell.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] for zero dimensions, an invalid loop
    /// probability, or a grid too large to address.
    pub fn generate(name: &str, config: &GridConfig) -> Result<GridMaze, BenchSetupError> {
        let text = Self::generate_text(config)?;
        Ok(GridMaze::try_from_str(name, &text)?)
    }

    /// Generates the text form of the maze described by `config`.
    ///
    /// # Errors
    /// See [`Self::generate`].
    pub fn generate_text(config: &GridConfig) -> Result<String, BenchSetupError> {
        validate(config)?;
        let mut lattice = Lattice::new(config.cells_wide, config.cells_high)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        lattice.carve(&mut rng);
        lattice.add_loops(&mut rng, config.loop_probability);
        lattice.set(1, 1, b'S');
        lattice.set(lattice.width - 2, lattice.height - 2, b'G');
        Ok(lattice.render())
    }
}

/// Solves `maze` once so a broken input fails setup instead of being timed.
///
/// # Errors
/// Returns [`BenchSetupError::Solver`] when the search fails and
/// [`BenchSetupError::Unsolvable`] when it finds no path.
pub fn ensure_solvable(maze: &GridMaze, solver: &Solver) -> Result<MazePath, BenchSetupError> {
    solver
        .solve(maze, maze.start())?
        .ok_or_else(|| BenchSetupError::Unsolvable {
            maze: maze.name().to_owned(),
        })
}

fn validate(config: &GridConfig) -> Result<(), BenchSetupError> {
    if config.cells_wide == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "cells_wide",
        });
    }
    if config.cells_high == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "cells_high",
        });
    }
    if !(0.0..=1.0).contains(&config.loop_probability) {
        return Err(BenchSetupError::InvalidProbability {
            context: "loop_probability",
        });
    }
    Ok(())
}

struct Lattice {
    cells_wide: usize,
    cells_high: usize,
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
}

impl Lattice {
    fn new(cells_wide: usize, cells_high: usize) -> Result<Self, BenchSetupError> {
        let too_large = BenchSetupError::GridTooLarge {
            cells_wide,
            cells_high,
        };
        let side = |cells: usize| cells.checked_mul(2).and_then(|doubled| doubled.checked_add(1));
        let (Some(width), Some(height)) = (side(cells_wide), side(cells_high)) else {
            return Err(too_large);
        };
        if width.checked_mul(height).is_none() {
            return Err(too_large);
        }
        Ok(Self {
            cells_wide,
            cells_high,
            width,
            height,
            rows: vec![vec![WALL; width]; height],
        })
    }

    fn set(&mut self, x: usize, y: usize, glyph: u8) {
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = glyph;
        }
    }

    fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Opens every cell, linking them into a spanning tree.
    fn carve(&mut self, rng: &mut SmallRng) {
        let mut visited = vec![vec![false; self.cells_wide]; self.cells_high];
        let mut stack = vec![(0_usize, 0_usize)];
        mark(&mut visited, 0, 0);
        self.open_cell(0, 0);

        while let Some(&(cx, cy)) = stack.last() {
            let candidates: Vec<(usize, usize)> = self
                .cell_neighbours(cx, cy)
                .into_iter()
                .filter(|&(nx, ny)| !is_marked(&visited, nx, ny))
                .collect();
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let Some(&(nx, ny)) = candidates.get(rng.gen_range(0..candidates.len())) else {
                continue;
            };
            mark(&mut visited, nx, ny);
            self.open_cell(nx, ny);
            self.set(cx + nx + 1, cy + ny + 1, OPEN);
            stack.push((nx, ny));
        }
    }

    /// Removes remaining walls between adjacent cells with probability `p`.
    fn add_loops(&mut self, rng: &mut SmallRng, p: f64) {
        if p <= 0.0 {
            return;
        }
        for cy in 0..self.cells_high {
            for cx in 0..self.cells_wide {
                let (x, y) = (2 * cx + 1, 2 * cy + 1);
                if cx + 1 < self.cells_wide && self.get(x + 1, y) == Some(WALL) && rng.gen_bool(p) {
                    self.set(x + 1, y, OPEN);
                }
                if cy + 1 < self.cells_high && self.get(x, y + 1) == Some(WALL) && rng.gen_bool(p) {
                    self.set(x, y + 1, OPEN);
                }
            }
        }
    }

    fn open_cell(&mut self, cx: usize, cy: usize) {
        self.set(2 * cx + 1, 2 * cy + 1, OPEN);
    }

    fn cell_neighbours(&self, cx: usize, cy: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(4);
        if cy > 0 {
            out.push((cx, cy - 1));
        }
        if cx + 1 < self.cells_wide {
            out.push((cx + 1, cy));
        }
        if cy + 1 < self.cells_high {
            out.push((cx, cy + 1));
        }
        if cx > 0 {
            out.push((cx - 1, cy));
        }
        out
    }

    fn render(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            text.extend(row.iter().map(|&glyph| char::from(glyph)));
            text.push('\n');
        }
        text
    }
}

fn mark(visited: &mut [Vec<bool>], cx: usize, cy: usize) {
    if let Some(slot) = visited.get_mut(cy).and_then(|row| row.get_mut(cx)) {
        *slot = true;
    }
}

fn is_marked(visited: &[Vec<bool>], cx: usize, cy: usize) -> bool {
    visited
        .get(cy)
        .and_then(|row| row.get(cx))
        .copied()
        .unwrap_or(true)
}
