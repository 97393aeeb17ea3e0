//! Maze generators for search property tests.
//!
//! Every generator numbers nodes from zero and starts the search at node 0.

use std::ops::Range;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AdjacencyMaze, NodeId};

use super::types::{MazeFixture, MazeShape};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 64;
/// Dense mazes stay small to keep the edge count manageable.
const DENSE_MAX_NODES: usize = 24;
const MAX_GRID_SIDE: usize = 10;

pub(super) fn maze_fixture_strategy() -> impl Strategy<Value = MazeFixture> {
    (any::<MazeShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

pub(super) fn generate_fixture(shape: MazeShape, rng: &mut SmallRng) -> MazeFixture {
    let maze = match shape {
        MazeShape::Corridor => generate_corridor(rng),
        MazeShape::Tree => generate_tree(rng),
        MazeShape::Grid => generate_grid(rng),
        MazeShape::Dense => generate_dense(rng),
        MazeShape::Disconnected => generate_disconnected(rng),
    };
    MazeFixture {
        maze,
        start: NodeId::new(0),
        shape,
    }
}

/// Marks up to `max` random nodes from `range` as goals.
fn scatter_goals(maze: &mut AdjacencyMaze, rng: &mut SmallRng, range: Range<usize>, max: usize) {
    let count = rng.gen_range(0..=max);
    for _ in 0..count {
        maze.add_goal(rng.gen_range(range.clone()));
    }
}

fn generate_corridor(rng: &mut SmallRng) -> AdjacencyMaze {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut maze = AdjacencyMaze::new("corridor", node_count);
    for node in 1..node_count {
        maze.add_passage(node - 1, node);
    }
    scatter_goals(&mut maze, rng, 1..node_count, 1);
    maze
}

fn generate_tree(rng: &mut SmallRng) -> AdjacencyMaze {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut maze = AdjacencyMaze::new("tree", node_count);
    for node in 1..node_count {
        maze.add_edge(rng.gen_range(0..node), node);
    }
    scatter_goals(&mut maze, rng, 1..node_count, 3);
    maze
}

fn generate_grid(rng: &mut SmallRng) -> AdjacencyMaze {
    let width = rng.gen_range(2..=MAX_GRID_SIDE);
    let height = rng.gen_range(2..=MAX_GRID_SIDE);
    let open: f64 = rng.gen_range(0.3..=0.9);
    let mut maze = AdjacencyMaze::new("grid", width * height);
    for row in 0..height {
        for col in 0..width {
            let node = row * width + col;
            if col + 1 < width && rng.gen_bool(open) {
                maze.add_passage(node, node + 1);
            }
            if row + 1 < height && rng.gen_bool(open) {
                maze.add_passage(node, node + width);
            }
        }
    }
    scatter_goals(&mut maze, rng, 0..width * height, 2);
    maze
}

fn generate_dense(rng: &mut SmallRng) -> AdjacencyMaze {
    let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let probability: f64 = rng.gen_range(0.5..=0.9);
    let mut maze = AdjacencyMaze::new("dense", node_count);
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(probability) {
                maze.add_passage(left, right);
            }
        }
    }
    scatter_goals(&mut maze, rng, 0..node_count, 2);
    maze
}

fn generate_disconnected(rng: &mut SmallRng) -> AdjacencyMaze {
    let first = rng.gen_range(MIN_NODES..=MAX_NODES / 2);
    let second = rng.gen_range(MIN_NODES..=MAX_NODES / 2);
    let mut maze = AdjacencyMaze::new("disconnected", first + second);
    for node in 1..first {
        maze.add_passage(rng.gen_range(0..node), node);
    }
    for node in (first + 1)..(first + second) {
        maze.add_passage(rng.gen_range(first..node), node);
    }
    scatter_goals(&mut maze, rng, first..first + second, 3);
    maze
}
