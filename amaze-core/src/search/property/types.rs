//! Fixture types for search property tests.

use test_strategy::Arbitrary;

use crate::{AdjacencyMaze, NodeId};

/// Topology of a generated maze.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum MazeShape {
    /// A single corridor with the goal, if any, somewhere along it.
    #[weight(1)]
    Corridor,
    /// Random tree with edges directed away from the root.
    #[weight(2)]
    Tree,
    /// Rectangular grid with a random subset of passages open.
    #[weight(3)]
    Grid,
    /// Densely connected graph with many cycles.
    #[weight(2)]
    Dense,
    /// Two components; goals exist only in the one without the start.
    #[weight(1)]
    Disconnected,
}

/// Generated maze together with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct MazeFixture {
    /// Maze under test.
    pub maze: AdjacencyMaze,
    /// Node the search starts from.
    pub start: NodeId,
    /// Shape used during generation.
    pub shape: MazeShape,
}

/// Fork quotas every property is checked against.
pub(super) const FORK_QUOTAS: [i64; 4] = [0, 1, 2, 5];

/// Worker threads used by property-test solvers.
pub(super) const PROPERTY_THREADS: usize = 4;
