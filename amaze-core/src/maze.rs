//! Graph query abstractions consumed by the solver.

use std::{collections::HashSet, fmt};

use crate::error::MazeError;

/// Identifier naming a maze position.
///
/// # Examples
/// ```
/// use amaze_core::NodeId;
///
/// let node = NodeId::new(4);
/// assert_eq!(node.get(), 4);
/// assert_eq!(node.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a new node identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only view of a maze as a graph of [`NodeId`]s.
///
/// The solver shares one maze between every search task, so implementations
/// used with [`crate::Solver`] must be [`Sync`].
///
/// # Examples
/// ```
/// use amaze_core::{Maze, MazeError, NodeId};
///
/// struct Corridor(usize);
///
/// impl Maze for Corridor {
///     fn name(&self) -> &str { "corridor" }
///     fn contains(&self, node: NodeId) -> bool { node.get() < self.0 }
///     fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
///         if !self.contains(node) {
///             return Err(MazeError::UnknownNode { node });
///         }
///         let next = node.get() + 1;
///         Ok((next < self.0).then(|| NodeId::new(next)).into_iter().collect())
///     }
///     fn is_goal(&self, node: NodeId) -> bool { node.get() + 1 == self.0 }
/// }
///
/// let maze = Corridor(3);
/// assert_eq!(maze.neighbors(NodeId::new(0))?, [NodeId::new(1)]);
/// assert!(maze.is_goal(NodeId::new(2)));
/// # Ok::<(), MazeError>(())
/// ```
pub trait Maze {
    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Returns whether `node` is a position of this maze.
    fn contains(&self, node: NodeId) -> bool;

    /// Returns the nodes adjacent to `node`.
    ///
    /// The order may be arbitrary but must be stable across calls for the
    /// same node.
    ///
    /// # Errors
    /// Returns [`MazeError::UnknownNode`] for nodes outside the maze, or any
    /// other [`MazeError`] the implementation raises.
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError>;

    /// Returns whether `node` is a goal.
    fn is_goal(&self, node: NodeId) -> bool;
}

impl<M: Maze + ?Sized> Maze for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn contains(&self, node: NodeId) -> bool {
        (**self).contains(node)
    }

    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        (**self).neighbors(node)
    }

    fn is_goal(&self, node: NodeId) -> bool {
        (**self).is_goal(node)
    }
}

/// In-memory maze backed by adjacency lists.
///
/// Nodes are numbered densely from zero; adding an edge that mentions a node
/// beyond the current size grows the maze to include it. Edges are directed;
/// use [`AdjacencyMaze::with_passage`] for two-way connections.
///
/// # Examples
/// ```
/// use amaze_core::{AdjacencyMaze, Maze, NodeId};
///
/// let maze = AdjacencyMaze::new("triangle", 3)
///     .with_passage(0, 1)
///     .with_passage(1, 2)
///     .with_goal(2);
/// assert_eq!(maze.node_count(), 3);
/// assert_eq!(maze.neighbors(NodeId::new(1))?, [NodeId::new(0), NodeId::new(2)]);
/// assert!(maze.is_goal(NodeId::new(2)));
/// # Ok::<(), amaze_core::MazeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMaze {
    name: String,
    adjacency: Vec<Vec<NodeId>>,
    goals: HashSet<NodeId>,
}

impl AdjacencyMaze {
    /// Creates a maze with `node_count` isolated nodes and no goals.
    #[must_use]
    pub fn new(name: impl Into<String>, node_count: usize) -> Self {
        Self {
            name: name.into(),
            adjacency: vec![Vec::new(); node_count],
            goals: HashSet::new(),
        }
    }

    /// Adds a one-way edge from `from` to `to`.
    #[must_use]
    pub fn with_edge(mut self, from: usize, to: usize) -> Self {
        self.add_edge(from, to);
        self
    }

    /// Adds edges in both directions between `left` and `right`.
    #[must_use]
    pub fn with_passage(mut self, left: usize, right: usize) -> Self {
        self.add_passage(left, right);
        self
    }

    /// Marks `node` as a goal.
    #[must_use]
    pub fn with_goal(mut self, node: usize) -> Self {
        self.add_goal(node);
        self
    }

    /// Adds a one-way edge from `from` to `to` in place.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.grow_to(from.max(to));
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(NodeId::new(to));
        }
    }

    /// Adds edges in both directions between `left` and `right` in place.
    pub fn add_passage(&mut self, left: usize, right: usize) {
        self.add_edge(left, right);
        self.add_edge(right, left);
    }

    /// Marks `node` as a goal in place.
    pub fn add_goal(&mut self, node: usize) {
        self.grow_to(node);
        self.goals.insert(NodeId::new(node));
    }

    /// Returns the number of nodes in the maze.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterates over the goal nodes in unspecified order.
    pub fn goals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.goals.iter().copied()
    }

    fn grow_to(&mut self, node: usize) {
        if node >= self.adjacency.len() {
            self.adjacency.resize_with(node + 1, Vec::new);
        }
    }
}

impl Maze for AdjacencyMaze {
    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, node: NodeId) -> bool {
        node.get() < self.adjacency.len()
    }

    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, MazeError> {
        self.adjacency
            .get(node.get())
            .cloned()
            .ok_or(MazeError::UnknownNode { node })
    }

    fn is_goal(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }
}
