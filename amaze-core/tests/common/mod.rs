use std::sync::Mutex;

use amaze_core::{ActorId, AdjacencyMaze, NodeId, Progress};

/// Chain `0 -> 1 -> ... -> len-1` with the last node as the goal.
#[must_use]
pub fn chain(len: usize) -> AdjacencyMaze {
    let mut maze = AdjacencyMaze::new("chain", len);
    for node in 1..len {
        maze.add_edge(node - 1, node);
    }
    maze.add_goal(len - 1);
    maze
}

/// Comb whose spine node `2i` leads to the next spine node `2i + 2` and to
/// the dead-end tooth `2i + 1`; the goal ends the spine.
#[must_use]
pub fn comb(teeth: usize) -> AdjacencyMaze {
    let goal = 2 * teeth;
    let mut maze = AdjacencyMaze::new("comb", goal + 1);
    for tooth in 0..teeth {
        let spine = 2 * tooth;
        maze.add_edge(spine, spine + 2);
        maze.add_edge(spine, spine + 1);
    }
    maze.add_goal(goal);
    maze
}

/// Progress reporter remembering which nodes were reported.
#[derive(Default)]
pub struct Collected {
    nodes: Mutex<Vec<NodeId>>,
}

impl Collected {
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = self.nodes.lock().expect("lock poisoned").clone();
        nodes.sort_unstable();
        nodes
    }
}

impl Progress for Collected {
    fn create_actor(&self, node: NodeId) -> ActorId {
        self.nodes.lock().expect("lock poisoned").push(node);
        ActorId::new(0)
    }

    fn advance_actor(&self, _actor: ActorId, node: NodeId) {
        self.nodes.lock().expect("lock poisoned").push(node);
    }
}
