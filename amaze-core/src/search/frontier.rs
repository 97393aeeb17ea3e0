//! Task-private frontier stack.

use crate::maze::NodeId;

/// Last-in-first-out stack of discovered but unprocessed nodes.
///
/// A frontier is owned by exactly one search task and is never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Frontier {
    stack: Vec<NodeId>,
}

impl Frontier {
    pub(crate) fn with_root(node: NodeId) -> Self {
        Self { stack: vec![node] }
    }

    pub(crate) fn push(&mut self, node: NodeId) {
        self.stack.push(node);
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    /// Removes every node except the most recently pushed one.
    ///
    /// Detached nodes are returned from the most recently pushed to the
    /// oldest, which is the order the retained continuation would have
    /// popped them in.
    pub(crate) fn detach_all_but_top(&mut self) -> Vec<NodeId> {
        let Some(top) = self.stack.pop() else {
            return Vec::new();
        };
        let mut detached = std::mem::replace(&mut self.stack, vec![top]);
        detached.reverse();
        detached
    }
}
