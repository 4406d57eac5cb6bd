//! Depth-first frontier: a branch-private LIFO of claimed, unexplored nodes.

use amazed_maze::NodeId;

/// LIFO frontier with a high-water mark.
///
/// Never shared between branches. Every node on it has already been claimed
/// by the owning branch.
#[derive(Debug, Default)]
pub struct DepthFirstFrontier {
    stack: Vec<NodeId>,
    high_water: usize,
}

impl DepthFirstFrontier {
    /// A frontier holding only `start`.
    #[must_use]
    pub fn seeded(start: NodeId) -> Self {
        Self {
            stack: vec![start],
            high_water: 1,
        }
    }

    pub fn push(&mut self, node: NodeId) {
        self.stack.push(node);
        self.high_water = self.high_water.max(self.stack.len());
    }

    /// Pop the most recently pushed node.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    /// Remove the `count` most recently pushed nodes, oldest first.
    ///
    /// Asking for more nodes than the frontier holds takes all of them.
    #[must_use]
    pub fn split_newest(&mut self, count: usize) -> Vec<NodeId> {
        let at = self.stack.len().saturating_sub(count);
        self.stack.split_off(at)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Largest size the frontier ever reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
