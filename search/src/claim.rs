//! At-most-once node reservation shared by all branches of one solve.

use amazed_maze::NodeId;
use dashmap::DashSet;

/// Set of claimed nodes.
///
/// A claim is permanent for the lifetime of the set; there is no unclaim.
/// One `ClaimSet` is created per solve and dropped when it returns.
#[derive(Debug, Default)]
pub struct ClaimSet {
    claimed: DashSet<NodeId>,
}

impl ClaimSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically reserve `node`.
    ///
    /// Returns `true` to exactly one caller per node, however many call
    /// concurrently; every other call returns `false`.
    pub fn claim(&self, node: NodeId) -> bool {
        self.claimed.insert(node)
    }

    /// Whether `node` has been claimed by anyone.
    #[must_use]
    pub fn is_claimed(&self, node: NodeId) -> bool {
        self.claimed.contains(&node)
    }

    /// Number of claimed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Consume the set, returning claimed nodes in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.claimed.into_iter().collect();
        nodes.sort_unstable();
        nodes
    }
}
