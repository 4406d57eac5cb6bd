//! Maze contract trait.

use crate::node::{NodeId, PlayerId};

/// Trait for graphs that the solver can explore.
///
/// # Contract
///
/// - All methods may be called concurrently from many search branches, for
///   the same or different nodes.
/// - `neighbors` must return a finite sequence and must return the same
///   sequence every time it is called for the same node (the graph is static
///   for the duration of one solve).
/// - Every node yielded by `neighbors` should satisfy `contains`. A neighbor
///   that does not is treated by the solver as a broken collaborator, not as
///   a search-time condition.
/// - `move_player` is invoked before a node is treated as entered, once per
///   entry, for players `new_player` handed out. It has no bearing on search
///   correctness.
pub trait MazeV1: Sync {
    /// Whether `node` is a valid vertex of this maze.
    fn contains(&self, node: NodeId) -> bool;

    /// Adjacent nodes of `node`, in a stable enumeration order.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Whether `node` is a goal.
    fn has_goal(&self, node: NodeId) -> bool;

    /// Allocate an animation identity starting at `node`.
    ///
    /// Mazes that do not animate exploration return `None`, and the solver
    /// then never calls `move_player`.
    fn new_player(&self, node: NodeId) -> Option<PlayerId> {
        let _ = node;
        None
    }

    /// Record that `player` is now at `node`.
    fn move_player(&self, player: PlayerId, node: NodeId) {
        let _ = (player, node);
    }
}

impl<M: MazeV1> MazeV1 for &M {
    fn contains(&self, node: NodeId) -> bool {
        (**self).contains(node)
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        (**self).neighbors(node)
    }

    fn has_goal(&self, node: NodeId) -> bool {
        (**self).has_goal(node)
    }

    fn new_player(&self, node: NodeId) -> Option<PlayerId> {
        (**self).new_player(node)
    }

    fn move_player(&self, player: PlayerId, node: NodeId) {
        (**self).move_player(player, node);
    }
}
