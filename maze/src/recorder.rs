//! Move recording for animation traces and exploration audits.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::contract::MazeV1;
use crate::node::{NodeId, PlayerId};

/// One `move_player` call, in the order the recorder observed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEventV1 {
    pub player: PlayerId,
    pub node: NodeId,
}

/// Wraps a maze, allocating sequential player ids and logging every move.
///
/// Adjacency and goal queries pass straight through to the inner maze.
#[derive(Debug)]
pub struct RecordingMaze<M> {
    inner: M,
    next_player: AtomicU64,
    moves: Mutex<Vec<MoveEventV1>>,
}

impl<M: MazeV1> RecordingMaze<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            next_player: AtomicU64::new(0),
            moves: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped maze.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Snapshot of all moves recorded so far.
    #[must_use]
    pub fn moves(&self) -> Vec<MoveEventV1> {
        self.moves.lock().clone()
    }

    /// How many times each node was entered.
    #[must_use]
    pub fn entries_per_node(&self) -> BTreeMap<NodeId, usize> {
        let mut counts = BTreeMap::new();
        for event in self.moves.lock().iter() {
            *counts.entry(event.node).or_insert(0) += 1;
        }
        counts
    }

    /// Number of player ids handed out.
    #[must_use]
    pub fn players_allocated(&self) -> u64 {
        self.next_player.load(Ordering::Acquire)
    }
}

impl<M: MazeV1> MazeV1 for RecordingMaze<M> {
    fn contains(&self, node: NodeId) -> bool {
        self.inner.contains(node)
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.neighbors(node)
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.inner.has_goal(node)
    }

    fn new_player(&self, _node: NodeId) -> Option<PlayerId> {
        Some(PlayerId(self.next_player.fetch_add(1, Ordering::AcqRel)))
    }

    fn move_player(&self, player: PlayerId, node: NodeId) {
        self.moves.lock().push(MoveEventV1 { player, node });
    }
}
