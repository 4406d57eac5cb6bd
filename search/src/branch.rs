//! Search branches: the unit of work of the parallel depth-first search.
//!
//! # Exploration loop
//!
//! While the frontier is non-empty and the abort signal is lowered:
//!
//! 1. Pop `current`, move the branch's player onto it.
//! 2. If `current` is a goal, raise the abort signal and return the prefix
//!    extended with the branch-local segment to `current`.
//! 3. Claim every neighbor of `current`; each won claim is pushed on the
//!    frontier with `current` recorded as its predecessor.
//! 4. If more than one neighbor was won and the fork gate permits, fork:
//!    the newest `width - 1` nodes become child branches handed to the
//!    spawner with the path to `current` as their prefix. The oldest new node
//!    stays on this branch's frontier and the loop goes on.
//!
//! A branch never waits for its children. Each one closes its own slot in
//! the [`JoinLedger`], and the ledger folds the slots in join order once the
//! scheduler scope has drained.
//!
//! Predecessor links never leave the branch that recorded them.

use std::collections::HashMap;
use std::sync::Arc;

use amazed_maze::{MazeV1, NodeId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::abort::AbortSignal;
use crate::claim::ClaimSet;
use crate::error::SolveError;
use crate::frontier::DepthFirstFrontier;
use crate::join::{JoinLedger, SlotId};
use crate::path::{assemble, trace_back_until, Path, PrefixSegment};
use crate::policy::ForkGate;
use crate::scheduler::{Task, TaskSpawner};

/// Shared view every branch of one solve works against.
///
/// The claim set and abort signal are the only state branches exchange while
/// exploring, and both are accessed through atomic operations only. The
/// ledger is written once per branch, on creation and on completion.
pub struct SearchContext<'a, M> {
    pub maze: &'a M,
    pub claims: &'a ClaimSet,
    pub abort: &'a AbortSignal,
    pub ledger: &'a JoinLedger,
    pub gate: ForkGate,
}

impl<M> Clone for SearchContext<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for SearchContext<'_, M> {}

/// Counters gathered by branches.
///
/// Each branch counts its own work; the join sums them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BranchStatsV1 {
    /// Branches that started exploring (root and forked children).
    pub branches: u64,
    /// Fork events.
    pub forks: u64,
    /// Nodes popped and entered.
    pub expansions: u64,
    /// Largest frontier any single branch held.
    pub frontier_high_water: u64,
}

impl BranchStatsV1 {
    pub(crate) fn absorb(&mut self, other: &Self) {
        self.branches += other.branches;
        self.forks += other.forks;
        self.expansions += other.expansions;
        self.frontier_high_water = self.frontier_high_water.max(other.frontier_high_water);
    }
}

/// What a branch reports to the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOutcome {
    /// Full path from the solve's start node, if a goal was reached.
    pub path: Option<Path>,
    pub stats: BranchStatsV1,
}

/// One sequential depth-first exploration unit.
#[derive(Debug, Clone)]
pub struct Branch {
    start: NodeId,
    /// Path from the solve's start node up to and including the fork node
    /// this branch was split from. `None` for the root.
    prefix: Option<Arc<PrefixSegment>>,
    slot: SlotId,
}

impl Branch {
    /// The root branch, with a fresh slot in `ledger`. `start` must already
    /// be claimed.
    #[must_use]
    pub fn root(start: NodeId, ledger: &JoinLedger) -> Self {
        Self {
            start,
            prefix: None,
            slot: ledger.open(None),
        }
    }

    /// Explore, then close this branch's slot with the outcome.
    pub fn run<'a, M>(self, ctx: SearchContext<'a, M>, spawner: &dyn TaskSpawner<'a>)
    where
        M: MazeV1 + 'a,
    {
        let slot = self.slot;
        let outcome = self.explore(ctx, spawner);
        ctx.ledger.close(slot, outcome);
    }

    /// Explore until a goal is found, the frontier empties, or the abort
    /// signal is observed. Children forked on the way are handed to
    /// `spawner` and report through their own slots.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::GraphInconsistency`] if the maze yields a neighbor
    /// it does not contain.
    pub fn explore<'a, M>(
        self,
        ctx: SearchContext<'a, M>,
        spawner: &dyn TaskSpawner<'a>,
    ) -> Result<BranchOutcome, SolveError>
    where
        M: MazeV1 + 'a,
    {
        let player = ctx.maze.new_player(self.start);
        let mut frontier = DepthFirstFrontier::seeded(self.start);
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        // Frozen prefixes of this branch's own forks, by fork node.
        let mut forked_at: HashMap<NodeId, Arc<PrefixSegment>> = HashMap::new();
        let mut stats = BranchStatsV1 {
            branches: 1,
            ..BranchStatsV1::default()
        };
        let mut steps_since_fork: u64 = 0;

        while !ctx.abort.is_aborted() {
            let Some(current) = frontier.pop() else {
                break;
            };
            if let Some(player) = player {
                ctx.maze.move_player(player, current);
            }
            stats.expansions += 1;

            if ctx.maze.has_goal(current) {
                ctx.abort.signal_found();
                let (above, segment) = self.segment_to(&predecessors, &forked_at, current);
                let above = above.as_deref().map_or_else(Vec::new, PrefixSegment::to_vec);
                let path = Path::new(assemble(&above, &segment));
                debug!(goal = %current, player = ?player, "search.branch.goal");
                stats.frontier_high_water = frontier.high_water() as u64;
                return Ok(BranchOutcome { path, stats });
            }

            let mut width = 0usize;
            for neighbor in ctx.maze.neighbors(current) {
                if !ctx.maze.contains(neighbor) {
                    warn!(from = %current, neighbor = %neighbor, "search.branch.graph_inconsistency");
                    ctx.abort.signal_found();
                    return Err(SolveError::GraphInconsistency {
                        from: current,
                        neighbor,
                    });
                }
                if ctx.claims.claim(neighbor) {
                    frontier.push(neighbor);
                    predecessors.insert(neighbor, current);
                    width += 1;
                }
            }

            if width > 1 && ctx.gate.permits(steps_since_fork) {
                steps_since_fork = 0;
                stats.forks += 1;
                let (above, segment) = self.segment_to(&predecessors, &forked_at, current);
                let fork_prefix = PrefixSegment::new(above, segment);
                forked_at.insert(current, Arc::clone(&fork_prefix));
                // Oldest first; the oldest new node stays on this frontier.
                let fresh = frontier.split_newest(width - 1);
                debug!(
                    fork_node = %current,
                    children = fresh.len(),
                    player = ?player,
                    "search.branch.fork"
                );
                // Spawn in the order the nodes would have been popped.
                for start in fresh.into_iter().rev() {
                    let child = Self {
                        start,
                        prefix: Some(Arc::clone(&fork_prefix)),
                        slot: ctx.ledger.open(Some(self.slot)),
                    };
                    let task: Task<'a> =
                        Box::new(move |spawner: &dyn TaskSpawner<'a>| child.run(ctx, spawner));
                    spawner.spawn(task);
                }
            } else {
                steps_since_fork += 1;
            }
        }

        stats.frontier_high_water = frontier.high_water() as u64;
        Ok(BranchOutcome { path: None, stats })
    }

    /// The local path segment ending at `to`, and the frozen prefix it
    /// continues: the nearest fork of this branch above `to`, or the prefix
    /// this branch was handed.
    fn segment_to(
        &self,
        predecessors: &HashMap<NodeId, NodeId>,
        forked_at: &HashMap<NodeId, Arc<PrefixSegment>>,
        to: NodeId,
    ) -> (Option<Arc<PrefixSegment>>, Vec<NodeId>) {
        let (boundary, segment) =
            trace_back_until(predecessors, to, |node| forked_at.contains_key(&node));
        let above = match boundary {
            Some(fork_node) => forked_at.get(&fork_node).cloned(),
            None => self.prefix.clone(),
        };
        (above, segment)
    }
}
