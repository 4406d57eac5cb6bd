//! Join of branch results.
//!
//! Every branch owns one slot, opened by whoever created the branch and
//! closed with the branch's own outcome once its loop ends. Slots remember
//! their parent, so after the scope has drained the ledger folds them in
//! join order: a branch's own outcome first, then each child subtree in
//! spawn order. The first path in that order wins; any error outranks every
//! path.

use parking_lot::Mutex;

use crate::branch::{BranchOutcome, BranchStatsV1};
use crate::error::SolveError;

/// Index of one branch's slot in a [`JoinLedger`].
pub type SlotId = usize;

#[derive(Debug)]
struct Slot {
    parent: Option<SlotId>,
    outcome: Option<Result<BranchOutcome, SolveError>>,
}

/// Collects branch outcomes of one solve.
#[derive(Debug, Default)]
pub struct JoinLedger {
    slots: Mutex<Vec<Slot>>,
}

impl JoinLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a slot for a branch created by `parent`.
    ///
    /// Slots opened by the same parent keep their opening order.
    pub fn open(&self, parent: Option<SlotId>) -> SlotId {
        let mut slots = self.slots.lock();
        slots.push(Slot {
            parent,
            outcome: None,
        });
        slots.len() - 1
    }

    /// Store the outcome of the branch holding `slot`.
    pub fn close(&self, slot: SlotId, outcome: Result<BranchOutcome, SolveError>) {
        if let Some(entry) = self.slots.lock().get_mut(slot) {
            entry.outcome = Some(outcome);
        }
    }

    /// Fold every closed slot in join order.
    ///
    /// # Errors
    ///
    /// Returns the first error in join order, if any branch reported one.
    pub fn join(self) -> Result<BranchOutcome, SolveError> {
        let mut slots = self.slots.into_inner();

        let mut children: Vec<Vec<SlotId>> = vec![Vec::new(); slots.len()];
        let mut roots = Vec::new();
        for (id, slot) in slots.iter().enumerate() {
            match slot.parent {
                Some(parent) => children[parent].push(id),
                None => roots.push(id),
            }
        }

        let mut stats = BranchStatsV1::default();
        let mut path = None;
        let mut pending: Vec<SlotId> = roots.into_iter().rev().collect();
        while let Some(id) = pending.pop() {
            if let Some(outcome) = slots[id].outcome.take() {
                let outcome = outcome?;
                stats.absorb(&outcome.stats);
                if path.is_none() {
                    path = outcome.path;
                }
            }
            pending.extend(children[id].iter().rev());
        }
        Ok(BranchOutcome { path, stats })
    }
}
