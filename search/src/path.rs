//! Paths, path assembly, and path validation.
//!
//! Path segments, not predecessor maps, cross branch boundaries. A branch
//! turns its private predecessor links into a segment with
//! [`trace_back_until`]. At a fork the segment is frozen into a
//! [`PrefixSegment`] that every child shares read-only; at a goal it is
//! spliced onto the prefix the branch was handed with [`assemble`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use amazed_maze::{MazeV1, NodeId};
use serde::Serialize;

/// A solve result: start node first, goal node last, consecutive nodes
/// adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// Wrap a node sequence. Returns `None` for an empty sequence.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Option<Self> {
        (!nodes.is_empty()).then_some(Self(nodes))
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// First node.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.0[0]
    }

    /// Last node.
    #[must_use]
    pub fn goal(&self) -> NodeId {
        self.0[self.0.len() - 1]
    }

    /// Number of nodes (edges + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<NodeId> {
        self.0
    }

    /// Check this path against `maze`.
    ///
    /// # Errors
    ///
    /// Returns the first [`PathDefectV1`] found, checking start, goal,
    /// adjacency of each consecutive pair, then revisits.
    pub fn validate<M: MazeV1>(&self, maze: &M, start: NodeId) -> Result<(), PathDefectV1> {
        if self.start() != start {
            return Err(PathDefectV1::WrongStart {
                expected: start,
                actual: self.start(),
            });
        }
        if !maze.has_goal(self.goal()) {
            return Err(PathDefectV1::NotAGoal { node: self.goal() });
        }
        for (index, pair) in self.0.windows(2).enumerate() {
            if !maze.neighbors(pair[0]).any(|n| n == pair[1]) {
                return Err(PathDefectV1::NotAdjacent {
                    index,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        let mut seen = HashSet::with_capacity(self.0.len());
        for &node in &self.0 {
            if !seen.insert(node) {
                return Err(PathDefectV1::Revisit { node });
            }
        }
        Ok(())
    }
}

/// Why a path is not a valid solve result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathDefectV1 {
    WrongStart { expected: NodeId, actual: NodeId },
    NotAGoal { node: NodeId },
    NotAdjacent { index: usize, from: NodeId, to: NodeId },
    Revisit { node: NodeId },
}

/// Concatenate `prefix` and `suffix`.
///
/// When the last node of `prefix` equals the first node of `suffix` the
/// junction appears once in the output.
#[must_use]
pub fn assemble(prefix: &[NodeId], suffix: &[NodeId]) -> Vec<NodeId> {
    let skip = usize::from(!prefix.is_empty() && prefix.last() == suffix.first());
    let mut out = Vec::with_capacity(prefix.len() + suffix.len() - skip);
    out.extend_from_slice(prefix);
    out.extend_from_slice(&suffix[skip..]);
    out
}

/// Walk predecessor links back from `to` until a node with no predecessor,
/// returning the segment in forward order.
#[must_use]
pub fn trace_back(predecessors: &HashMap<NodeId, NodeId>, to: NodeId) -> Vec<NodeId> {
    trace_back_until(predecessors, to, |_| false).1
}

/// Walk predecessor links back from `to`, stopping before the first node
/// that satisfies `stop` or after a node with no predecessor.
///
/// Returns the stop node, if one was met, and the nodes after it up to `to`
/// in forward order.
#[must_use]
pub fn trace_back_until(
    predecessors: &HashMap<NodeId, NodeId>,
    to: NodeId,
    stop: impl Fn(NodeId) -> bool,
) -> (Option<NodeId>, Vec<NodeId>) {
    let mut segment = vec![to];
    let mut cursor = to;
    let mut boundary = None;
    while let Some(&prev) = predecessors.get(&cursor) {
        if stop(prev) {
            boundary = Some(prev);
            break;
        }
        segment.push(prev);
        cursor = prev;
    }
    segment.reverse();
    (boundary, segment)
}

/// Frozen path from a solve's start node to a fork node.
///
/// A segment holds only the nodes after its parent's fork node, so nested
/// forks share everything above them instead of copying it.
#[derive(Debug)]
pub struct PrefixSegment {
    parent: Option<Arc<PrefixSegment>>,
    nodes: Vec<NodeId>,
}

impl PrefixSegment {
    /// Freeze `nodes`, which continue the path ending at `parent`.
    #[must_use]
    pub fn new(parent: Option<Arc<Self>>, nodes: Vec<NodeId>) -> Arc<Self> {
        Arc::new(Self { parent, nodes })
    }

    /// The full path from the solve's start node.
    #[must_use]
    pub fn to_vec(&self) -> Vec<NodeId> {
        let mut chain = vec![self];
        let mut cursor = self;
        while let Some(parent) = cursor.parent.as_deref() {
            chain.push(parent);
            cursor = parent;
        }
        let mut out = Vec::with_capacity(chain.iter().map(|s| s.nodes.len()).sum());
        for segment in chain.iter().rev() {
            out.extend_from_slice(&segment.nodes);
        }
        out
    }
}

impl Drop for PrefixSegment {
    // Unlink iteratively; deep fork chains would overflow a recursive drop.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(segment) = next {
            next = match Arc::try_unwrap(segment) {
                Ok(mut owned) => owned.parent.take(),
                Err(_) => None,
            };
        }
    }
}
