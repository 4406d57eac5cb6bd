//! Explicit adjacency-list maze.

use std::collections::BTreeSet;

use crate::contract::MazeV1;
use crate::digest::{canonical_hash, ContentHash, DOMAIN_ADJACENCY_MAZE};
use crate::error::MazeError;
use crate::node::NodeId;

/// A static graph with nodes `0..node_count`.
///
/// Neighbors are enumerated in insertion order, which makes the path found by
/// a non-forking search fully determined by how the maze was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMaze {
    adjacency: Vec<Vec<NodeId>>,
    goals: BTreeSet<NodeId>,
}

impl AdjacencyMaze {
    /// Start building a maze with `node_count` nodes and no edges.
    #[must_use]
    pub fn builder(node_count: usize) -> AdjacencyMazeBuilder {
        AdjacencyMazeBuilder {
            node_count,
            arcs: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Goal nodes in ascending order.
    pub fn goals(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.goals.iter().copied()
    }

    /// Nodes reachable from `start` (including `start`), ascending.
    ///
    /// Plain single-threaded traversal; used as an oracle by tests and the
    /// harness, never by the solver.
    #[must_use]
    pub fn reachable_from(&self, start: NodeId) -> BTreeSet<NodeId> {
        let mut seen = BTreeSet::new();
        if !self.contains(start) {
            return seen;
        }
        let mut stack = vec![start];
        seen.insert(start);
        while let Some(node) = stack.pop() {
            for &next in &self.adjacency[node.index()] {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Content digest over node count, ordered adjacency, and goals.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut data = Vec::new();
        data.extend_from_slice(&(self.adjacency.len() as u64).to_le_bytes());
        for neighbors in &self.adjacency {
            data.extend_from_slice(&(neighbors.len() as u64).to_le_bytes());
            for n in neighbors {
                data.extend_from_slice(&(n.index() as u64).to_le_bytes());
            }
        }
        data.extend_from_slice(&(self.goals.len() as u64).to_le_bytes());
        for g in &self.goals {
            data.extend_from_slice(&(g.index() as u64).to_le_bytes());
        }
        canonical_hash(DOMAIN_ADJACENCY_MAZE, &data)
    }
}

impl MazeV1 for AdjacencyMaze {
    fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .copied()
    }

    fn has_goal(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }
}

/// Builder for [`AdjacencyMaze`]. Endpoints are validated in [`Self::build`].
#[derive(Debug, Clone)]
pub struct AdjacencyMazeBuilder {
    node_count: usize,
    arcs: Vec<(usize, usize)>,
    goals: Vec<usize>,
}

impl AdjacencyMazeBuilder {
    /// Add an undirected edge `a`–`b`.
    #[must_use]
    pub fn edge(mut self, a: usize, b: usize) -> Self {
        self.arcs.push((a, b));
        self.arcs.push((b, a));
        self
    }

    /// Add a directed arc `from`→`to`.
    #[must_use]
    pub fn arc(mut self, from: usize, to: usize) -> Self {
        self.arcs.push((from, to));
        self
    }

    /// Mark `node` as a goal.
    #[must_use]
    pub fn goal(mut self, node: usize) -> Self {
        self.goals.push(node);
        self
    }

    /// Validate endpoints and goals and produce the maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NodeOutOfRange`] if any arc endpoint or goal is
    /// not below `node_count`.
    pub fn build(self) -> Result<AdjacencyMaze, MazeError> {
        let node_count = self.node_count;
        let check = |node: usize| {
            if node < node_count {
                Ok(NodeId(node))
            } else {
                Err(MazeError::NodeOutOfRange { node, node_count })
            }
        };

        let mut adjacency = vec![Vec::new(); node_count];
        for (from, to) in self.arcs {
            let from = check(from)?;
            let to = check(to)?;
            adjacency[from.index()].push(to);
        }
        let goals = self
            .goals
            .into_iter()
            .map(check)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(AdjacencyMaze { adjacency, goals })
    }
}
