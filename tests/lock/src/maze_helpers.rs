//! Maze and policy builders shared by the acceptance tests.

use std::collections::BTreeSet;

use amazed_maze::{AdjacencyMaze, GridMaze, MazeV1, NodeId};
use amazed_search::SolverPolicyV1;

/// Fork thresholds every scenario is exercised with: eager, small, large,
/// and effectively never.
pub const THRESHOLDS: &[i64] = &[0, 1, 3, 16, i64::MAX];

/// Worker counts every scenario is exercised with.
pub const WORKERS: &[usize] = &[1, 2, 4, 8];

/// A policy on a pool of `workers` threads.
#[must_use]
pub fn pooled(fork_threshold: i64, workers: usize) -> SolverPolicyV1 {
    SolverPolicyV1 {
        fork_threshold,
        worker_threads: Some(workers),
        ..SolverPolicyV1::default()
    }
}

/// Raw indices to node ids.
#[must_use]
pub fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}

/// Undirected maze from an edge list.
///
/// # Panics
///
/// Panics if an endpoint or goal is not below `node_count`.
#[must_use]
pub fn undirected(node_count: usize, edges: &[(usize, usize)], goals: &[usize]) -> AdjacencyMaze {
    let mut builder = AdjacencyMaze::builder(node_count);
    for &(a, b) in edges {
        builder = builder.edge(a, b);
    }
    for &g in goals {
        builder = builder.goal(g);
    }
    builder.build().expect("edge list within node_count")
}

/// Directed maze from an arc list.
///
/// # Panics
///
/// Panics if an endpoint or goal is not below `node_count`.
#[must_use]
pub fn directed(node_count: usize, arcs: &[(usize, usize)], goals: &[usize]) -> AdjacencyMaze {
    let mut builder = AdjacencyMaze::builder(node_count);
    for &(from, to) in arcs {
        builder = builder.arc(from, to);
    }
    for &g in goals {
        builder = builder.goal(g);
    }
    builder.build().expect("arc list within node_count")
}

/// Every node reachable from `start` through `neighbors`, ascending.
#[must_use]
pub fn reachable<M: MazeV1>(maze: &M, start: NodeId) -> Vec<NodeId> {
    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for next in maze.neighbors(node) {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen.into_iter().collect()
}

/// A long corridor `0..spine` with a one-node dead end hanging off every
/// corridor node, goal at the corridor's far end.
///
/// With `spine_first` each corridor node lists the next corridor node before
/// its dead end; otherwise the dead end comes first.
///
/// # Panics
///
/// Panics if `spine` is zero.
#[must_use]
pub fn comb(spine: usize, spine_first: bool) -> AdjacencyMaze {
    let mut builder = AdjacencyMaze::builder(2 * spine);
    for i in 0..spine {
        if spine_first && i + 1 < spine {
            builder = builder.edge(i, i + 1);
        }
        builder = builder.edge(i, spine + i);
        if !spine_first && i + 1 < spine {
            builder = builder.edge(i, i + 1);
        }
    }
    builder.goal(spine - 1).build().expect("comb within node_count")
}

/// A generated grid with its goal cell turned into an open cell.
///
/// # Panics
///
/// Panics if the dimensions are rejected by [`GridMaze::generate`].
#[must_use]
pub fn goalless_grid(width: usize, height: usize, seed: u64) -> GridMaze {
    let grid = GridMaze::generate(width, height, seed).expect("valid dimensions");
    GridMaze::parse(&grid.to_text().replace('G', ".")).expect("rendered grid parses")
}
