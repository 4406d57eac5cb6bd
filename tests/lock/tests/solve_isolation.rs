//! Solves share no state: repeated and concurrent invocations each see a
//! fresh claim set and abort signal. A broken maze fails the whole solve.

use std::thread;

use amazed_maze::{GridMaze, MazeV1, NodeId};
use amazed_search::{solve_with_policy, SolveError};
use lock_tests::maze_helpers::{goalless_grid, pooled, reachable, undirected};

#[test]
fn repeated_solves_start_fresh() {
    let maze = undirected(4, &[(0, 1), (1, 2), (2, 3)], &[3]);
    for _ in 0..20 {
        let result = solve_with_policy(&maze, NodeId(0), &pooled(0, 2)).unwrap();
        assert_eq!(result.path.unwrap().len(), 4);
    }
}

#[test]
fn concurrent_solves_do_not_interfere() {
    let solvable = GridMaze::generate(41, 31, 3).unwrap();
    let goalless = goalless_grid(41, 31, 3);
    let expected = reachable(&goalless, goalless.start());

    thread::scope(|s| {
        let mut handles = Vec::new();
        for i in 0..8 {
            let solvable = &solvable;
            let goalless = &goalless;
            let expected = &expected;
            handles.push(s.spawn(move || {
                if i % 2 == 0 {
                    let result =
                        solve_with_policy(solvable, solvable.start(), &pooled(1, 2)).unwrap();
                    let path = result.path.unwrap();
                    assert_eq!(path.validate(solvable, solvable.start()), Ok(()));
                } else {
                    // An abort raised by a concurrent solvable run must not
                    // cut this exhaustive search short.
                    let result =
                        solve_with_policy(goalless, goalless.start(), &pooled(0, 2)).unwrap();
                    assert!(result.path.is_none());
                    assert_eq!(&result.claimed, expected);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    });
}

/// A binary tree of depth 6 whose deepest leaf reports a neighbor the maze
/// does not contain.
struct BrokenTree;

impl BrokenTree {
    const NODES: usize = 127;
    const BAD_LEAF: usize = 126;
}

impl MazeV1 for BrokenTree {
    fn contains(&self, node: NodeId) -> bool {
        node.index() < Self::NODES
    }

    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let i = node.index();
        let adjacent = if i == Self::BAD_LEAF {
            vec![NodeId(Self::NODES + 1)]
        } else if 2 * i + 2 < Self::NODES {
            vec![NodeId(2 * i + 1), NodeId(2 * i + 2)]
        } else {
            Vec::new()
        };
        adjacent.into_iter()
    }

    fn has_goal(&self, _node: NodeId) -> bool {
        false
    }
}

#[test]
fn inconsistency_anywhere_fails_the_solve() {
    let expected = SolveError::GraphInconsistency {
        from: NodeId(BrokenTree::BAD_LEAF),
        neighbor: NodeId(BrokenTree::NODES + 1),
    };
    for threshold in [0, 1, 4, i64::MAX] {
        for workers in [1, 3, 8] {
            let err = solve_with_policy(&BrokenTree, NodeId(0), &pooled(threshold, workers))
                .unwrap_err();
            assert_eq!(err, expected, "threshold={threshold} workers={workers}");
        }
    }
}
