//! Long corridors with a side branch at every step fork once per corridor
//! node. However many forks a solve performs, worker stacks stay flat.

use amazed_maze::NodeId;
use amazed_search::{solve, solve_with_policy, SolverPolicyV1};
use lock_tests::maze_helpers::{comb, pooled};

const SPINE: usize = 10_000;

#[test]
fn corridor_first_comb_under_default_policy() {
    let maze = comb(SPINE, true);
    let result = solve_with_policy(&maze, NodeId(0), &SolverPolicyV1::default()).unwrap();

    let path = result.path.unwrap();
    assert_eq!(path.validate(&maze, NodeId(0)), Ok(()));
    assert_eq!(path.len(), SPINE);
    // The corridor branch forks a dead end off at every node before the goal.
    assert_eq!(result.report.stats.forks, SPINE as u64 - 1);
}

#[test]
fn dead_end_first_comb_under_default_policy() {
    // Each fork keeps the dead end and hands the corridor to a new branch,
    // so the corridor is walked by a chain of SPINE nested children.
    let maze = comb(SPINE, false);
    let result = solve(&maze, NodeId(0), 0).unwrap();

    let path = result.path.unwrap();
    assert_eq!(path.validate(&maze, NodeId(0)), Ok(()));
    assert_eq!(path.len(), SPINE);
    assert_eq!(result.report.stats.forks, SPINE as u64 - 1);
    assert_eq!(result.report.stats.branches, SPINE as u64);
}

#[test]
fn deep_comb_on_one_and_two_workers() {
    for spine_first in [true, false] {
        let maze = comb(SPINE, spine_first);
        for workers in [1, 2] {
            let result = solve_with_policy(&maze, NodeId(0), &pooled(0, workers)).unwrap();
            let path = result.path.unwrap();
            assert_eq!(path.len(), SPINE, "spine_first={spine_first} workers={workers}");
            // The goal's own dead end is never claimed.
            assert_eq!(result.claimed.len(), 2 * SPINE - 1);
        }
    }
}
