//! Whether a path exists never depends on fork threshold, worker count, or
//! scheduling; any returned path is valid.

use amazed_maze::{AdjacencyMaze, NodeId};
use amazed_search::{solve_sequential, solve_with_policy};
use lock_tests::maze_helpers::pooled;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct RandomMaze {
    node_count: usize,
    edges: Vec<(usize, usize)>,
    goals: Vec<usize>,
    start: usize,
}

impl RandomMaze {
    fn build(&self) -> AdjacencyMaze {
        let mut builder = AdjacencyMaze::builder(self.node_count);
        for &(a, b) in &self.edges {
            builder = builder.edge(a, b);
        }
        for &g in &self.goals {
            builder = builder.goal(g);
        }
        builder.build().unwrap()
    }
}

fn arb_maze() -> impl Strategy<Value = RandomMaze> {
    (2usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..n * 2),
            prop::collection::vec(0..n, 0..3),
            0..n,
        )
            .prop_map(move |(edges, goals, start)| RandomMaze {
                node_count: n,
                edges,
                goals,
                start,
            })
    })
}

fn arb_threshold() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0i64), 1i64..8, Just(i64::MAX), -4i64..0]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_found_iff_goal_reachable(
        shape in arb_maze(),
        threshold in arb_threshold(),
        workers in 1usize..6,
    ) {
        let maze = shape.build();
        let start = NodeId(shape.start);
        let reachable = maze.reachable_from(start);
        let goal_reachable = maze.goals().any(|g| reachable.contains(&g));

        let result = solve_with_policy(&maze, start, &pooled(threshold, workers)).unwrap();
        prop_assert_eq!(result.path.is_some(), goal_reachable);
        prop_assert!(result.claimed.iter().all(|n| reachable.contains(n)));

        match &result.path {
            Some(path) => prop_assert_eq!(path.validate(&maze, start), Ok(())),
            None => {
                let expected: Vec<NodeId> = reachable.iter().copied().collect();
                prop_assert_eq!(&result.claimed, &expected);
            }
        }
    }

    #[test]
    fn prop_sequential_agrees_with_pool(shape in arb_maze(), threshold in arb_threshold()) {
        let maze = shape.build();
        let start = NodeId(shape.start);
        let sequential = solve_sequential(&maze, start).unwrap();
        let parallel = solve_with_policy(&maze, start, &pooled(threshold, 3)).unwrap();
        prop_assert_eq!(sequential.path.is_some(), parallel.path.is_some());
    }
}
