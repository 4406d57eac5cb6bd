//! End-to-end runs from config files on disk.

use amazed_harness::config::RunConfigV1;
use amazed_harness::fixtures::FIXTURE_NAMES;
use amazed_harness::runner::run;
use amazed_harness::{HarnessError, MazeSourceV1};
use amazed_maze::NodeId;
use amazed_search::SolverPolicyV1;

#[test]
fn grid_file_config_runs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("corridor.maze"),
        "#######\n#S....#\n###.###\n#G....#\n#######\n",
    )
    .unwrap();
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        r#"{
            "maze": {"kind": "grid_file", "path": "corridor.maze"},
            "policy": {"fork_threshold": 0, "worker_threads": 2},
            "repetitions": 3
        }"#,
    )
    .unwrap();

    let config = RunConfigV1::load(&config_path).unwrap();
    let report = run(&config).unwrap();
    assert!(report.outcome_stable);
    assert!(report.all_paths_valid());
    for rep in &report.repetitions {
        // East along row 1, down column 3, west along row 3.
        assert_eq!(rep.path.as_ref().map(Vec::len), Some(7));
    }
}

#[test]
fn graph_file_config_runs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("diamond.json"),
        r#"{"node_count": 5, "edges": [[0, 1], [0, 2], [1, 3], [2, 3]], "arcs": [[3, 4]], "goals": [4], "start": 0}"#,
    )
    .unwrap();
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        r#"{"maze": {"kind": "graph_file", "path": "diamond.json"}, "repetitions": 5}"#,
    )
    .unwrap();

    let report = run(&RunConfigV1::load(&config_path).unwrap()).unwrap();
    assert_eq!(report.start, NodeId(0));
    assert!(report.outcome_stable);
    for rep in &report.repetitions {
        let path = rep.path.as_ref().unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&NodeId(4)));
    }
}

#[test]
fn every_fixture_runs_stably() {
    for name in FIXTURE_NAMES {
        let config = RunConfigV1 {
            maze: MazeSourceV1::Fixture {
                name: (*name).to_owned(),
            },
            policy: SolverPolicyV1 {
                fork_threshold: 1,
                worker_threads: Some(4),
                ..SolverPolicyV1::default()
            },
            repetitions: 4,
        };
        let report = run(&config).unwrap();
        assert!(report.outcome_stable, "fixture {name}");
        assert!(report.all_paths_valid(), "fixture {name}");
    }
}

#[test]
fn same_maze_same_digest() {
    let a = RunConfigV1::from_json_str(
        r#"{"maze": {"kind": "generated", "width": 15, "height": 15, "seed": 2}}"#,
    )
    .unwrap();
    let b = a.clone();
    assert_eq!(run(&a).unwrap().maze_digest, run(&b).unwrap().maze_digest);
}

#[test]
fn missing_maze_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        r#"{"maze": {"kind": "grid_file", "path": "absent.maze"}}"#,
    )
    .unwrap();
    let err = run(&RunConfigV1::load(&config_path).unwrap()).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }), "got {err:?}");
}
