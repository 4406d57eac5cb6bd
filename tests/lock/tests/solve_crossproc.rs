//! Cross-process determinism for unforked solves.
//!
//! Spawns the `solve_fixture` binary under several environment variants and
//! asserts identical stdout. Forking solves are checked for outcome only.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("solve_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(args: &[&str], work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.args(args).current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (args={args:?}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn line<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|l| l.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
        .unwrap_or_else(|| panic!("output missing {key}: {output}"))
}

#[test]
fn unforked_output_identical_across_env_variants() {
    let root = workspace_root();
    let tmp = std::env::temp_dir().to_string_lossy().to_string();
    let args = ["generated:41:41:7"];

    let baseline = run_variant(&args, &root, &[]);
    assert!(line(&baseline, "maze_digest").starts_with("sha256:"));
    assert_eq!(line(&baseline, "found"), "true");
    assert_eq!(line(&baseline, "path_valid"), "true");
    assert_eq!(line(&baseline, "forks"), "0");

    let variants: [(&str, &[(&str, &str)]); 3] = [
        (root.as_str(), &[("LC_ALL", "C")]),
        (tmp.as_str(), &[("LANG", "en_US.UTF-8")]),
        (root.as_str(), &[("RUST_LOG", "debug")]),
    ];
    for (dir, overrides) in variants {
        let output = run_variant(&args, dir, overrides);
        assert_eq!(output, baseline, "dir={dir} overrides={overrides:?}");
    }
}

#[test]
fn fixture_outputs_are_exact() {
    let root = workspace_root();
    let output = run_variant(&["two_branches"], &root, &[]);
    assert_eq!(line(&output, "path"), "0,1,3");
    assert_eq!(line(&output, "termination_reason"), "goal_reached");

    let output = run_variant(&["isolated_start", "0", "4"], &root, &[]);
    assert_eq!(line(&output, "found"), "false");
    assert_eq!(line(&output, "termination_reason"), "frontier_exhausted");
    assert_eq!(line(&output, "nodes_claimed"), "1");
    assert_eq!(line(&output, "path"), "");
}

#[test]
fn forking_runs_agree_on_outcome() {
    let root = workspace_root();
    let args = ["generated:61:41:13", "0", "8"];
    let first = run_variant(&args, &root, &[]);
    for _ in 0..3 {
        let again = run_variant(&args, &root, &[]);
        assert_eq!(line(&again, "maze_digest"), line(&first, "maze_digest"));
        assert_eq!(line(&again, "found"), "true");
        assert_eq!(line(&again, "path_valid"), "true");
    }
}
