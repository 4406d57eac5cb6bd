//! Harness runner: load a maze, solve it repeatedly, check every result.
//!
//! # Pipeline
//!
//! ```text
//! RunConfigV1 → load_maze() → [solve_with_policy() → Path::validate()] × repetitions
//!   → RunReportV1 { maze_digest, repetitions, outcome_stable }
//! ```
//!
//! Forking makes the returned path vary between repetitions; whether a path
//! exists does not, and `outcome_stable` records that.

use amazed_maze::digest::ContentHash;
use amazed_maze::{MazeV1, NodeId};
use amazed_search::path::PathDefectV1;
use amazed_search::solve::SolveReportV1;
use amazed_search::{solve_with_policy, SolverPolicyV1};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::RunConfigV1;
use crate::error::HarnessError;
use crate::load::{load_maze, LoadedMaze, LoadedMazeV1};

/// Outcome of one repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepetitionReportV1 {
    pub index: u32,
    pub found: bool,
    pub path: Option<Vec<NodeId>>,
    /// Set when the returned path fails validation against the maze.
    pub path_defect: Option<PathDefectV1>,
    pub report: SolveReportV1,
}

/// Result of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReportV1 {
    pub maze_digest: ContentHash,
    pub start: NodeId,
    pub policy: SolverPolicyV1,
    pub repetitions: Vec<RepetitionReportV1>,
    /// Every repetition agreed on whether a path exists.
    pub outcome_stable: bool,
}

impl RunReportV1 {
    /// Whether every repetition produced a valid path or none at all.
    #[must_use]
    pub fn all_paths_valid(&self) -> bool {
        self.repetitions.iter().all(|r| r.path_defect.is_none())
    }
}

/// Execute a run described by `config`.
///
/// # Errors
///
/// Returns [`HarnessError`] if the config is invalid, the maze cannot be
/// loaded, or any repetition fails to solve.
pub fn run(config: &RunConfigV1) -> Result<RunReportV1, HarnessError> {
    config.validate()?;
    let loaded = load_maze(&config.maze)?;
    run_loaded(&loaded, &config.policy, config.repetitions)
}

/// Execute `repetitions` solves of an already loaded maze.
///
/// # Errors
///
/// Returns [`HarnessError::Solve`] on the first failing repetition.
pub fn run_loaded(
    loaded: &LoadedMazeV1,
    policy: &SolverPolicyV1,
    repetitions: u32,
) -> Result<RunReportV1, HarnessError> {
    let maze_digest = loaded.digest();
    let reports = match &loaded.maze {
        LoadedMaze::Graph(m) => repeat(m, loaded.start, policy, repetitions)?,
        LoadedMaze::Grid(m) => repeat(m, loaded.start, policy, repetitions)?,
    };

    let outcome_stable = reports.windows(2).all(|w| w[0].found == w[1].found);
    if !outcome_stable {
        warn!(maze_digest = %maze_digest, "harness.run.outcome_unstable");
    }

    info!(
        maze_digest = %maze_digest,
        repetitions = reports.len(),
        found = reports.first().is_some_and(|r| r.found),
        outcome_stable,
        "harness.run.completed"
    );

    Ok(RunReportV1 {
        maze_digest,
        start: loaded.start,
        policy: policy.clone(),
        repetitions: reports,
        outcome_stable,
    })
}

fn repeat<M: MazeV1>(
    maze: &M,
    start: NodeId,
    policy: &SolverPolicyV1,
    repetitions: u32,
) -> Result<Vec<RepetitionReportV1>, HarnessError> {
    let mut reports = Vec::with_capacity(repetitions as usize);
    for index in 0..repetitions {
        let result = solve_with_policy(maze, start, policy)?;
        let path_defect = result
            .path
            .as_ref()
            .and_then(|p| p.validate(maze, start).err());
        if let Some(defect) = &path_defect {
            warn!(index, ?defect, "harness.run.path_defect");
        }
        reports.push(RepetitionReportV1 {
            index,
            found: result.path.is_some(),
            path: result.path.map(amazed_search::Path::into_vec),
            path_defect,
            report: result.report,
        });
    }
    Ok(reports)
}
