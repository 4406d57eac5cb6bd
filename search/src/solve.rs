//! Solve entry points.

use amazed_maze::{MazeV1, NodeId};
use serde::Serialize;
use tracing::info;

use crate::abort::AbortSignal;
use crate::branch::{Branch, BranchStatsV1, SearchContext};
use crate::claim::ClaimSet;
use crate::error::SolveError;
use crate::join::JoinLedger;
use crate::path::Path;
use crate::policy::SolverPolicyV1;
use crate::scheduler::{ForkJoinScheduler, InlineScheduler, RayonScheduler};

/// Result of one solve invocation.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Start-to-goal path, or `None` when no goal is reachable.
    pub path: Option<Path>,
    pub report: SolveReportV1,
    /// Every node claimed during the solve, ascending.
    pub claimed: Vec<NodeId>,
}

impl SolveResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.report.termination, TerminationReasonV1::GoalReached { .. })
    }
}

/// Serializable summary of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReportV1 {
    pub start: NodeId,
    pub fork_threshold: i64,
    pub termination: TerminationReasonV1,
    pub nodes_claimed: u64,
    #[serde(flatten)]
    pub stats: BranchStatsV1,
}

/// Why a solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReasonV1 {
    /// Some branch entered a goal node.
    GoalReached { goal: NodeId, path_len: u64 },
    /// Every branch emptied its frontier without entering a goal.
    FrontierExhausted,
}

/// Solve with the default policy and the given fork threshold.
///
/// Shorthand for [`solve_with_policy`] with
/// [`SolverPolicyV1::with_fork_threshold`]: a non-positive threshold forks at
/// the first branch point, and the pool has one worker per core.
///
/// # Errors
///
/// See [`solve_with_policy`].
pub fn solve<M: MazeV1>(
    maze: &M,
    start: NodeId,
    fork_threshold: i64,
) -> Result<SolveResult, SolveError> {
    solve_with_policy(maze, start, &SolverPolicyV1::with_fork_threshold(fork_threshold))
}

/// Solve on a fresh work-stealing pool sized by `policy`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidPolicy`] or [`SolveError::ThreadPool`] for
/// executor problems, [`SolveError::UnknownStart`] if `start` is not in the
/// maze, and [`SolveError::GraphInconsistency`] if the maze breaks its
/// contract during the search.
pub fn solve_with_policy<M: MazeV1>(
    maze: &M,
    start: NodeId,
    policy: &SolverPolicyV1,
) -> Result<SolveResult, SolveError> {
    policy.validate()?;
    let scheduler = RayonScheduler::from_policy(policy)?;
    solve_with(maze, start, policy, &scheduler)
}

/// Single-threaded baseline: one branch, no forks.
///
/// # Errors
///
/// Same as [`solve_with_policy`], minus the executor errors.
pub fn solve_sequential<M: MazeV1>(maze: &M, start: NodeId) -> Result<SolveResult, SolveError> {
    solve_with(maze, start, &SolverPolicyV1::sequential(), &InlineScheduler)
}

/// Solve with a caller-supplied scheduler.
///
/// The claim set and abort signal are created here and dropped on return, so
/// concurrent or repeated invocations never observe each other.
///
/// # Errors
///
/// See [`solve_with_policy`].
pub fn solve_with<M, S>(
    maze: &M,
    start: NodeId,
    policy: &SolverPolicyV1,
    scheduler: &S,
) -> Result<SolveResult, SolveError>
where
    M: MazeV1,
    S: ForkJoinScheduler,
{
    policy.validate()?;
    if !maze.contains(start) {
        return Err(SolveError::UnknownStart { start });
    }

    let claims = ClaimSet::new();
    let abort = AbortSignal::new();
    claims.claim(start);

    info!(
        start = %start,
        fork_threshold = policy.fork_threshold,
        "search.solve.start"
    );

    let ledger = JoinLedger::new();
    let ctx = SearchContext {
        maze,
        claims: &claims,
        abort: &abort,
        ledger: &ledger,
        gate: policy.fork_gate(),
    };
    let root = Branch::root(start, &ledger);
    scheduler.run_scope(move |spawner| root.run(ctx, spawner));
    let outcome = ledger.join()?;

    let termination = match &outcome.path {
        Some(path) => TerminationReasonV1::GoalReached {
            goal: path.goal(),
            path_len: path.len() as u64,
        },
        None => TerminationReasonV1::FrontierExhausted,
    };
    let report = SolveReportV1 {
        start,
        fork_threshold: policy.fork_threshold,
        termination,
        nodes_claimed: claims.len() as u64,
        stats: outcome.stats,
    };

    info!(
        found = outcome.path.is_some(),
        nodes_claimed = report.nodes_claimed,
        branches = report.stats.branches,
        forks = report.stats.forks,
        expansions = report.stats.expansions,
        "search.solve.completed"
    );

    Ok(SolveResult {
        path: outcome.path,
        report,
        claimed: claims.into_sorted_vec(),
    })
}
