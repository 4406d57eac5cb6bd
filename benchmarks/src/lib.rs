//! Shared maze regimes and solve helpers for the amazed benchmark suites.

use amazed_maze::GridMaze;
use amazed_search::scheduler::RayonScheduler;
use amazed_search::{solve_with, SolveResult, SolverPolicyV1};

/// A named maze shape the suites measure.
pub struct Regime {
    pub name: &'static str,
    pub maze: GridMaze,
}

/// Fork thresholds swept by the macro suites.
pub const THRESHOLDS: &[i64] = &[0, 4, 32, 256, i64::MAX];

/// Worker counts swept by the macro suites.
pub const WORKERS: &[usize] = &[1, 2, 4, 8];

/// Generated grids of increasing size plus one exhaustive (goalless) grid.
///
/// # Panics
///
/// Panics if a hard-coded dimension is rejected. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let generated = |name, width, height, seed| Regime {
        name,
        maze: GridMaze::generate(width, height, seed).expect("valid dimensions"),
    };
    vec![
        generated("small_31x31", 31, 31, 1),
        generated("medium_101x101", 101, 101, 2),
        generated("large_301x301", 301, 301, 3),
        Regime {
            name: "exhaustive_101x101",
            maze: goalless(101, 101, 4),
        },
    ]
}

/// A generated grid with its goal turned into an open cell, forcing the
/// search to claim every reachable cell.
///
/// # Panics
///
/// Panics if the dimensions are rejected.
#[must_use]
pub fn goalless(width: usize, height: usize, seed: u64) -> GridMaze {
    let grid = GridMaze::generate(width, height, seed).expect("valid dimensions");
    GridMaze::parse(&grid.to_text().replace('G', ".")).expect("rendered grid parses")
}

/// A worker pool built once so timed iterations measure the search alone.
pub struct SolveSetup {
    pub policy: SolverPolicyV1,
    pub scheduler: RayonScheduler,
}

/// Build the pool for `fork_threshold` on `workers` threads.
///
/// # Panics
///
/// Panics if the pool cannot be built.
#[must_use]
pub fn prepare_solve_setup(fork_threshold: i64, workers: usize) -> SolveSetup {
    let policy = SolverPolicyV1 {
        fork_threshold,
        worker_threads: Some(workers),
        ..SolverPolicyV1::default()
    };
    let scheduler = RayonScheduler::from_policy(&policy).expect("thread pool");
    SolveSetup { policy, scheduler }
}

/// Solve `regime` on a prepared pool.
///
/// # Panics
///
/// Panics if the solve fails.
#[must_use]
pub fn run_solve_only(setup: &SolveSetup, regime: &Regime) -> SolveResult {
    solve_with(
        &regime.maze,
        regime.maze.start(),
        &setup.policy,
        &setup.scheduler,
    )
    .expect("solve")
}
