//! Harness errors.

use std::path::PathBuf;

use amazed_maze::MazeError;
use amazed_search::SolveError;
use thiserror::Error;

/// Error during config loading, maze loading, or a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),
    #[error("solve failed: {0}")]
    Solve(#[from] SolveError),
    #[error("unknown fixture {name:?}")]
    UnknownFixture { name: String },
    #[error("invalid run config: {detail}")]
    InvalidConfig { detail: String },
}
