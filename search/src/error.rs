//! Typed solve errors.
//!
//! `SolveError` covers pre-flight failures and broken collaborators only.
//! Failing to find a goal is not an error: it is a normal
//! [`crate::solve::SolveResult`] with no path. A failed claim is not an error
//! either; it only means another branch owns the node.

use amazed_maze::NodeId;
use thiserror::Error;

/// Typed failure for a solve invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The maze reported a neighbor that is not one of its nodes.
    ///
    /// Fatal: the maze contract is broken, so no result it produced can be
    /// trusted.
    #[error("maze reported neighbor {neighbor} of {from}, which is not a maze node")]
    GraphInconsistency { from: NodeId, neighbor: NodeId },
    /// The requested start node is not part of the maze.
    #[error("start node {start} is not a maze node")]
    UnknownStart { start: NodeId },
    /// The solver policy failed validation.
    #[error("invalid solver policy: {detail}")]
    InvalidPolicy { detail: String },
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {detail}")]
    ThreadPool { detail: String },
}
