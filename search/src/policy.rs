//! Solver policy types.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Default stack size for pool workers.
pub const DEFAULT_WORKER_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Fork and executor configuration for one solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverPolicyV1 {
    /// Exploration steps a branch takes (since its start or its last fork)
    /// before it may fork again.
    pub fork_threshold: i64,
    /// Meaning of `fork_threshold <= 0`.
    pub non_positive_threshold: NonPositiveThresholdV1,
    /// Worker thread count. `None` lets the pool pick (one per core).
    pub worker_threads: Option<usize>,
    /// Worker stack size. `None` uses [`DEFAULT_WORKER_STACK_BYTES`].
    pub worker_stack_bytes: Option<usize>,
}

impl SolverPolicyV1 {
    /// Default policy with the given fork threshold.
    #[must_use]
    pub fn with_fork_threshold(fork_threshold: i64) -> Self {
        Self {
            fork_threshold,
            ..Self::default()
        }
    }

    /// A policy whose branches never reach the fork threshold, on one worker.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            fork_threshold: i64::MAX,
            worker_threads: Some(1),
            ..Self::default()
        }
    }

    /// Validate executor settings.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidPolicy`] if `worker_threads` or
    /// `worker_stack_bytes` is `Some(0)`.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.worker_threads == Some(0) {
            return Err(SolveError::InvalidPolicy {
                detail: "worker_threads must be at least 1".into(),
            });
        }
        if self.worker_stack_bytes == Some(0) {
            return Err(SolveError::InvalidPolicy {
                detail: "worker_stack_bytes must be non-zero".into(),
            });
        }
        Ok(())
    }

    /// Resolve the threshold into the gate branches consult.
    #[must_use]
    pub fn fork_gate(&self) -> ForkGate {
        match u64::try_from(self.fork_threshold) {
            Ok(steps) if steps > 0 => ForkGate::After(steps),
            _ => match self.non_positive_threshold {
                NonPositiveThresholdV1::ForkImmediately => ForkGate::After(0),
                NonPositiveThresholdV1::NeverFork => ForkGate::Never,
            },
        }
    }
}

impl Default for SolverPolicyV1 {
    fn default() -> Self {
        Self {
            fork_threshold: 0,
            non_positive_threshold: NonPositiveThresholdV1::ForkImmediately,
            worker_threads: None,
            worker_stack_bytes: None,
        }
    }
}

/// How a non-positive `fork_threshold` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonPositiveThresholdV1 {
    /// Fork at the first point with more than one new neighbor.
    #[default]
    ForkImmediately,
    /// Never fork; the whole search runs as one branch.
    NeverFork,
}

/// Resolved fork decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkGate {
    /// Fork once at least this many steps were taken since the last fork.
    After(u64),
    /// Never fork.
    Never,
}

impl ForkGate {
    /// Whether a branch point reached after `steps_since_fork` steps may fork.
    #[must_use]
    pub fn permits(self, steps_since_fork: u64) -> bool {
        match self {
            Self::After(threshold) => steps_since_fork >= threshold,
            Self::Never => false,
        }
    }
}
