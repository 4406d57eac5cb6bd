//! Cooperative "goal found, stop searching" flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Write-once-to-true flag shared by all branches of one solve.
///
/// Advisory only: branches poll it once per exploration step, so a bounded
/// amount of work may still happen after it is raised. Correctness never
/// depends on how fast it propagates.
#[derive(Debug, Default)]
pub struct AbortSignal {
    found: AtomicBool,
}

impl AbortSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Idempotent.
    pub fn signal_found(&self) {
        self.found.store(true, Ordering::Release);
    }

    /// Whether the flag has been raised.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }
}
