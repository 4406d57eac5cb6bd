//! Tracing subscriber setup for binaries and tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "amazed_search=info,amazed_harness=info";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive`.
///
/// Safe to call repeatedly; only the first call has any effect, and a
/// subscriber installed elsewhere is left in place.
pub fn init_tracing(default_directive: &str) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    });
}
