//! Logging initialization.
//!
//! One entry point installs a `tracing` fmt subscriber. The filter comes from
//! `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "sentence_clipboard=info,tower_http=info";

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
