//! Logging bootstrap for integration test binaries.
//!
//! Each binary under `apps/backend/tests/` calls [`init`] from a `ctor` hook,
//! so engine `tracing` events show up alongside test output when asked for.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "warn";

/// Install a test-writer subscriber once per process.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`. An
/// unparsable directive falls back to the default instead of panicking.
///
/// ```bash
/// TEST_LOG=bowling_backend=debug cargo test -p bowling-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}

/// Filter used when neither env var is set; exposed for assertions.
pub fn default_filter() -> &'static str {
    DEFAULT_FILTER
}
