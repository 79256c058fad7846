// system-tests/tests/helpers/logging.rs
// ============================================================================
// Module: Test Logging
// Description: Once-per-process tracing subscriber setup for suites.
// Purpose: Make dispatch and teardown diagnostics visible under RUST_LOG.
// Dependencies: tracing-subscriber
// ============================================================================

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber once for the whole test process.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("booker_client=debug,system_tests=debug"));
        // A concurrently installed subscriber is fine; first one wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
