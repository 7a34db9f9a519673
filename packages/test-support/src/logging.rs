//! Tracing subscriber for test binaries.
//!
//! Output goes through the test writer so it only shows for failing tests
//! (or with `--nocapture`). Verbosity comes from `TEST_LOG`, falling back to
//! `RUST_LOG`, then [`DEFAULT_DIRECTIVES`].

use std::env;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_DIRECTIVES: &str = "warn";

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Install the subscriber once per process; later calls do nothing.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let directives = directives(env::var("TEST_LOG").ok(), env::var("RUST_LOG").ok());
        // Another subscriber may already be set by the harness.
        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

fn directives(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .into_iter()
        .chain(rust_log)
        .find(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_owned())
}
