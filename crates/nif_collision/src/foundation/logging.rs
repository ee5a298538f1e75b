//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Calling it more than once is harmless.
pub fn init() {
    let _ = env_logger::try_init();
}

/// Initialize logging with an explicit default filter (e.g. `"nif_collision=debug"`)
///
/// `RUST_LOG` still overrides the default when it is set.
pub fn init_with_filter(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Initialize logging for unit tests, capturing output per test
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
