//! Tracing subscriber setup.
//!
//! The libraries only emit `tracing` events (the form field logs rejected
//! input at `debug`); an application calls [`install`] once to print them.

use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `info` (idempotent).
///
/// Returns `false` if another global subscriber was already set. Later
/// calls return the first call's result.
pub fn install() -> bool {
    install_with_filter(
        EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .from_env_lossy(),
    )
}

/// Installs a `fmt` subscriber with explicit filter directives such as
/// `"spectrum_form=debug"` (idempotent).
///
/// Returns `false` if another global subscriber was already set.
pub fn install_with_directives(directives: &str) -> bool {
    install_with_filter(EnvFilter::new(directives))
}

fn install_with_filter(filter: EnvFilter) -> bool {
    *TRACING_INSTALLED.get_or_init(|| {
        let console = fmt::layer().with_target(true).with_filter(filter);
        let result = tracing_subscriber::registry().with(console).try_init();
        if result.is_err() {
            eprintln!("spectrum tracing subscriber failed to initialize");
        }
        result.is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_is_idempotent() {
        let first = install_with_directives("spectrum_form=debug");
        assert_eq!(install(), first);
        assert_eq!(TRACING_INSTALLED.get(), Some(&first));
    }
}
