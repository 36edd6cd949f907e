//! Logging setup.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` does not mention this crate.
pub const DEFAULT_DIRECTIVE: &str = "minimal_browser=info";

/// Installs the global `tracing` subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init() {
    let directive: Directive = DEFAULT_DIRECTIVE
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .try_init();
}
