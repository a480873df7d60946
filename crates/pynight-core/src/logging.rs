//! Tracing setup
//!
//! Logs go to stderr so the demo's own output on stdout stays clean.

use crate::decorator::DECORATOR_TARGET;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given debug flag
#[must_use]
pub const fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Build the filter from an optional `RUST_LOG` value and the debug flag
///
/// `env` takes precedence over the debug flag. Decorator traces stay enabled
/// at `info` either way.
#[must_use]
pub fn filter(debug: bool, env: Option<&str>) -> EnvFilter {
    let filter = EnvFilter::new(env.unwrap_or(default_directive(debug)));
    match format!("{DECORATOR_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global fmt subscriber
///
/// Returns `false` if a subscriber was already installed, which is not an
/// error.
pub fn init(debug: bool) -> bool {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter(debug, env.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
