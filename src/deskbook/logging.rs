//! Logging bootstrap.
//!
//! Events go to stderr through `tracing-subscriber`'s fmt layer so they never
//! interleave with session output on stdout. `RUST_LOG` takes precedence over
//! the level passed in.
//!
//! Initialization runs at most once per process; later calls are no-ops.

use crate::error::{DeskbookError, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Installs the global subscriber with `level` as the fallback filter.
pub fn init_logging(level: &str) -> Result<()> {
    LOGGING
        .get_or_try_init(|| {
            let filter = build_filter(level)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| DeskbookError::Config(format!("failed to initialize logging: {e}")))
        })
        .map(|_| ())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| DeskbookError::Config(format!("invalid log level `{level}`: {e}")))
}
