//! Tracing setup for the roster CLI.
//!
//! Usage:
//!   roster                         # warnings and errors only
//!   roster --verbose               # debug logging, one line per store call
//!   RUST_LOG=roster_db=debug roster
//!
//! Logs go to stderr so tables and `--json` output on stdout stay clean.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
