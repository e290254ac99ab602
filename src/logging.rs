//! Logging setup.
//!
//! The game owns the terminal (alternate screen, raw mode), so logs never go to
//! stderr. They are appended to a file when one is configured and dropped
//! otherwise. The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Install the global logger writing to `log_path`. Returns whether a logger
/// was installed.
pub fn init_logging(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    log::info!("tui-sidescroll {} starting", env!("CARGO_PKG_VERSION"));
    Ok(true)
}
