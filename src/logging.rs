//! Tracing subscriber setup.
//!
//! The interactive binary owns the terminal, so it only logs when a log file
//! is configured. The headless runner logs to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

fn filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a subscriber writing to `config.log_path`.
///
/// Returns `Ok(false)` without installing anything when no path is set.
pub fn init_file(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;

    tracing_subscriber::registry()
        .with(filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("install tracing subscriber")?;
    Ok(true)
}

/// Install a subscriber writing to stderr.
pub fn init_stderr(directive: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}
