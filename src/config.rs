//! Runtime configuration from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed (default: derived from the system clock)
//! - `TUI_2048_SIZE`: grid edge length, 2..=8 (default: 4)
//! - `TUI_2048_LOG_PATH`: write tracing output to this file
//! - `TUI_2048_LOG`: tracing filter directive (default: "info")
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GridSize;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub size: GridSize,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            size: GridSize::CLASSIC,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TUI_2048_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let size = lookup("TUI_2048_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .and_then(GridSize::new)
            .unwrap_or_default();

        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("TUI_2048_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            size,
            log_path,
            log_filter,
        }
    }
}

/// Seed from the wall clock; never 0.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
        .max(1)
}
