//! Headless runner: plays a seeded game with random legal moves and prints a
//! JSON report to stdout.
//!
//! ```text
//! tui-2048-headless --seed 42 --size 4 --max-moves 500
//! ```

use anyhow::Result;
use tracing::info;

use tui_2048::config::AppConfig;
use tui_2048::{headless, logging};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init_stderr(&config.log_filter)?;

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = headless::parse_args(&argv, config.seed, config.size)?;
    info!(seed = args.seed, size = args.size.get(), "headless run");

    let report = headless::run(&args);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
