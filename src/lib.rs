//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,types}` and
//! hosts the shell-side pieces shared by both binaries: configuration,
//! logging setup, action dispatch and the headless runner.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod headless;
pub mod logging;
pub mod session;
