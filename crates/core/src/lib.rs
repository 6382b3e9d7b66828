//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and state management. It has **no
//! dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is reachable without a terminal
//! - **Allocation-free**: moves, spawns and snapshots work on fixed-size
//!   buffers
//!
//! # Module Structure
//!
//! - [`line`]: the compress / merge / compress pipeline applied to one line
//! - [`grid`]: the N x N board and the directional slide built on [`line`]
//! - [`engine`]: [`GridEngine`], which owns grid, score and spawn RNG
//! - [`rng`]: the [`TileRng`] injection seam and the default [`SimpleRng`]
//! - [`snapshot`]: read-only [`GameSnapshot`] copies for rendering
//!
//! # Game Rules
//!
//! - Sliding packs tiles toward the chosen edge; equal neighbours merge once
//!   per move, nearest-to-the-edge pair first
//! - Every merge adds the new tile's value to the score
//! - After a move that changed the grid, a 2 or a 4 (even odds) appears on a
//!   random empty cell
//! - The game is over when the grid is full and no two orthogonal
//!   neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Grid, GridEngine, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_rows(&[
//!     [2, 0, 2, 4],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! let mut game = GridEngine::from_grid(grid, SimpleRng::new(7));
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(game.grid().row(0), &[4, 4, 0, 0]);
//! assert_eq!(game.score(), 4);
//! ```

pub mod engine;
pub mod grid;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{GridEngine, PlayOutcome};
pub use grid::{Grid, GridSize, MoveOutcome};
pub use line::{can_merge, compress, merge, slide_line, MergeStats};
pub use rng::{SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
