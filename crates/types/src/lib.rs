//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the grid engine, the input
//! mapping and the terminal view. Everything here is plain data with no
//! dependencies.
//!
//! # Grid Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//! | `MIN_GRID_SIZE` | 2 | Smallest playable board |
//! | `MAX_GRID_SIZE` | 8 | Largest board (bounds the fixed-capacity buffers) |
//! | `MAX_CELLS` | 64 | `MAX_GRID_SIZE` squared |
//!
//! # Spawning
//!
//! - `INITIAL_TILES`: 2 tiles are placed before the first move
//! - `SPAWN_VALUES`: a new tile is a 2 or a 4, chosen with equal probability
//! - `MAX_TILE`: tiles cap at 2^31; a pair of capped tiles stays unmerged
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Default board edge length (4x4)
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Smallest supported board edge length
pub const MIN_GRID_SIZE: u8 = 2;

/// Largest supported board edge length
pub const MAX_GRID_SIZE: u8 = 8;

/// Capacity of the flat cell storage (`MAX_GRID_SIZE` squared)
pub const MAX_CELLS: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// Number of tiles placed when a game starts
pub const INITIAL_TILES: u8 = 2;

/// Values a freshly spawned tile can take. Drawn uniformly.
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Empty cell marker
pub const EMPTY: u32 = 0;

/// Largest tile a `u32` cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// The four slide directions
///
/// Tiles move toward the named edge of the board:
/// - **Left**: toward column 0
/// - **Right**: toward the last column
/// - **Up**: toward row 0
/// - **Down**: toward the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order used by `legal_moves`
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True for Up/Down, which operate on columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for Right/Down, which read lines from the far edge
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Index into `Direction::ALL`
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Actions a player (or the headless runner) can apply to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward column 0
    MoveLeft,
    /// Slide all tiles toward the last column
    MoveRight,
    /// Slide all tiles toward row 0
    MoveUp,
    /// Slide all tiles toward the last row
    MoveDown,
    /// Clear the board and score and start over
    Restart,
}

impl GameAction {
    /// Wrap a direction as a move action
    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }

    /// The slide direction, if this is a move
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }

    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}
