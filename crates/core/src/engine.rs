//! Grid engine - owns the board, the score and the spawn RNG
//!
//! The engine is the only thing allowed to mutate a grid. Callers drive it
//! one direction at a time and read back [`GameSnapshot`]s:
//!
//! 1. [`GridEngine::apply_move`] slides the grid and reports whether it changed
//! 2. on change, [`GridEngine::spawn_random_tile`] places a new 2 or 4
//! 3. the caller re-renders from [`GridEngine::snapshot`]
//!
//! [`GridEngine::play`] bundles steps 1 and 2.

use crate::grid::{Grid, GridSize, MoveOutcome};
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::{fnv1a64_cells, GameSnapshot};
use crate::types::{Direction, INITIAL_TILES, SPAWN_VALUES};

/// Result of [`GridEngine::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayOutcome {
    pub moved: MoveOutcome,
    /// A tile was placed after the move
    pub spawned: bool,
    /// No direction can change the grid anymore
    pub terminal: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GridEngine<R: TileRng = SimpleRng> {
    grid: Grid,
    score: u32,
    rng: R,
    /// Effective moves in the current episode
    moves: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    started: bool,
}

impl GridEngine<SimpleRng> {
    /// Create an empty game seeded with `seed`
    pub fn new(size: GridSize, seed: u32) -> Self {
        Self::with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: TileRng> GridEngine<R> {
    /// Create an empty game drawing spawns from `rng`
    pub fn with_rng(size: GridSize, rng: R) -> Self {
        Self {
            grid: Grid::new(size),
            score: 0,
            rng,
            moves: 0,
            episode_id: 0,
            started: false,
        }
    }

    /// Resume from an arbitrary position. The game counts as started.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            score: 0,
            rng,
            moves: 0,
            episode_id: 0,
            started: true,
        }
    }

    /// Place the opening tiles. Does nothing once the game has started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    /// FNV-1a hash of the used cells. Equal boards hash equal across runs.
    pub fn board_hash(&self) -> u64 {
        fnv1a64_cells(self.grid.cells())
    }

    /// Slide every tile toward `direction`, merging equal neighbours.
    ///
    /// Merge points are added to the score. When the outcome reports
    /// `changed == false` the grid and score are exactly as before.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.grid.slide(direction);
        if outcome.changed {
            self.score = self.score.saturating_add(outcome.score_gained);
            self.moves += 1;
        }
        outcome
    }

    /// Apply a move, then spawn a tile if the grid changed.
    pub fn play(&mut self, direction: Direction) -> PlayOutcome {
        let moved = self.apply_move(direction);
        let spawned = moved.changed && self.spawn_random_tile();
        PlayOutcome {
            moved,
            spawned,
            terminal: self.is_terminal(),
        }
    }

    /// Place a 2 or a 4 (even odds) on a uniformly chosen empty cell.
    ///
    /// Returns false, without touching the grid, when there is no empty cell.
    pub fn spawn_random_tile(&mut self) -> bool {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return false;
        }

        let cell = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = SPAWN_VALUES[self.rng.next_range(SPAWN_VALUES.len() as u32) as usize];
        self.grid.set_flat(cell, value);
        true
    }

    /// Full board with no equal orthogonal neighbours: no move can change it.
    pub fn is_terminal(&self) -> bool {
        self.grid.is_full() && !self.grid.has_adjacent_pair()
    }

    /// Would sliding toward `direction` change the grid?
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut scratch = self.grid;
        scratch.slide(direction).changed
    }

    /// [`GridEngine::can_move`] for each direction, in [`Direction::ALL`] order
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|d| self.can_move(d))
    }

    /// Clear board and score, bump the episode id and place fresh opening
    /// tiles. The RNG stream continues rather than restarting.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = false;
        self.start();
    }

    /// Read-only copy of the current state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Allocation-free variant of [`GridEngine::snapshot`]
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        let cells = self.grid.cells();
        out.size = self.grid.size().get();
        out.cells[..cells.len()].copy_from_slice(cells);
        out.board_hash = self.board_hash();
        out.score = self.score;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.max_tile = self.grid.max_tile();
        out.empty_count = self.grid.empty_count() as u32;
        out.game_over = self.is_terminal();
    }
}
