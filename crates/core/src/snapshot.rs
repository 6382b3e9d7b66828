use crate::types::{EMPTY, MAX_CELLS};

/// Read-only copy of everything a view needs to draw one frame.
///
/// Snapshots are plain `Copy` values; nothing in them points back into the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Board edge length
    pub size: u8,
    /// Row-major cells; entries past `size * size` are `EMPTY`
    pub cells: [u32; MAX_CELLS],
    /// FNV-1a hash of the used cells
    pub board_hash: u64,
    pub score: u32,
    /// Effective (grid-changing) moves this episode
    pub moves: u32,
    pub episode_id: u32,
    pub max_tile: u32,
    pub empty_count: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.cells = [EMPTY; MAX_CELLS];
        self.board_hash = fnv1a64_cells(&[]);
        self.score = 0;
        self.moves = 0;
        self.episode_id = 0;
        self.max_tile = 0;
        self.empty_count = 0;
        self.game_over = false;
    }

    /// Edge length as `usize`
    pub fn width(&self) -> usize {
        self.size as usize
    }

    /// Cell at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        let n = self.width();
        if row >= n || col >= n {
            return None;
        }
        Some(self.cells[row * n + col])
    }

    /// The used cells, row-major
    pub fn used_cells(&self) -> &[u32] {
        &self.cells[..self.width() * self.width()]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks(0) panics; a cleared snapshot has no rows.
        self.used_cells().chunks(self.width().max(1))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: 0,
            cells: [EMPTY; MAX_CELLS],
            board_hash: 0,
            score: 0,
            moves: 0,
            episode_id: 0,
            max_tile: 0,
            empty_count: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}

/// Stable 64-bit FNV-1a over the little-endian bytes of each cell.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions, so it
/// is not used for hashes that may be logged or compared between runs.
pub fn fnv1a64_cells(cells: &[u32]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut h = OFFSET_BASIS;
    for v in cells {
        for b in v.to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        }
    }
    h
}
