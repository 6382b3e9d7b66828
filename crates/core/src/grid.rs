//! Grid module - the N x N tile matrix
//!
//! The grid is stored as a flat, row-major array with room for the largest
//! supported board, so copies are cheap and moves never allocate.
//! Coordinates are `(row, col)`, both starting at 0 in the top-left corner.
//! A cell holds [`EMPTY`] (0) or a tile value (a power of two).

use arrayvec::ArrayVec;

use crate::line::{can_merge, slide_line, MergeStats};
use crate::types::{
    Direction, DEFAULT_GRID_SIZE, EMPTY, MAX_CELLS, MAX_GRID_SIZE, MIN_GRID_SIZE,
};

/// Validated board edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize(u8);

impl GridSize {
    /// The classic 4x4 board
    pub const CLASSIC: GridSize = GridSize(DEFAULT_GRID_SIZE);

    /// Returns `None` outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`
    pub fn new(n: u8) -> Option<Self> {
        if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Edge length as `u8`
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Edge length as `usize`
    pub fn edge(&self) -> usize {
        self.0 as usize
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.edge() * self.edge()
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Result of sliding the grid in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Did any cell change position or value
    pub changed: bool,
    /// Score earned by merges during this move
    pub score_gained: u32,
    /// Number of merges performed
    pub merges: u32,
}

/// The tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    /// Row-major cells; only the first `size * size` entries are used and the
    /// rest stay `EMPTY`.
    cells: [u32; MAX_CELLS],
}

impl Grid {
    /// Create an empty grid
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: [EMPTY; MAX_CELLS],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns `None` when the rows are not square, the size is unsupported,
    /// or a value is neither empty nor a power of two.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Option<Self> {
        let n = u8::try_from(rows.len()).ok()?;
        let size = GridSize::new(n)?;
        let mut grid = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size.edge() {
                return None;
            }
            for (c, &v) in row.iter().enumerate() {
                if !is_tile_value(v) {
                    return None;
                }
                grid.cells[r * size.edge() + c] = v;
            }
        }
        Some(grid)
    }

    /// Copy the grid out as nested rows (for reports and tests)
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells().chunks(self.size.edge()).map(|row| row.to_vec()).collect()
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Edge length as `usize`
    pub fn width(&self) -> usize {
        self.size.edge()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.width();
        if row >= n || col >= n {
            return None;
        }
        Some(row * n + col)
    }

    /// Get cell at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at `(row, col)`.
    ///
    /// Returns false, leaving the grid untouched, when the position is out of
    /// bounds or `value` is neither empty nor a power of two.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if !is_tile_value(value) {
            return false;
        }
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Set a cell by flat index (as returned by [`Grid::empty_cells`])
    pub(crate) fn set_flat(&mut self, index: usize, value: u32) {
        debug_assert!(index < self.size.cell_count());
        self.cells[index] = value;
    }

    /// The used cells, row-major
    pub fn cells(&self) -> &[u32] {
        &self.cells[..self.size.cell_count()]
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[u32] {
        let n = self.width();
        &self.cells[row * n..(row + 1) * n]
    }

    /// Flat indices of all empty cells, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<usize, MAX_CELLS> {
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells().iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&v| v != EMPTY)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells().iter().copied().max().unwrap_or(EMPTY)
    }

    /// Any two orthogonally adjacent cells that would merge
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.width();
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r * n + c];
                if !can_merge(v) {
                    continue;
                }
                if c + 1 < n && self.cells[r * n + c + 1] == v {
                    return true;
                }
                if r + 1 < n && self.cells[(r + 1) * n + c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Rows become columns
    pub fn transpose(&self) -> Self {
        let n = self.width();
        let mut out = Self::new(self.size);
        for r in 0..n {
            for c in 0..n {
                out.cells[c * n + r] = self.cells[r * n + c];
            }
        }
        out
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Flat index of position `pos` along line `line`, viewed from `direction`.
    ///
    /// Up/Down read the transposed grid (lines are columns); Right/Down read
    /// each line back to front. Position 0 is always the edge tiles slide to.
    #[inline(always)]
    fn line_cell(&self, direction: Direction, line: usize, pos: usize) -> usize {
        let n = self.width();
        let along = if direction.is_reversed() { n - 1 - pos } else { pos };
        if direction.is_vertical() {
            along * n + line
        } else {
            line * n + along
        }
    }

    /// Slide every line toward `direction` using the compress/merge/compress
    /// pipeline.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let n = self.width();
        let mut total = MergeStats::default();
        let mut changed = false;

        for line in 0..n {
            let mut buf = [EMPTY; MAX_GRID_SIZE as usize];
            let buf = &mut buf[..n];
            for (pos, slot) in buf.iter_mut().enumerate() {
                *slot = self.cells[self.line_cell(direction, line, pos)];
            }

            let mut before = [EMPTY; MAX_GRID_SIZE as usize];
            before[..n].copy_from_slice(buf);

            total.absorb(slide_line(buf));
            if before[..n] != *buf {
                changed = true;
            }

            for (pos, &v) in buf.iter().enumerate() {
                let i = self.line_cell(direction, line, pos);
                self.cells[i] = v;
            }
        }

        MoveOutcome {
            changed,
            score_gained: total.points,
            merges: total.merges,
        }
    }
}

/// Empty, or a power of two
#[inline(always)]
fn is_tile_value(v: u32) -> bool {
    v == EMPTY || v.is_power_of_two()
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridSize::CLASSIC)
    }
}
