//! Line pipeline - the heart of every move
//!
//! A "line" is one row or column, already oriented so that sliding means
//! moving toward index 0. Every directional move runs the same three steps on
//! each line: [`compress`], [`merge`], [`compress`].
//!
//! All functions work in place on caller-provided buffers, so a move never
//! allocates.

use crate::types::{EMPTY, MAX_TILE};

/// What a merge pass produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Sum of all newly created tile values
    pub points: u32,
    /// Number of pairs merged
    pub merges: u32,
}

impl MergeStats {
    /// Accumulate another line's result into this one
    pub fn absorb(&mut self, other: MergeStats) {
        self.points = self.points.saturating_add(other.points);
        self.merges += other.merges;
    }
}

/// Can a tile of value `v` merge with an equal neighbour?
///
/// Empty cells never merge and neither do [`MAX_TILE`] tiles, whose double
/// does not fit in a cell.
#[inline(always)]
pub fn can_merge(v: u32) -> bool {
    v != EMPTY && v < MAX_TILE
}

/// Move every non-empty tile toward index 0, keeping relative order.
///
/// Trailing positions are refilled with [`EMPTY`]. No merging happens here.
///
/// ```
/// use tui_2048_core::line::compress;
///
/// let mut line = [2, 0, 2, 4];
/// compress(&mut line);
/// assert_eq!(line, [2, 2, 4, 0]);
/// ```
pub fn compress(line: &mut [u32]) {
    let mut write = 0;
    for read in 0..line.len() {
        let v = line[read];
        if v != EMPTY {
            line[write] = v;
            write += 1;
        }
    }
    for cell in &mut line[write..] {
        *cell = EMPTY;
    }
}

/// Single left-to-right merge sweep over a compressed line.
///
/// When `line[i]` equals `line[i + 1]` the pair becomes `2 * line[i]` at `i`
/// and an empty cell at `i + 1`. The emptied cell cannot start a pair, so a
/// tile created in this pass never merges again: `[2, 2, 4]` gives `[4, 0, 4]`,
/// and `[2, 2, 2, 2]` gives `[4, 0, 4, 0]`. A pair of [`MAX_TILE`]s is left
/// alone.
///
/// ```
/// use tui_2048_core::line::merge;
///
/// let mut line = [2, 2, 4, 0];
/// let stats = merge(&mut line);
/// assert_eq!(line, [4, 0, 4, 0]);
/// assert_eq!(stats.points, 4);
/// ```
pub fn merge(line: &mut [u32]) -> MergeStats {
    let mut stats = MergeStats::default();
    for i in 0..line.len().saturating_sub(1) {
        if can_merge(line[i]) && line[i] == line[i + 1] {
            line[i] *= 2;
            stats.points = stats.points.saturating_add(line[i]);
            stats.merges += 1;
            line[i + 1] = EMPTY;
        }
    }
    stats
}

/// Full slide of one line: compress, merge, compress.
pub fn slide_line(line: &mut [u32]) -> MergeStats {
    compress(line);
    let stats = merge(line);
    compress(line);
    stats
}
