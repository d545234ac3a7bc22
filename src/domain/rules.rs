//! Generation stepping for Conway's Game of Life (B3/S23).
//!
//! The grid has hard edges: neighbor offsets falling outside the grid are
//! skipped, so border cells see fewer than eight neighbors. Every step reads
//! a stable snapshot of the previous generation and writes a separate output
//! buffer, so no cell is ever read after it was updated in the same step.

use super::{Cell, Grid};
use rayon::prelude::*;

/// Moore neighborhood as (row, col) offsets
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Statistics derived from one step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Alive cells in the produced generation
    pub live_count: usize,
    /// Whether any cell differs from the previous generation
    pub changed: bool,
}

impl StepStats {
    fn merge(self, other: Self) -> Self {
        Self {
            live_count: self.live_count + other.live_count,
            changed: self.changed || other.changed,
        }
    }
}

/// A freshly allocated successor grid plus its statistics
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub grid: Grid,
    pub live_count: usize,
    pub changed: bool,
}

/// In-bounds Moore neighbors of (row, col)
pub fn neighbors(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        grid.contains(r, c).then_some((r, c))
    })
}

/// Count live neighbors without wrapping around the edges
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    neighbors(grid, row, col)
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

/// Compute one row of the next generation into `out`
fn evolve_row(prev: &Grid, row: usize, out: &mut [Cell]) -> StepStats {
    let mut stats = StepStats::default();
    let current = prev.row(row).unwrap_or_default();

    for (col, (slot, &cell)) in out.iter_mut().zip(current).enumerate() {
        let next = cell.evolve(count_live_neighbors(prev, row, col));
        stats.changed |= next != cell;
        if next.is_alive() {
            stats.live_count += 1;
        }
        *slot = next;
    }

    stats
}

/// Pure functional evolution - returns a new grid
pub fn step(grid: &Grid) -> StepOutcome {
    let (rows, cols) = grid.dimensions();
    let mut next = Grid::blank(rows, cols);
    let stats = step_into(grid, &mut next);
    StepOutcome {
        grid: next,
        live_count: stats.live_count,
        changed: stats.changed,
    }
}

/// Write the successor of `prev` into `next` (serial).
/// `next` is reshaped to match `prev` and every cell is overwritten, so it
/// can be a reused scratch buffer from an earlier step.
pub fn step_into(prev: &Grid, next: &mut Grid) -> StepStats {
    let (rows, cols) = prev.dimensions();
    next.reshape(rows, cols);

    next.cells_mut()
        .chunks_mut(cols)
        .enumerate()
        .map(|(row, out)| evolve_row(prev, row, out))
        .fold(StepStats::default(), StepStats::merge)
}

/// Parallel variant of `step_into` using rayon over rows.
/// Produces exactly the same grid and statistics as the serial version.
pub fn step_into_parallel(prev: &Grid, next: &mut Grid) -> StepStats {
    let (rows, cols) = prev.dimensions();
    next.reshape(rows, cols);

    next.cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .map(|(row, out)| evolve_row(prev, row, out))
        .reduce(StepStats::default, StepStats::merge)
}
