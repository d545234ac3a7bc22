use super::{Cell, Grid, Result};

/// Copy the live cells of `old` into a fresh grid of the new extents.
///
/// A cell survives when its row fits the new row count and its column fits
/// the new column count. Nothing is re-centered; cells past the new edges are
/// dropped.
pub fn remap(old: &Grid, new_rows: usize, new_cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(new_rows, new_cols)?;
    for (row, col) in old.iter_alive() {
        if row < new_rows && col < new_cols {
            grid.set(row, col, Cell::Alive)?;
        }
    }
    Ok(grid)
}
