use super::{Cell, EngineError, Result};

/// Grid holds one generation of the simulation.
/// Cells are stored row-major; `rows` and `cols` always match the storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Zero extents are rejected rather than clamped.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimension { rows, cols });
        }
        Ok(Self::blank(rows, cols))
    }

    /// Build a grid from rows of 0/1 values (any non-zero value is alive)
    pub fn from_bits<R: AsRef<[u8]>>(bits: &[R]) -> Result<Self> {
        let rows = bits.len();
        let cols = bits.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(rows, cols)?;

        for (r, row) in bits.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(EngineError::InvalidDimension { rows, cols: row.len() });
            }
            for (c, &bit) in row.iter().enumerate() {
                let idx = grid.index(r, c);
                grid.cells[idx] = Cell::from(bit != 0);
            }
        }
        Ok(grid)
    }

    /// Dimensions already known to be positive
    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn check(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(EngineError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    /// Out-of-range coordinates read as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.check(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell and return its new state.
    /// The grid is left untouched when the coordinate is out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.check(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Number of alive cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Iterate over the positions of alive cells
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Rows of 0/1 values, mirroring `from_bits`
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.bit()).collect())
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Match another grid's extents, reusing the allocation where possible.
    /// Cell contents are unspecified afterwards; callers overwrite every cell.
    pub(crate) fn reshape(&mut self, rows: usize, cols: usize) {
        if self.rows != rows || self.cols != cols {
            self.rows = rows;
            self.cols = cols;
            self.cells.clear();
            self.cells.resize(rows * cols, Cell::Dead);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.iter_cells().count(), 28);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_toggle_flips_single_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.toggle(1, 2), Ok(Cell::Alive));
        assert!(grid.is_alive(1, 2));
        assert_eq!(grid.live_count(), 1);

        assert_eq!(grid.toggle(1, 2), Ok(Cell::Dead));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut grid = Grid::new(3, 4).unwrap();
        let before = grid.clone();

        assert_eq!(
            grid.toggle(3, 0),
            Err(EngineError::OutOfRange { row: 3, col: 0, rows: 3, cols: 4 })
        );
        assert!(grid.toggle(0, 4).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_from_bits_roundtrip_shape() {
        let grid = Grid::from_bits(&[[0u8, 1, 0], [1, 1, 0]]).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 0));
        assert!(!grid.is_alive(1, 2));
        assert_eq!(grid.to_bits(), vec![vec![0, 1, 0], vec![1, 1, 0]]);
    }

    #[test]
    fn test_from_bits_rejects_ragged_rows() {
        let ragged: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1]];
        assert!(matches!(
            Grid::from_bits(&ragged),
            Err(EngineError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_iter_alive_reports_row_col() {
        let mut grid = Grid::new(2, 5).unwrap();
        grid.set(1, 4, Cell::Alive).unwrap();
        assert_eq!(grid.iter_alive().collect::<Vec<_>>(), vec![(1, 4)]);
        assert_eq!(grid.row(1).map(|r| r[4]), Some(Cell::Alive));
        assert!(grid.row(2).is_none());
    }
}
