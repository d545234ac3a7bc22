//! Builds fresh grids: centered catalog patterns, uniform noise, or empty.

use super::{EngineError, Grid, Pattern, PatternLibrary, Result};
use rand::Rng;

/// Default chance that a cell starts alive when randomizing
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

/// Label recorded for randomized grids
pub const RANDOM_SEED_NAME: &str = "random";

/// Label recorded for cleared grids
pub const EMPTY_SEED_NAME: &str = "empty";

/// Which kind of seeding to perform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedKind {
    Pattern,
    Empty,
    Random,
}

/// Place `pattern` centered at (rows / 2, cols / 2), dropping cells that do not fit
pub fn place_centered(pattern: &Pattern, rows: usize, cols: usize) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    pattern.place_on(&mut grid, rows / 2, cols / 2);
    Ok(grid)
}

/// Seed from one catalog entry chosen uniformly at random.
/// Returns the grid together with the chosen pattern's name.
pub fn seed_from_pattern<'a, R: Rng + ?Sized>(
    library: &'a PatternLibrary,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<(Grid, &'a str)> {
    let pattern = library.choose(rng);
    let grid = place_centered(pattern, rows, cols)?;
    Ok((grid, pattern.name))
}

/// Each cell independently alive with `alive_probability`
pub fn seed_random<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Result<Grid> {
    validate_probability(alive_probability)?;
    let mut grid = Grid::new(rows, cols)?;
    grid.cells_mut()
        .iter_mut()
        .for_each(|cell| *cell = rng.random_bool(alive_probability).into());
    Ok(grid)
}

/// All cells dead
pub fn seed_empty(rows: usize, cols: usize) -> Result<Grid> {
    Grid::new(rows, cols)
}

pub(crate) fn validate_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!(
            "alive probability must be within [0, 1], got {p}"
        )))
    }
}
