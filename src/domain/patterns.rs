use super::{Cell, EngineError, Grid, Result};
use rand::Rng;

/// A named seed shape.
/// Offsets are (row, col) pairs relative to the pattern center at (0, 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub offsets: Vec<(isize, isize)>,
}

impl Pattern {
    /// Create a pattern from center-relative offsets
    pub fn new(name: &'static str, description: &'static str, offsets: Vec<(isize, isize)>) -> Self {
        Self { name, description, offsets }
    }

    /// Create a pattern from (row, col) cells drawn from a top-left origin.
    /// The bounding box is shifted so its middle lands on (0, 0).
    pub fn from_cells(name: &'static str, description: &'static str, cells: &[(usize, usize)]) -> Self {
        let height = cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let width = cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        let (mid_r, mid_c) = ((height / 2) as isize, (width / 2) as isize);

        let offsets = cells
            .iter()
            .map(|&(r, c)| (r as isize - mid_r, c as isize - mid_c))
            .collect();
        Self::new(name, description, offsets)
    }

    /// Bounding box as (height, width)
    pub fn extent(&self) -> (usize, usize) {
        fn span(values: impl Iterator<Item = isize>) -> usize {
            let (min, max) = values.fold((isize::MAX, isize::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
            if min > max { 0 } else { (max - min + 1) as usize }
        }
        (
            span(self.offsets.iter().map(|&(r, _)| r)),
            span(self.offsets.iter().map(|&(_, c)| c)),
        )
    }

    /// Stamp the pattern alive around (center_row, center_col).
    /// Cells landing outside the grid are skipped; returns how many were placed.
    pub fn place_on(&self, grid: &mut Grid, center_row: usize, center_col: usize) -> usize {
        self.offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = center_row.checked_add_signed(dr)?;
                let c = center_col.checked_add_signed(dc)?;
                grid.set(r, c, Cell::Alive).ok()
            })
            .count()
    }
}

/// Read-only catalog of seed patterns, never empty once constructed
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    pub fn new(patterns: Vec<Pattern>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self { patterns })
    }

    /// The built-in catalog of classic shapes
    pub fn classic() -> Self {
        Self {
            patterns: presets::all_patterns(),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }

    /// Pick one pattern uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Pattern {
        &self.patterns[rng.random_range(0..self.patterns.len())]
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::classic()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    #[rustfmt::skip]
    pub fn glider() -> Pattern {
        Pattern::from_cells(
            "glider",
            "Moves diagonally (period 4)",
            &[
                         (0, 1),
                                 (1, 2),
                (2, 0),  (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_cells("blinker", "Oscillator (period 2)", &[(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    #[rustfmt::skip]
    pub fn toad() -> Pattern {
        Pattern::from_cells(
            "toad",
            "Oscillator (period 2)",
            &[
                        (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    #[rustfmt::skip]
    pub fn beacon() -> Pattern {
        Pattern::from_cells(
            "beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (0, 1),
                (1, 0),
                                        (2, 3),
                                (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator, symmetric in both axes
    pub fn pulsar() -> Pattern {
        const BARS: [usize; 4] = [0, 5, 7, 12];
        const SPANS: [usize; 6] = [2, 3, 4, 8, 9, 10];

        let cells: Vec<(usize, usize)> = BARS
            .iter()
            .flat_map(|&bar| SPANS.iter().flat_map(move |&span| [(bar, span), (span, bar)]))
            .collect();
        Pattern::from_cells("pulsar", "Oscillator (period 3)", &cells)
    }

    /// Lightweight Spaceship (LWSS)
    #[rustfmt::skip]
    pub fn lwss() -> Pattern {
        Pattern::from_cells(
            "lwss",
            "Lightweight spaceship (period 4)",
            &[
                        (0, 1),                 (0, 4),
                (1, 0),
                (2, 0),                         (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    #[rustfmt::skip]
    pub fn glider_gun() -> Pattern {
        Pattern::from_cells(
            "gosper-glider-gun",
            "Produces gliders (period 30)",
            &[
                // Left square
                (4, 0), (5, 0), (4, 1), (5, 1),
                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),
                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),
                // Right square
                (2, 34), (3, 34), (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    #[rustfmt::skip]
    pub fn r_pentomino() -> Pattern {
        Pattern::from_cells(
            "r-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                        (0, 1), (0, 2),
                (1, 0), (1, 1),
                        (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    #[rustfmt::skip]
    pub fn acorn() -> Pattern {
        Pattern::from_cells(
            "acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                        (0, 1),
                                        (1, 3),
                (2, 0), (2, 1),                 (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Diehard - vanishes after 130 generations
    #[rustfmt::skip]
    pub fn diehard() -> Pattern {
        Pattern::from_cells(
            "diehard",
            "Methuselah - dies out at gen 130",
            &[
                                                                (0, 6),
                (1, 0), (1, 1),
                        (2, 1),                         (2, 5), (2, 6), (2, 7),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_cells("block", "Still life", &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            diehard(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(PatternLibrary::new(Vec::new()), Err(EngineError::EmptyCatalog)));
    }

    #[test]
    fn test_classic_names_are_unique() {
        let library = PatternLibrary::classic();
        let names: HashSet<_> = library.names().collect();
        assert_eq!(names.len(), library.len());
        assert!(!library.is_empty());
    }

    #[test]
    fn test_from_cells_centers_bounding_box() {
        let blinker = presets::blinker();
        assert_eq!(blinker.offsets, vec![(0, -1), (0, 0), (0, 1)]);
        assert_eq!(blinker.extent(), (1, 3));

        let block = presets::block();
        assert_eq!(block.offsets, vec![(-1, -1), (-1, 0), (0, -1), (0, 0)]);
    }

    #[test]
    fn test_pulsar_shape() {
        let pulsar = presets::pulsar();
        assert_eq!(pulsar.offsets.len(), 48);
        assert_eq!(pulsar.extent(), (13, 13));
        let unique: HashSet<_> = pulsar.offsets.iter().collect();
        assert_eq!(unique.len(), 48);
    }

    #[test]
    fn test_place_on_centers_pattern() {
        let mut grid = Grid::new(10, 10).unwrap();
        let placed = presets::glider().place_on(&mut grid, 5, 5);

        assert_eq!(placed, 5);
        let alive: Vec<_> = grid.iter_alive().collect();
        assert_eq!(alive, vec![(4, 5), (5, 6), (6, 4), (6, 5), (6, 6)]);
    }

    #[test]
    fn test_place_on_clips_to_grid() {
        let gun = presets::glider_gun();
        let mut grid = Grid::new(4, 6).unwrap();
        let placed = gun.place_on(&mut grid, 2, 3);

        assert!(placed < gun.offsets.len());
        assert_eq!(placed, grid.live_count());

        let expected: HashSet<(usize, usize)> = gun
            .offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let (r, c) = (2 + dr, 3 + dc);
                (0..4).contains(&r).then_some(())?;
                (0..6).contains(&c).then_some((r as usize, c as usize))
            })
            .collect();
        assert_eq!(grid.iter_alive().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_choose_is_uniform_over_catalog() {
        let library = PatternLibrary::classic();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..500).map(|_| library.choose(&mut rng).name).collect();
        assert_eq!(seen.len(), library.len());
    }

    #[test]
    fn test_classic_patterns_are_described() {
        let library = PatternLibrary::classic();
        for name in library.names() {
            let description = library.get(name).map(|p| p.description);
            assert!(description.is_some_and(|d| !d.is_empty()), "{name} has no description");
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let library = PatternLibrary::classic();
        assert_eq!(library.get("acorn").map(|p| p.offsets.len()), Some(7));
        assert!(library.get("unknown").is_none());
    }
}
