use thiserror::Error;

/// Errors raised by the simulation engine.
///
/// None of these are transient: the engine is pure in-memory computation,
/// so a failed call can simply be reported and the previous state kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A grid was requested with a zero extent, or rows of unequal length.
    #[error("invalid grid dimension {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// A cell coordinate outside the current grid extents.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Pattern selection with no registered patterns.
    #[error("pattern catalog is empty")]
    EmptyCatalog,

    /// A configuration value outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
