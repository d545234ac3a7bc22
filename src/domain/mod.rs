mod cell;
mod error;
mod grid;
mod patterns;
pub mod resize;
pub mod rules;
pub mod seeding;

pub use cell::Cell;
pub use error::EngineError;
pub use grid::Grid;
pub use patterns::{Pattern, PatternLibrary, presets};
pub use rules::{StepOutcome, StepStats, step};
pub use seeding::SeedKind;

/// Result type used throughout the engine
pub type Result<T> = std::result::Result<T, EngineError>;
