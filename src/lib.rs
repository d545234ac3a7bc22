// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Controller, scheduling and configuration
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, EngineError, Grid, Pattern, PatternLibrary, SeedKind, presets};
pub use application::{Command, EngineConfig, Scheduler, SimulationController, SimulationStats};
