mod config;
mod controller;
mod scheduler;
pub mod viewport;

pub use config::{Args, EngineConfig};
pub use controller::{
    MAX_SPEED_MS, MIN_SPEED_MS, RunState, SPEED_STEP_MS, SimulationController, SimulationStats, clamp_speed,
};
pub use scheduler::{Command, FrameReport, Scheduler};
