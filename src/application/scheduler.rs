//! Single tick loop fed by a command queue.
//!
//! The host calls `advance` once per frame. Queued commands are applied
//! first, synchronously, then at most one tick runs if the interval has
//! elapsed. Ticks therefore never overlap, and commands never interleave
//! with a step in progress.

use std::collections::VecDeque;

use super::SimulationController;
use crate::domain::{Result, SeedKind, StepStats};

/// Discrete commands from the input dispatcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRun,
    SpeedUp,
    SpeedDown,
    Reseed(SeedKind),
    Resize { rows: usize, cols: usize },
    ToggleCell { row: usize, col: usize },
}

/// What happened during one `advance` call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub applied: usize,
    pub rejected: usize,
    pub tick: Option<StepStats>,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: VecDeque<Command>,
    elapsed_ms: f32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drain queued commands, then tick once if the interval has elapsed
    pub fn advance(&mut self, controller: &mut SimulationController, delta_secs: f32) -> FrameReport {
        let mut report = FrameReport::default();

        while let Some(command) = self.queue.pop_front() {
            match self.apply(controller, command) {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    report.rejected += 1;
                    log::warn!("Rejected {:?}: {}", command, err);
                }
            }
        }

        // Nothing is scheduled while paused
        if !controller.is_running() {
            self.elapsed_ms = 0.0;
            return report;
        }

        self.elapsed_ms += delta_secs * 1000.0;
        if self.elapsed_ms >= controller.speed_ms() as f32 {
            report.tick = controller.tick();
            self.elapsed_ms = 0.0;
        }

        report
    }

    fn apply(&mut self, controller: &mut SimulationController, command: Command) -> Result<()> {
        match command {
            Command::ToggleRun => {
                controller.toggle_run();
            }
            // A new interval restarts the pending tick
            Command::SpeedUp => {
                controller.speed_up();
                self.elapsed_ms = 0.0;
            }
            Command::SpeedDown => {
                controller.slow_down();
                self.elapsed_ms = 0.0;
            }
            Command::Reseed(kind) => controller.reseed(kind)?,
            Command::Resize { rows, cols } => controller.resize(rows, cols)?,
            Command::ToggleCell { row, col } => {
                controller.toggle_cell(row, col)?;
            }
        }
        Ok(())
    }
}
