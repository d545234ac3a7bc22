use macroquad::prelude::*;
use crate::application::{Command, EngineConfig, Scheduler, SimulationController, viewport};
use crate::domain::SeedKind;

/// Key to command table
pub const KEY_BINDINGS: [(KeyCode, Command); 6] = [
    (KeyCode::Space, Command::ToggleRun),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SpeedDown),
    (KeyCode::R, Command::Reseed(SeedKind::Pattern)),
    (KeyCode::C, Command::Reseed(SeedKind::Empty)),
    (KeyCode::X, Command::Reseed(SeedKind::Random)),
];

/// Queue a command for every bound key pressed this frame
pub fn process_keyboard_input(scheduler: &mut Scheduler) {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, command)| scheduler.submit(*command));
}

/// Map a screen position to a (row, col) inside the grid
pub fn screen_to_cell(pos: (f32, f32), cell_size: f32, dimensions: (usize, usize)) -> Option<(usize, usize)> {
    let (x, y) = pos;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    let (rows, cols) = dimensions;
    (row < rows && col < cols).then_some((row, col))
}

/// Left click flips a cell, only while paused
pub fn handle_mouse_toggle(controller: &SimulationController, config: &EngineConfig, scheduler: &mut Scheduler) {
    if controller.is_running() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some((row, col)) = screen_to_cell(mouse_position(), config.cell_size, controller.dimensions()) {
        scheduler.submit(Command::ToggleCell { row, col });
    }
}

/// Queue a resize when the window no longer matches the grid
pub fn detect_resize(controller: &SimulationController, config: &EngineConfig, scheduler: &mut Scheduler) {
    let (rows, cols) = viewport::grid_dimensions(screen_width(), screen_height(), config);
    if (rows, cols) != controller.dimensions() {
        scheduler.submit(Command::Resize { rows, cols });
    }
}
