use macroquad::prelude::*;
use crate::application::{RunState, SimulationController};
use crate::domain::Grid;

const ALIVE_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0);
const OUTLINE_COLOR: Color = Color::new(0.27, 0.27, 0.27, 1.0);
const PANEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.7);
const LABEL_COLOR: Color = Color::new(0.7, 0.7, 0.7, 1.0);

const HELP: &str = "Space: run/pause  Up/Down: speed  R: pattern  C: clear  X: random  Click: edit (paused)";

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw every cell outline, filling the alive ones
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;

        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, ALIVE_COLOR);
        }
        draw_rectangle_lines(x, y, cell_size, cell_size, 0.5, OUTLINE_COLOR);
    }
}

/// Stats overlay: generation, population, last seed and run state
pub fn draw_stats(controller: &SimulationController) {
    let stats = controller.stats();
    let (rows, cols) = controller.dimensions();

    let (status, status_color) = match controller.run_state() {
        RunState::Running => ("Running", Color::from_rgba(0, 255, 0, 255)),
        RunState::Paused => ("Paused", Color::from_rgba(255, 165, 0, 255)),
    };

    let pattern = match controller.pattern_description() {
        Some(description) => format!("Pattern: {} ({})", stats.current_pattern, description),
        None => format!("Pattern: {}", stats.current_pattern),
    };

    let lines = [
        (format!("Generation: {}", stats.generation), WHITE),
        (format!("Alive: {}", format_number(stats.live_count)), WHITE),
        (pattern, LABEL_COLOR),
        (format!("Grid: {}x{}", rows, cols), LABEL_COLOR),
        (format!("Tick: {} ms", controller.speed_ms()), LABEL_COLOR),
        (status.to_owned(), status_color),
    ];

    draw_rectangle(8.0, 8.0, 380.0, 18.0 * lines.len() as f32 + 12.0, PANEL_COLOR);
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_text(text, 16.0, 28.0 + 18.0 * i as f32, 18.0, *color);
    }

    let help_y = screen_height() - 10.0;
    draw_rectangle(0.0, help_y - 16.0, screen_width(), 22.0, PANEL_COLOR);
    draw_text(HELP, 10.0, help_y, 16.0, LABEL_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
