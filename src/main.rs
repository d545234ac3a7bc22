use clap::Parser;
use macroquad::prelude::*;
use life_canvas::{
    application::{Args, EngineConfig, Scheduler, SimulationController, viewport},
    domain::PatternLibrary,
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1200,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match EngineConfig::from_args(Args::parse()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            return;
        }
    };

    let (rows, cols) = viewport::grid_dimensions(screen_width(), screen_height(), &config);
    let mut controller = match SimulationController::new(&config, rows, cols, PatternLibrary::classic()) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("Failed to initialize simulation: {}", err);
            return;
        }
    };
    controller.start();

    let mut scheduler = Scheduler::new();

    loop {
        input::process_keyboard_input(&mut scheduler);
        input::handle_mouse_toggle(&controller, &config, &mut scheduler);
        input::detect_resize(&controller, &config, &mut scheduler);

        scheduler.advance(&mut controller, get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(controller.grid(), config.cell_size);
        rendering::draw_stats(&controller);

        next_frame().await;
    }
}
