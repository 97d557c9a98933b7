use macroquad::prelude::*;
use falling_sand::{
    SandboxConfig, SandboxState,
    config::CONFIG_ENV_VAR,
    ui, rendering, input,
};

fn window_conf(config: &SandboxConfig) -> Conf {
    Conf {
        window_title: "Sandbox".to_owned(),
        window_width: config.window_width + ui::PANEL_WIDTH as i32,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config path from the first CLI argument, else the environment
fn load_config() -> SandboxConfig {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

    let Some(path) = path else {
        log::info!("No config file given, using defaults");
        return SandboxConfig::default();
    };

    match SandboxConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Failed to load config {}: {} - using defaults", path, e);
            SandboxConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    log::debug!("{:?}", config);
    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: SandboxConfig) {
    let mut state = match SandboxState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Invalid sandbox config: {} - using defaults", e);
            match SandboxState::new(&SandboxConfig::default()) {
                Ok(state) => state,
                Err(e) => {
                    log::error!("Default config rejected: {}", e);
                    return;
                }
            }
        }
    };

    let (width, height) = state.grid.dimensions();
    log::info!(
        "Sandbox running: {}x{} grid, simulating every {} frames",
        width,
        height,
        state.simulation_interval
    );

    let mut sliders = ui::create_sliders();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let mouse_pos = mouse_position();
        let viewport = ui::grid_viewport();
        let buttons = ui::create_buttons();
        ui::layout_sliders(&mut sliders);

        // Widgets take the mouse before the brush does
        let slider_held = input::process_sliders(&mut state, &mut sliders, mouse_pos);
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        if !slider_held && mouse_pos.0 < ui::grid_area_width() {
            input::handle_mouse_paint(&mut state, &viewport, mouse_pos);
        }
        state = input::process_keyboard_input(state);

        state = state.tick(get_time());

        let render_start = std::time::Instant::now();
        clear_background(rendering::BACKGROUND);
        rendering::draw_instances(&state.instances, &viewport);
        rendering::draw_frame(&state, &viewport, mouse_pos);
        rendering::draw_controls(&state, &buttons, &sliders, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }

    log::info!("Sandbox closed after {} generations", state.grid.generation());
}
