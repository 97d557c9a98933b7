use macroquad::prelude::*;

use crate::application::{SandboxState, Viewport};
use crate::domain::TileType;
use crate::ui::{Button, ButtonAction, Slider};

/// Paint with the left mouse button, erase with the right.
/// Painting keeps working while the simulation runs.
pub fn handle_mouse_paint(state: &mut SandboxState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if !viewport.contains(mouse_pos.0, mouse_pos.1) {
        return;
    }

    let (grid_x, grid_y) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1, state.grid.dimensions());

    if is_mouse_button_down(MouseButton::Left) {
        state.brush.paint(&mut state.grid, grid_x, grid_y, &mut ::rand::rng());
    } else if is_mouse_button_down(MouseButton::Right) {
        state.brush.erase(&mut state.grid, grid_x, grid_y);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: SandboxState) -> SandboxState {
    type KeyAction = (KeyCode, fn(SandboxState) -> SandboxState);

    let actions: [KeyAction; 10] = [
        (KeyCode::Space, SandboxState::toggle_running),
        (KeyCode::S, SandboxState::step_once),
        (KeyCode::C, SandboxState::clear),
        (KeyCode::R, SandboxState::randomize),
        (KeyCode::Key1, |s| s.select_tile(TileType::Sand)),
        (KeyCode::Key2, |s| s.select_tile(TileType::Water)),
        (KeyCode::Up, |s| s.adjust_brush_size(1)),
        (KeyCode::Down, |s| s.adjust_brush_size(-1)),
        (KeyCode::Right, |s| s.adjust_brush_density(1.25)),
        (KeyCode::Left, |s| s.adjust_brush_density(0.8)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Apply the action of whichever button was clicked
pub fn process_button_clicks(state: SandboxState, buttons: &[Button], mouse_pos: (f32, f32)) -> SandboxState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| match btn.action {
            ButtonAction::PlayPause => s.toggle_running(),
            ButtonAction::Step => s.step_once(),
            ButtonAction::Clear => s.clear(),
            ButtonAction::Randomize => s.randomize(),
            ButtonAction::Select(tile) => s.select_tile(tile),
        })
}

/// Feed slider drags into the brush. Returns true while a slider is held.
pub fn process_sliders(state: &mut SandboxState, sliders: &mut [Slider; 2], mouse_pos: (f32, f32)) -> bool {
    if let Some(size) = sliders[0].update(mouse_pos) {
        state.brush.size = size.round() as i32;
    }
    if let Some(density) = sliders[1].update(mouse_pos) {
        state.brush.density = density;
    }
    sliders.iter().any(Slider::is_dragging)
}
