mod button;
mod slider;

pub use button::{Button, ButtonAction};
pub use slider::Slider;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{BRUSH_DENSITY_RANGE, BRUSH_SIZE_RANGE, Viewport};
use crate::domain::TileType;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Square region the sandbox is drawn into
pub fn grid_viewport() -> Viewport {
    Viewport::fit(grid_area_width(), grid_area_height())
}

/// Create panel buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    let half = (PANEL_WIDTH - 10.0) / 2.0;
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Play/Pause", ButtonAction::PlayPause),
        Button::new(px, 64.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step", ButtonAction::Step),
        Button::new(px, 108.0, half, BUTTON_HEIGHT, "Clear", ButtonAction::Clear),
        Button::new(px + half + 10.0, 108.0, half, BUTTON_HEIGHT, "Random", ButtonAction::Randomize),
        Button::new(px, 170.0, half, BUTTON_HEIGHT, "Sand", ButtonAction::Select(TileType::Sand)),
        Button::new(px + half + 10.0, 170.0, half, BUTTON_HEIGHT, "Water", ButtonAction::Select(TileType::Water)),
    ]
}

/// Brush size and density sliders, in that order
pub fn create_sliders() -> [Slider; 2] {
    let px = panel_x();
    [
        Slider::new(
            px,
            250.0,
            PANEL_WIDTH,
            "Brush Size",
            *BRUSH_SIZE_RANGE.start() as f32,
            *BRUSH_SIZE_RANGE.end() as f32,
        ),
        Slider::new(
            px,
            300.0,
            PANEL_WIDTH,
            "Brush Density",
            *BRUSH_DENSITY_RANGE.start(),
            *BRUSH_DENSITY_RANGE.end(),
        ),
    ]
}

/// Reposition sliders after a window resize
pub fn layout_sliders(sliders: &mut [Slider; 2]) {
    let px = panel_x();
    sliders[0].set_position(px, 250.0);
    sliders[1].set_position(px, 300.0);
}
