use macroquad::prelude::*;

use crate::application::{SandboxState, Viewport};
use crate::domain::{InstanceData, TileType};
use crate::ui::{Button, ButtonAction, PANEL_WIDTH, Slider, panel_x};

pub const BACKGROUND: Color = Color::new(0.2, 0.3, 0.2, 1.0);

/// Fill colour per tile type
pub fn tile_color(tile: TileType) -> Color {
    match tile {
        TileType::Empty => BACKGROUND,
        TileType::Sand => Color::from_rgba(222, 190, 120, 255),
        TileType::Water => Color::from_rgba(60, 120, 230, 255),
    }
}

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

/// Draw one square per instance, centred on its world-space position
pub fn draw_instances(instances: &InstanceData, viewport: &Viewport) {
    // At least one pixel so huge grids stay visible
    let size = viewport.cell_pixels(instances.cell_size()).max(1.0);
    let half = size / 2.0;

    for (position, tile) in instances.iter() {
        let (screen_x, screen_y) = viewport.world_to_screen(position);
        draw_rectangle(screen_x - half, screen_y - half, size, size, tile_color(tile));
    }
}

/// Outline the sandbox square and shade the brush footprint under the cursor
pub fn draw_frame(state: &SandboxState, viewport: &Viewport, mouse_pos: (f32, f32)) {
    draw_rectangle_lines(
        viewport.origin_x,
        viewport.origin_y,
        viewport.size,
        viewport.size,
        1.0,
        Color::from_rgba(40, 60, 40, 255),
    );

    if !viewport.contains(mouse_pos.0, mouse_pos.1) {
        return;
    }
    let dims = state.grid.dimensions();
    let cell_px = viewport.size / dims.0.max(dims.1) as f32;
    let (gx, gy) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1, dims);
    let half = state.brush.size / 2;
    let mut outline = tile_color(state.brush.tile);
    outline.a = 0.6;

    draw_rectangle_lines(
        viewport.origin_x + (gx - half) as f32 * cell_px,
        viewport.origin_y + (gy - half) as f32 * cell_px,
        (2 * half + 1) as f32 * cell_px,
        (2 * half + 1) as f32 * cell_px,
        1.5,
        outline,
    );
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel with buttons, sliders and stats
pub fn draw_controls(state: &SandboxState, buttons: &[Button], sliders: &[Slider; 2], mouse_pos: (f32, f32)) {
    draw_panel_background();

    buttons.iter().for_each(|btn| {
        let active = btn.action == ButtonAction::Select(state.brush.tile);
        btn.draw(mouse_pos, active);
    });

    sliders[0].draw(state.brush.size as f32, &state.brush.size.to_string());
    sliders[1].draw(state.brush.density, &format!("{:.3}", state.brush.density));

    let px = panel_x();
    let (gw, gh) = state.grid.dimensions();
    let fps = state
        .frames
        .fps()
        .map_or_else(|| "-".to_string(), |fps| format!("{:.0}", fps));

    let step_ms = state.last_step_time_ms;
    let step_color = if step_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if step_ms < 16.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let labels = [
        (format!("FPS: {}", fps), 350.0, 16.0, WHITE),
        (format!("Instance Count: {}", format_number(state.instances.len())), 370.0, 14.0, WHITE),
        (format!("Type: {}", state.brush.tile.name()), 390.0, 14.0, tile_color(state.brush.tile)),
        (format!("Grid: {}x{}", gw, gh), 420.0, 12.0, GRAY),
        (format!("Generation: {}", state.grid.generation()), 435.0, 12.0, GRAY),
        (format!("Step: {:.2}ms", step_ms), 450.0, 12.0, step_color),
        (format!("Render: {:.2}ms", state.last_render_time_ms), 465.0, 12.0, GRAY),
        (
            (if state.is_running { "Running" } else { "Paused" }).to_string(),
            490.0,
            16.0,
            if state.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let controls = [
        "LMB: Paint  RMB: Erase",
        "1/2: Sand/Water",
        "Space: Play  S: Step",
        "Up/Down: Brush size",
        "Left/Right: Density",
        "C: Clear  R: Random",
    ];
    controls.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, 530.0 + i as f32 * 14.0, 12.0, GRAY);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(211_600), "211.6K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_tile_colors_distinct() {
        assert_ne!(tile_color(TileType::Sand), tile_color(TileType::Water));
        assert_eq!(tile_color(TileType::Empty), BACKGROUND);
    }
}
