use macroquad::prelude::*;

/// Horizontal slider over a closed numeric range
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    min: f32,
    max: f32,
    label: String,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: f32, max: f32) -> Self {
        Self {
            x,
            y,
            width,
            height: 16.0,
            min,
            max,
            label: label.into(),
            dragging: false,
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle a drag; returns the new value while the slider is held
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<f32> {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }

        self.dragging.then(|| {
            let t = ((mouse_pos.0 - self.x) / self.width).clamp(0.0, 1.0);
            self.min + t * (self.max - self.min)
        })
    }

    /// Draw track, handle and a label showing `value_text`
    pub fn draw(&self, value: f32, value_text: &str) {
        draw_text(
            &format!("{}: {}", self.label, value_text),
            self.x,
            self.y - 5.0,
            14.0,
            GRAY,
        );

        let track_y = self.y + self.height / 2.0;
        draw_line(self.x, track_y, self.x + self.width, track_y, 3.0, Color::from_rgba(90, 90, 90, 255));

        let t = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        let handle_x = self.x + t * self.width;
        let handle_color = if self.dragging {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(handle_x, track_y, self.height / 2.0, handle_color);
        draw_circle_lines(handle_x, track_y, self.height / 2.0, 1.5, WHITE);
    }
}
