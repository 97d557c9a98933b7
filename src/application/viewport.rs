use glam::Vec2;

/// Viewport maps the [-1, 1] simulation frame onto a square region of the window.
/// The grid's longer side spans the whole square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Edge length of the square in pixels
    pub size: f32,
}

impl Viewport {
    pub fn new(origin_x: f32, origin_y: f32, size: f32) -> Self {
        Self { origin_x, origin_y, size }
    }

    /// Largest square that fits in the given area, anchored top-left
    pub fn fit(area_width: f32, area_height: f32) -> Self {
        Self::new(0.0, 0.0, area_width.min(area_height).max(1.0))
    }

    /// Convert a world-space point to screen pixels
    pub fn world_to_screen(&self, world: Vec2) -> (f32, f32) {
        let screen_x = self.origin_x + (world.x + 1.0) * 0.5 * self.size;
        let screen_y = self.origin_y + (1.0 - world.y) * 0.5 * self.size;
        (screen_x, screen_y)
    }

    /// Pixel edge length of a cell whose world-space size is `cell_size`
    pub fn cell_pixels(&self, cell_size: f32) -> f32 {
        cell_size * 0.5 * self.size
    }

    /// Convert screen pixels to grid coordinates. Results outside the grid are
    /// returned as-is; callers rely on the grid's bounds check.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, grid_dims: (usize, usize)) -> (i32, i32) {
        let cells = grid_dims.0.max(grid_dims.1) as f32;
        let cell_px = self.size / cells;
        let grid_x = ((screen_x - self.origin_x) / cell_px).floor() as i32;
        let grid_y = ((screen_y - self.origin_y) / cell_px).floor() as i32;
        (grid_x, grid_y)
    }

    /// Check if a screen point lies inside the viewport square
    pub fn contains(&self, screen_x: f32, screen_y: f32) -> bool {
        screen_x >= self.origin_x
            && screen_x < self.origin_x + self.size
            && screen_y >= self.origin_y
            && screen_y < self.origin_y + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instance::cell_center;

    #[test]
    fn test_fit_uses_shorter_side() {
        assert_eq!(Viewport::fit(800.0, 600.0).size, 600.0);
    }

    #[test]
    fn test_world_corners() {
        let vp = Viewport::new(0.0, 0.0, 400.0);
        assert_eq!(vp.world_to_screen(Vec2::new(-1.0, 1.0)), (0.0, 0.0));
        assert_eq!(vp.world_to_screen(Vec2::new(1.0, -1.0)), (400.0, 400.0));
    }

    #[test]
    fn test_screen_to_grid_round_trips_cell_centres() {
        let vp = Viewport::new(10.0, 20.0, 460.0);
        let cell_size = 2.0 / 10.0;
        for (x, y) in [(0, 0), (3, 7), (9, 9)] {
            let (sx, sy) = vp.world_to_screen(cell_center(x, y, cell_size));
            assert_eq!(vp.screen_to_grid(sx, sy, (10, 10)), (x as i32, y as i32));
        }
    }

    #[test]
    fn test_left_of_viewport_is_negative() {
        let vp = Viewport::new(100.0, 0.0, 100.0);
        let (gx, _) = vp.screen_to_grid(95.0, 50.0, (10, 10));
        assert_eq!(gx, -1);
        assert!(!vp.contains(95.0, 50.0));
    }

    #[test]
    fn test_cell_pixels() {
        let vp = Viewport::new(0.0, 0.0, 460.0);
        assert!((vp.cell_pixels(2.0 / 460.0) - 1.0).abs() < 1e-5);
    }
}
