use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::{TileGrid, TileType};

pub const BRUSH_SIZE_RANGE: RangeInclusive<i32> = 1..=50;
pub const BRUSH_DENSITY_RANGE: RangeInclusive<f32> = 0.005..=1.0;

/// Square brush that sprinkles the selected tile type.
/// Each covered cell is painted with probability `density` per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub size: i32,
    pub density: f32,
    pub tile: TileType,
}

impl Brush {
    pub fn new(size: i32, density: f32) -> Self {
        Self {
            size: size.clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end()),
            density: density.clamp(*BRUSH_DENSITY_RANGE.start(), *BRUSH_DENSITY_RANGE.end()),
            tile: TileType::Sand,
        }
    }

    /// Grid cells covered when centred on (cx, cy); may lie outside the grid
    pub fn footprint(&self, cx: i32, cy: i32) -> impl Iterator<Item = (i32, i32)> {
        let half = self.size / 2;
        (-half..=half).flat_map(move |dy| (-half..=half).map(move |dx| (cx + dx, cy + dy)))
    }

    /// Sprinkle the selected tile around (cx, cy). Returns how many cells were written.
    pub fn paint<R: Rng>(&self, grid: &mut TileGrid, cx: i32, cy: i32, rng: &mut R) -> usize {
        let mut painted = 0;
        for (x, y) in self.footprint(cx, cy) {
            if rng.random::<f32>() < self.density && grid.is_valid_tile(x, y) {
                grid.set_tile(x, y, self.tile);
                painted += 1;
            }
        }
        painted
    }

    /// Clear every cell under the brush
    pub fn erase(&self, grid: &mut TileGrid, cx: i32, cy: i32) {
        self.footprint(cx, cy)
            .for_each(|(x, y)| grid.set_tile(x, y, TileType::Empty));
    }

    pub fn adjust_size(&mut self, delta: i32) {
        self.size = (self.size + delta).clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end());
    }

    pub fn adjust_density(&mut self, factor: f32) {
        self.density =
            (self.density * factor).clamp(*BRUSH_DENSITY_RANGE.start(), *BRUSH_DENSITY_RANGE.end());
    }
}
