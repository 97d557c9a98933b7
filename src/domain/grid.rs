use super::{MovementRules, TileType};
use crate::error::{ConfigError, Result};
use rand::Rng;

pub const DEFAULT_GRID_WIDTH: usize = 460;
pub const DEFAULT_GRID_HEIGHT: usize = 460;

/// TileGrid owns the falling-sand simulation state.
/// Two equally sized buffers are kept: `current` is what readers see,
/// `scratch` is written during a step and swapped in when the step completes.
pub struct TileGrid {
    width: usize,
    height: usize,
    cell_size: f32,
    current: Vec<TileType>,
    scratch: Vec<TileType>,
    rules: MovementRules,
    generation: u64,
    revision: u64,
}

impl TileGrid {
    /// Create an empty grid with the default movement rules
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_rules(width, height, MovementRules::default())
    }

    /// Create an empty grid with custom movement rules.
    /// Zero in either dimension is rejected here rather than at step time.
    pub fn with_rules(width: usize, height: usize, rules: MovementRules) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        log::debug!("Creating {}x{} tile grid", width, height);

        Ok(Self {
            width,
            height,
            cell_size: 2.0 / width.max(height) as f32,
            current: vec![TileType::Empty; width * height],
            scratch: vec![TileType::Empty; width * height],
            rules,
            generation: 0,
            revision: 0,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// World-space edge length of one cell in the [-1, 1] frame
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub const fn rules(&self) -> &MovementRules {
        &self.rules
    }

    /// Number of completed steps
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Bumped on every mutation; used to regenerate instance data lazily
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Bounds predicate over signed coordinates
    pub fn is_valid_tile(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get tile at position (with bounds checking)
    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.is_valid_tile(x, y)
            .then(|| self.current[self.get_index(x as usize, y as usize)])
    }

    /// Place a tile. Out-of-range coordinates are silently ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileType) {
        if !self.is_valid_tile(x, y) {
            return;
        }
        let idx = self.get_index(x as usize, y as usize);
        if self.current[idx] != tile {
            self.current[idx] = tile;
            self.revision += 1;
        }
    }

    /// Advance the simulation by exactly one generation
    pub fn step(&mut self) {
        self.scratch.copy_from_slice(&self.current);

        // Bottom row first so a grain that falls is never revisited this tick
        let rules = self.rules;
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let tile = self.current[self.get_index(x, y)];
                for &(dx, dy) in rules.offsets(tile) {
                    if self.try_move(tile, x as i32, y as i32, dx, dy) {
                        break;
                    }
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        self.revision += 1;
    }

    /// Attempt to move the tile at (x, y) by (dx, dy) inside the scratch buffer.
    /// Occupancy is read from scratch so two movers never claim the same cell.
    fn try_move(&mut self, tile: TileType, x: i32, y: i32, dx: i32, dy: i32) -> bool {
        // Overflowing the coordinate space is just another out-of-bounds target
        let (Some(tx), Some(ty)) = (x.checked_add(dx), y.checked_add(dy)) else {
            return false;
        };
        if !self.is_valid_tile(x, y) || !self.is_valid_tile(tx, ty) {
            return false;
        }

        let source = self.get_index(x as usize, y as usize);
        let target = self.get_index(tx as usize, ty as usize);
        if !tile.can_displace(self.scratch[target]) {
            return false;
        }

        self.scratch.swap(source, target);
        true
    }

    /// Count tiles of the given type
    pub fn count(&self, tile: TileType) -> usize {
        self.current.iter().filter(|&&t| t == tile).count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.current.iter_mut().for_each(|tile| *tile = TileType::Empty);
        self.revision += 1;
        log::info!("Grid cleared");
    }

    /// Scatter sand and water over the grid, `fill` being the chance a cell is non-empty
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, fill: f64) {
        self.current.iter_mut().for_each(|tile| {
            *tile = if rng.random_bool(fill) {
                if rng.random_bool(0.5) { TileType::Sand } else { TileType::Water }
            } else {
                TileType::Empty
            };
        });
        self.revision += 1;
    }

    /// Iterate over all tiles with their positions in row-major order
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, TileType)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.current[self.get_index(x, y)]))
    }

    /// One row of the current buffer
    pub fn row(&self, y: usize) -> &[TileType] {
        let start = self.get_index(0, y);
        &self.current[start..start + self.width]
    }
}
