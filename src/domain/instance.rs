//! Render projection of the tile grid.
//!
//! Every non-empty cell becomes one instance: a world-space centre in the
//! [-1, 1] frame (row 0 at the top) and its tile type. The renderer draws one
//! quad of edge `cell_size` per instance.

use glam::Vec2;
use rayon::prelude::*;

use super::{TileGrid, TileType};

/// Positions and types of every non-empty cell, in row-major scan order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceData {
    positions: Vec<Vec2>,
    types: Vec<TileType>,
    cell_size: f32,
    /// Grid revision this data was built from
    revision: Option<u64>,
}

/// World-space centre of cell (x, y)
#[inline]
pub fn cell_center(x: usize, y: usize, cell_size: f32) -> Vec2 {
    Vec2::new(
        x as f32 * cell_size - 1.0 + cell_size / 2.0,
        1.0 - y as f32 * cell_size - cell_size / 2.0,
    )
}

impl InstanceData {
    /// Build instance data from the grid's current buffer
    pub fn extract(grid: &TileGrid) -> Self {
        let mut data = Self::default();
        data.rebuild(grid);
        data
    }

    /// Same result as `extract`, with rows projected in parallel
    pub fn extract_parallel(grid: &TileGrid) -> Self {
        let (_, height) = grid.dimensions();
        let cell_size = grid.cell_size();

        let (positions, types): (Vec<Vec2>, Vec<TileType>) = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                grid.row(y)
                    .iter()
                    .enumerate()
                    .filter(|(_, tile)| !tile.is_empty())
                    .map(move |(x, &tile)| (cell_center(x, y, cell_size), tile))
            })
            .unzip();

        Self {
            positions,
            types,
            cell_size,
            revision: Some(grid.revision()),
        }
    }

    /// Rebuild only if the grid changed since the last extraction.
    /// Returns true when the data was regenerated.
    pub fn refresh(&mut self, grid: &TileGrid) -> bool {
        if self.revision == Some(grid.revision()) {
            return false;
        }
        self.rebuild(grid);
        true
    }

    fn rebuild(&mut self, grid: &TileGrid) {
        self.positions.clear();
        self.types.clear();
        self.cell_size = grid.cell_size();

        for (x, y, tile) in grid.iter_tiles() {
            if !tile.is_empty() {
                self.positions.push(cell_center(x, y, self.cell_size));
                self.types.push(tile);
            }
        }

        self.revision = Some(grid.revision());
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn types(&self) -> &[TileType] {
        &self.types
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of instances to draw
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over (position, type) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, TileType)> + '_ {
        self.positions.iter().copied().zip(self.types.iter().copied())
    }

    /// Positions as raw bytes, ready for a vertex buffer upload
    pub fn positions_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Tile type codes as raw bytes, one per instance
    pub fn type_codes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> TileGrid {
        let mut grid = TileGrid::new(10, 10).unwrap();
        grid.set_tile(0, 0, TileType::Sand);
        grid.set_tile(9, 0, TileType::Water);
        grid.set_tile(3, 5, TileType::Sand);
        grid.set_tile(9, 9, TileType::Water);
        grid
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-6
    }

    #[test]
    fn test_empty_grid_has_no_instances() {
        let grid = TileGrid::new(4, 4).unwrap();
        let data = InstanceData::extract(&grid);
        assert!(data.is_empty());
        assert_eq!(data.cell_size(), 0.5);
    }

    #[test]
    fn test_row_major_order_and_types() {
        let data = InstanceData::extract(&sample_grid());
        assert_eq!(data.len(), 4);
        assert_eq!(
            data.types(),
            &[TileType::Sand, TileType::Water, TileType::Sand, TileType::Water]
        );
    }

    #[test]
    fn test_world_positions() {
        let data = InstanceData::extract(&sample_grid());
        let p = data.positions();
        // cell_size is 0.2, so centres sit 0.1 inside the [-1, 1] border
        assert!(approx(p[0], Vec2::new(-0.9, 0.9)));
        assert!(approx(p[1], Vec2::new(0.9, 0.9)));
        assert!(approx(p[2], Vec2::new(-0.3, -0.1)));
        assert!(approx(p[3], Vec2::new(0.9, -0.9)));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let grid = sample_grid();
        assert_eq!(InstanceData::extract(&grid), InstanceData::extract(&grid));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = sample_grid();
        grid.step();
        assert_eq!(InstanceData::extract_parallel(&grid), InstanceData::extract(&grid));
    }

    #[test]
    fn test_refresh_only_when_grid_changes() {
        let mut grid = sample_grid();
        let mut data = InstanceData::default();

        assert!(data.refresh(&grid));
        assert!(!data.refresh(&grid));

        grid.set_tile(5, 5, TileType::Water);
        assert!(data.refresh(&grid));
        assert_eq!(data.len(), 5);

        grid.step();
        assert!(data.refresh(&grid));
        assert_eq!(data, InstanceData::extract(&grid));
    }

    #[test]
    fn test_byte_views() {
        let data = InstanceData::extract(&sample_grid());
        assert_eq!(data.positions_bytes().len(), 4 * 2 * std::mem::size_of::<f32>());
        assert_eq!(data.type_codes(), &[1, 2, 1, 2]);
    }
}
