mod tile;
mod rules;
mod grid;
pub mod instance;
pub mod tick;

pub use tile::TileType;
pub use rules::{MovementRules, DEFAULT_WATER_FLOW_DISTANCE};
pub use grid::{TileGrid, DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT};
pub use instance::InstanceData;
pub use tick::should_simulate;
