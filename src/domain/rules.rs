use super::TileType;
use crate::error::{ConfigError, Result};

/// How far water jumps sideways when every downward cell is blocked
pub const DEFAULT_WATER_FLOW_DISTANCE: u16 = 4;

/// Downward offsets shared by sand and water: down, down-left, down-right
const FALL_OFFSETS: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

/// MovementRules holds the ordered target offsets tried for each tile type.
/// The first offset whose move succeeds wins and the rest are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementRules {
    water_flow_distance: u16,
    water_offsets: [(i32, i32); 5],
}

impl MovementRules {
    /// Build a rule set with a custom horizontal water flow distance.
    /// Water always tries left before right, so the distance must be positive.
    pub fn new(water_flow_distance: u16) -> Result<Self> {
        if water_flow_distance == 0 {
            return Err(ConfigError::ZeroFlowDistance);
        }
        Ok(Self::with_distance(water_flow_distance))
    }

    const fn with_distance(water_flow_distance: u16) -> Self {
        let reach = water_flow_distance as i32;
        Self {
            water_flow_distance,
            water_offsets: [
                FALL_OFFSETS[0],
                FALL_OFFSETS[1],
                FALL_OFFSETS[2],
                (-reach, 0),
                (reach, 0),
            ],
        }
    }

    pub const fn water_flow_distance(&self) -> u16 {
        self.water_flow_distance
    }

    /// Offsets to try for `tile`, highest priority first
    pub fn offsets(&self, tile: TileType) -> &[(i32, i32)] {
        match tile {
            TileType::Sand => &FALL_OFFSETS,
            TileType::Water => &self.water_offsets,
            TileType::Empty => &[],
        }
    }
}

impl Default for MovementRules {
    fn default() -> Self {
        Self::with_distance(DEFAULT_WATER_FLOW_DISTANCE)
    }
}
