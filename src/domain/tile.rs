use bytemuck::NoUninit;

/// TileType is the content of a single grid cell.
/// The discriminants double as the per-instance type code handed to the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, NoUninit)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
}

impl TileType {
    /// Every tile type, in code order
    pub const ALL: [TileType; 3] = [TileType::Empty, TileType::Sand, TileType::Water];

    /// Check if the cell holds nothing
    pub const fn is_empty(self) -> bool {
        matches!(self, TileType::Empty)
    }

    /// Numeric code used in instance buffers
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human readable name shown in the HUD
    pub const fn name(self) -> &'static str {
        match self {
            TileType::Empty => "Air",
            TileType::Sand => "Sand",
            TileType::Water => "Water",
        }
    }

    /// Whether a tile of this type may swap places with `target`.
    /// Sand sinks through water, water only flows into empty space.
    pub const fn can_displace(self, target: TileType) -> bool {
        match (self, target) {
            (TileType::Sand, TileType::Empty | TileType::Water) => true,
            (TileType::Water, TileType::Empty) => true,
            _ => false,
        }
    }
}
