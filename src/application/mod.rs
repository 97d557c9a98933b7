mod brush;
mod frame_counter;
mod sandbox_state;
mod viewport;

pub use brush::{Brush, BRUSH_DENSITY_RANGE, BRUSH_SIZE_RANGE};
pub use frame_counter::FrameCounter;
pub use sandbox_state::SandboxState;
pub use viewport::Viewport;
