// Domain layer - Simulation engine
pub mod domain;

// Ambient configuration and errors
pub mod config;
pub mod error;

// Application layer - Frame loop coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{InstanceData, MovementRules, TileGrid, TileType, should_simulate};
pub use application::{Brush, SandboxState, Viewport};
pub use config::SandboxConfig;
pub use error::{ConfigError, Result};
