//! Error types for sandbox configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("simulation interval must be at least one frame")]
    ZeroInterval,

    #[error("water flow distance must be non-zero")]
    ZeroFlowDistance,

    #[error("brush size must be between 1 and 50 cells, got {0}")]
    InvalidBrushSize(i32),

    #[error("brush density must be between 0.005 and 1, got {0}")]
    InvalidBrushDensity(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
