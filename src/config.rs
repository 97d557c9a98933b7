//! Configuration for the sandbox.
//!
//! Loaded from an optional JSON file; any field left out falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{BRUSH_DENSITY_RANGE, BRUSH_SIZE_RANGE};
use crate::domain::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_WATER_FLOW_DISTANCE};
use crate::error::{ConfigError, Result};

/// Environment variable consulted when no config path is passed on the command line
pub const CONFIG_ENV_VAR: &str = "SANDBOX_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Grid width in cells
    pub grid_width: usize,
    /// Grid height in cells
    pub grid_height: usize,
    /// Simulate once every this many rendered frames
    pub simulation_interval_frames: u64,
    /// Horizontal jump distance for blocked water
    pub water_flow_distance: u16,
    /// Brush edge length in cells
    pub brush_size: i32,
    /// Chance (0.005..=1) that each brush cell is painted per frame
    pub brush_density: f32,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            simulation_interval_frames: 3,
            water_flow_distance: DEFAULT_WATER_FLOW_DISTANCE,
            brush_size: 10,
            brush_density: 0.02,
            window_width: 920,
            window_height: 920,
        }
    }
}

impl SandboxConfig {
    /// Parse a config from JSON text and validate it
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check the invariants the engine depends on
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.simulation_interval_frames == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.water_flow_distance == 0 {
            return Err(ConfigError::ZeroFlowDistance);
        }
        if !BRUSH_SIZE_RANGE.contains(&self.brush_size) {
            return Err(ConfigError::InvalidBrushSize(self.brush_size));
        }
        if !BRUSH_DENSITY_RANGE.contains(&self.brush_density) {
            return Err(ConfigError::InvalidBrushDensity(self.brush_density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SandboxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width, 460);
        assert_eq!(config.water_flow_distance, 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SandboxConfig::from_json(r#"{ "grid_width": 64, "grid_height": 32 }"#).unwrap();
        assert_eq!(config.grid_width, 64);
        assert_eq!(config.grid_height, 32);
        assert_eq!(config.simulation_interval_frames, 3);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = SandboxConfig::from_json(r#"{ "grid_height": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDimension { height: 0, .. }));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = SandboxConfig { simulation_interval_frames: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroInterval)));
    }

    #[test]
    fn test_bad_density_rejected() {
        for density in [0.0, -0.5, 1.5, f32::NAN] {
            let config = SandboxConfig { brush_density: density, ..Default::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidBrushDensity(_))));
        }
    }

    #[test]
    fn test_brush_size_outside_range_rejected() {
        for size in [0, -3, 51] {
            let config = SandboxConfig { brush_size: size, ..Default::default() };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidBrushSize(s)) if s == size));
        }
        let config = SandboxConfig { brush_size: 50, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_flow_distance_rejected() {
        let config = SandboxConfig { water_flow_distance: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroFlowDistance)));
    }

    #[test]
    fn test_negative_or_oversized_flow_distance_fails_to_parse() {
        for text in [r#"{ "water_flow_distance": -4 }"#, r#"{ "water_flow_distance": 2147483647 }"#] {
            assert!(matches!(SandboxConfig::from_json(text), Err(ConfigError::Parse(_))));
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SandboxConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SandboxConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
