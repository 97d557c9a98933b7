use crate::application::{Brush, FrameCounter};
use crate::config::SandboxConfig;
use crate::domain::{InstanceData, MovementRules, TileGrid, TileType, should_simulate};
use crate::error::Result;

/// Chance a cell is filled by the "Random" action
const RANDOM_FILL: f64 = 0.25;

/// SandboxState orchestrates the simulation for the frame loop.
/// The grid is only mutated through its own placement API and `step`.
pub struct SandboxState {
    pub grid: TileGrid,
    pub instances: InstanceData,
    pub frames: FrameCounter,
    pub brush: Brush,
    pub is_running: bool,
    /// Simulate once every this many frames
    pub simulation_interval: u64,
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl SandboxState {
    /// Build the sandbox from a validated configuration
    pub fn new(config: &SandboxConfig) -> Result<Self> {
        config.validate()?;
        let rules = MovementRules::new(config.water_flow_distance)?;
        let grid = TileGrid::with_rules(config.grid_width, config.grid_height, rules)?;
        let instances = InstanceData::extract(&grid);

        Ok(Self {
            grid,
            instances,
            frames: FrameCounter::new(),
            brush: Brush::new(config.brush_size, config.brush_density),
            is_running: true,
            simulation_interval: config.simulation_interval_frames,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("Simulation {}", if self.is_running { "resumed" } else { "paused" });
        self
    }

    /// Empty the grid
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self
    }

    /// Fill the grid with random sand and water
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(&mut rand::rng(), RANDOM_FILL);
        self
    }

    /// Advance a single generation, typically while paused
    pub fn step_once(mut self) -> Self {
        self.timed_step();
        self
    }

    /// Choose the tile type the brush paints
    pub fn select_tile(mut self, tile: TileType) -> Self {
        self.brush.tile = tile;
        self
    }

    pub fn adjust_brush_size(mut self, delta: i32) -> Self {
        self.brush.adjust_size(delta);
        self
    }

    pub fn adjust_brush_density(mut self, factor: f32) -> Self {
        self.brush.adjust_density(factor);
        self
    }

    /// Update for one rendered frame at time `now` (seconds).
    /// Steps the grid on simulation frames, then refreshes instance data.
    pub fn tick(mut self, now: f64) -> Self {
        let frame = self.frames.begin_frame(now);
        if self.is_running && should_simulate(frame, self.simulation_interval) {
            self.timed_step();
        }
        self.instances.refresh(&self.grid);
        self
    }

    fn timed_step(&mut self) {
        let start = std::time::Instant::now();
        self.grid.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}
