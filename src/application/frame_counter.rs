/// FrameCounter numbers rendered frames and measures FPS over roughly one-second windows.
/// The frame index never resets, so it can drive the simulation tick gate.
#[derive(Debug, Clone, Default)]
pub struct FrameCounter {
    frame: u64,
    window_start: f64,
    window_frames: u32,
    fps: Option<f64>,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new frame at time `now` (seconds) and return its index
    pub fn begin_frame(&mut self, now: f64) -> u64 {
        let elapsed = now - self.window_start;
        if elapsed > 1.0 {
            self.fps = Some(self.window_frames as f64 / elapsed);
            self.window_start = now;
            self.window_frames = 0;
        }
        self.window_frames += 1;

        let index = self.frame;
        self.frame += 1;
        index
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Last measured frame rate, None until the first window closes
    pub fn fps(&self) -> Option<f64> {
        self.fps
    }
}
