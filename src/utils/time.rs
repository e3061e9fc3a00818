#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Frame timer for callers driving per-frame `update(dt)` loops.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Creates a timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// Advances the timer and returns the delta since the previous tick,
    /// in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
