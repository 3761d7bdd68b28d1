//! Per-frame clock for hosts that drive the engine themselves.

use web_time::{Duration, Instant};

/// Longest frame step handed to the smoother, in seconds.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Frame clock producing per-frame `dt` and a smoothed FPS readout.
///
/// The smoother has no timer of its own; the host calls [`tick`] once
/// per rendered frame and feeds the result to `GalleryEngine::update`.
///
/// [`tick`]: FrameTiming::tick
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single step
    max_dt: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_dt: Duration::from_secs_f32(MAX_FRAME_DT),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Mark the start of a frame and return the clamped step in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    /// Fold an externally measured frame duration into the clock, e.g. the
    /// timestamp delta of a `requestAnimationFrame` callback.
    pub fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_dt).as_secs_f32()
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
