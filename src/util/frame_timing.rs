//! Frame rate measurement.

use web_time::Instant;

/// Smoothed FPS tracking for the debug panel.
///
/// The host drives the frame loop, so this only measures it; every tick
/// passes its own timestamp.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Previous tick, `None` before the first.
    last_frame: Option<Instant>,
    /// Exponential moving average of the instantaneous FPS.
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0).
    smoothing: f32,
    frames: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Timer starting at a nominal 60 FPS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Record a tick at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;
        let Some(last) = self.last_frame.replace(now) else {
            return;
        };
        let frame_time = now.saturating_duration_since(last).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Ticks recorded so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[test]
    fn steady_ticks_converge_on_rate() {
        let mut timing = FrameTiming::new();
        let t0 = Instant::now();
        for i in 0..400 {
            timing.tick(t0 + Duration::from_millis(i * 20));
        }
        assert_eq!(timing.frame_count(), 400);
        assert!((timing.fps() - 50.0).abs() < 0.5);
    }

    #[test]
    fn repeated_timestamp_is_ignored() {
        let mut timing = FrameTiming::new();
        let t0 = Instant::now();
        timing.tick(t0);
        timing.tick(t0);
        assert_eq!(timing.fps(), 60.0);
    }
}
