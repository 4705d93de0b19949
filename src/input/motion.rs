use std::collections::VecDeque;

use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

use crate::options::{InputOptions, ShakeOptions};

/// Detects a shake from throttled accelerometer magnitudes.
///
/// Samples closer than the configured interval to the previous considered
/// sample are dropped. Hits (samples above the magnitude threshold) are
/// kept for the rolling window; reaching the required count reports a
/// shake and clears the window.
#[derive(Debug, Clone, Default)]
pub struct ShakeDetector {
    last_sample: Option<Instant>,
    hits: VecDeque<Instant>,
}

impl ShakeDetector {
    /// Feed one accelerometer reading. Returns `true` once per detected
    /// shake.
    pub fn sample(
        &mut self,
        acceleration: Vec3,
        now: Instant,
        opts: &ShakeOptions,
    ) -> bool {
        let interval = Duration::from_millis(opts.sample_interval_ms);
        if let Some(last) = self.last_sample {
            if now.saturating_duration_since(last) < interval {
                return false;
            }
        }
        self.last_sample = Some(now);

        let window = Duration::from_millis(opts.window_ms);
        while let Some(&oldest) = self.hits.front() {
            if now.saturating_duration_since(oldest) > window {
                let _ = self.hits.pop_front();
            } else {
                break;
            }
        }

        if acceleration.length() <= opts.magnitude_threshold {
            return false;
        }
        self.hits.push_back(now);
        if self.hits.len() >= opts.required_samples {
            self.hits.clear();
            log::debug!("shake detected");
            return true;
        }
        false
    }

    /// Hits currently inside the window.
    #[must_use]
    pub fn pending_hits(&self) -> usize {
        self.hits.len()
    }
}

/// Small positional parallax driven by lateral acceleration.
#[derive(Debug, Clone, Default)]
pub struct MotionState {
    target: Vec2,
    offset: Vec2,
}

impl MotionState {
    /// Record a reading; x and y acceleration become the parallax target.
    pub fn set_acceleration(&mut self, acceleration: Vec3, opts: &InputOptions) {
        let limit = opts.motion_offset_limit;
        self.target = (acceleration.truncate() * opts.motion_offset_scale)
            .clamp(Vec2::splat(-limit), Vec2::splat(limit));
    }

    /// Smooth toward the target. Call once per frame.
    pub fn advance(&mut self, opts: &InputOptions) {
        self.offset += (self.target - self.offset) * opts.motion_smoothing;
    }

    /// Current smoothed offset in world units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Drop the offset immediately (model switch).
    pub fn reset(&mut self) {
        self.target = Vec2::ZERO;
        self.offset = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG: Vec3 = Vec3::new(20.0, 0.0, 0.0);
    const WEAK: Vec3 = Vec3::new(3.0, 2.0, 1.0);

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn four_hits_inside_window_trigger_once() {
        let opts = ShakeOptions::default();
        let mut d = ShakeDetector::default();
        let t0 = Instant::now();
        assert!(!d.sample(STRONG, at(t0, 0), &opts));
        assert!(!d.sample(STRONG, at(t0, 100), &opts));
        assert!(!d.sample(STRONG, at(t0, 200), &opts));
        assert!(d.sample(STRONG, at(t0, 300), &opts));
        // Window was cleared; the next hit starts over.
        assert!(!d.sample(STRONG, at(t0, 400), &opts));
        assert_eq!(d.pending_hits(), 1);
    }

    #[test]
    fn three_hits_do_not_trigger() {
        let opts = ShakeOptions::default();
        let mut d = ShakeDetector::default();
        let t0 = Instant::now();
        for ms in [0, 100, 200] {
            assert!(!d.sample(STRONG, at(t0, ms), &opts));
        }
        assert!(!d.sample(WEAK, at(t0, 300), &opts));
    }

    #[test]
    fn hits_spread_beyond_window_do_not_trigger() {
        let opts = ShakeOptions::default();
        let mut d = ShakeDetector::default();
        let t0 = Instant::now();
        for ms in [0, 300, 700, 1100, 1500, 1900] {
            assert!(!d.sample(STRONG, at(t0, ms), &opts));
        }
    }

    #[test]
    fn throttled_samples_are_ignored() {
        let opts = ShakeOptions::default();
        let mut d = ShakeDetector::default();
        let t0 = Instant::now();
        for ms in [0, 10, 20, 30, 40] {
            assert!(!d.sample(STRONG, at(t0, ms), &opts));
        }
        assert_eq!(d.pending_hits(), 1);
    }

    #[test]
    fn parallax_is_clamped_and_resettable() {
        let opts = InputOptions::default();
        let mut m = MotionState::default();
        m.set_acceleration(Vec3::new(100.0, -100.0, 0.0), &opts);
        for _ in 0..500 {
            m.advance(&opts);
        }
        let limit = opts.motion_offset_limit;
        assert!((m.offset().x - limit).abs() < 1e-4);
        assert!((m.offset().y + limit).abs() < 1e-4);
        m.reset();
        assert_eq!(m.offset(), Vec2::ZERO);
    }
}
