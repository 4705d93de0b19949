use glam::Vec2;

use crate::options::GyroOptions;

/// Device-orientation input normalized to `[-1, 1]` axes.
///
/// `x` comes from gamma (left/right tilt), `y` from beta (front/back tilt)
/// relative to a comfortable holding angle. Readings are only accepted
/// after the host reports that permission was granted.
#[derive(Debug, Clone, Default)]
pub struct GyroState {
    enabled: bool,
    raw: Vec2,
    smoothed: Vec2,
}

impl GyroState {
    /// Enable or disable gyro input. Disabling clears the axes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.raw = Vec2::ZERO;
            self.smoothed = Vec2::ZERO;
        }
    }

    /// Whether orientation readings are being accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Store a new orientation reading (degrees).
    pub fn set_raw(&mut self, beta: f32, gamma: f32, opts: &GyroOptions) {
        if !self.enabled {
            return;
        }
        let y = ((beta - opts.neutral_beta_deg) / opts.beta_range_deg)
            .clamp(-1.0, 1.0);
        let x = (gamma / opts.gamma_range_deg).clamp(-1.0, 1.0)
            * secondary_weight(beta, opts);
        self.raw = Vec2::new(x, y);
    }

    /// Smooth toward the latest reading. Call once per frame.
    pub fn advance(&mut self, opts: &GyroOptions) {
        self.smoothed += (self.raw - self.smoothed) * opts.smoothing;
    }

    /// Smoothed axes.
    #[must_use]
    pub fn axes(&self) -> Vec2 {
        self.smoothed
    }

    /// Enabled and tilted away from neutral by more than the epsilon.
    #[must_use]
    pub fn is_active(&self, opts: &GyroOptions) -> bool {
        self.enabled
            && (self.smoothed.x.abs() > opts.active_epsilon
                || self.smoothed.y.abs() > opts.active_epsilon)
    }
}

/// Gamma weight: 1 up to the vertical threshold, then falling linearly to
/// the floor at 90°. Gamma is unstable when the device stands upright.
fn secondary_weight(beta: f32, opts: &GyroOptions) -> f32 {
    let tilt = beta.abs();
    if tilt <= opts.vertical_threshold_deg {
        return 1.0;
    }
    let span = (90.0 - opts.vertical_threshold_deg).max(f32::EPSILON);
    (1.0 - (tilt - opts.vertical_threshold_deg) / span)
        .max(opts.min_secondary_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> GyroState {
        let mut g = GyroState::default();
        g.set_enabled(true);
        g
    }

    #[test]
    fn readings_ignored_until_enabled() {
        let opts = GyroOptions::default();
        let mut g = GyroState::default();
        g.set_raw(100.0, 30.0, &opts);
        g.advance(&opts);
        assert_eq!(g.axes(), Vec2::ZERO);
        assert!(!g.is_active(&opts));
    }

    #[test]
    fn neutral_angle_maps_to_zero() {
        let opts = GyroOptions::default();
        let mut g = enabled();
        g.set_raw(opts.neutral_beta_deg, 0.0, &opts);
        for _ in 0..100 {
            g.advance(&opts);
        }
        assert!(g.axes().length() < 1e-6);
        assert!(!g.is_active(&opts));
    }

    #[test]
    fn axes_are_clamped() {
        let opts = GyroOptions::default();
        let mut g = enabled();
        g.set_raw(-170.0, 80.0, &opts);
        for _ in 0..500 {
            g.advance(&opts);
        }
        assert!((g.axes().y + 1.0).abs() < 1e-4);
        assert!(g.axes().x <= 1.0);
    }

    #[test]
    fn smoothing_applies_one_step_per_frame() {
        let opts = GyroOptions::default();
        let mut g = enabled();
        g.set_raw(opts.neutral_beta_deg + opts.beta_range_deg, 0.0, &opts);
        g.advance(&opts);
        assert!((g.axes().y - opts.smoothing).abs() < 1e-6);
        assert!(g.is_active(&opts));
    }

    #[test]
    fn upright_device_damps_gamma() {
        let opts = GyroOptions::default();
        let mut flat = enabled();
        flat.set_raw(60.0, 45.0, &opts);
        let mut upright = enabled();
        upright.set_raw(89.0, 45.0, &opts);
        for _ in 0..200 {
            flat.advance(&opts);
            upright.advance(&opts);
        }
        assert!((flat.axes().x - 1.0).abs() < 1e-3);
        assert!(upright.axes().x < 0.5);
        assert!(upright.axes().x >= opts.min_secondary_weight - 1e-3);
    }

    #[test]
    fn disabling_clears_axes() {
        let opts = GyroOptions::default();
        let mut g = enabled();
        g.set_raw(100.0, 20.0, &opts);
        g.advance(&opts);
        g.set_enabled(false);
        assert_eq!(g.axes(), Vec2::ZERO);
    }
}
