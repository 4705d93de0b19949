//! Exponential blending primitives shared by every presentation.

use glam::{Vec2, Vec3};

/// One exponential step: `current + (target - current) * rate`.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Component-wise [`approach`] for rotations and positions.
#[inline]
#[must_use]
pub fn blend(current: Vec3, target: Vec3, rate: f32) -> Vec3 {
    current + (target - current) * rate
}

/// Component-wise [`approach`] for 2D values.
#[inline]
#[must_use]
pub fn blend2(current: Vec2, target: Vec2, rate: f32) -> Vec2 {
    current + (target - current) * rate
}

/// Summed absolute per-axis difference, in radians.
#[inline]
#[must_use]
pub fn rotation_distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).abs().element_sum()
}

/// Multiplicative decay of the offset from `home`.
#[inline]
#[must_use]
pub fn decay_toward(current: Vec3, home: Vec3, factor: f32) -> Vec3 {
    home + (current - home) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_converges_monotonically() {
        let target = Vec3::new(0.3, -0.2, 0.0);
        let mut current = Vec3::new(1.2, 2.9, -0.4);
        let mut last = rotation_distance(current, target);
        let mut frames = 0;
        while last >= 0.01 {
            current = blend(current, target, 0.08);
            let d = rotation_distance(current, target);
            assert!(d < last, "distance must shrink every frame");
            last = d;
            frames += 1;
            assert!(frames < 1000);
        }
    }

    #[test]
    fn decay_shrinks_offset_from_home() {
        let home = Vec3::new(0.0, 0.26, 0.0);
        let r = decay_toward(Vec3::new(1.0, 1.26, 0.0), home, 0.94);
        assert!((r.x - 0.94).abs() < 1e-6);
        assert!((r.y - (0.26 + 0.94)).abs() < 1e-6);
    }

    #[test]
    fn approach_is_linear_in_rate() {
        assert_eq!(approach(0.0, 10.0, 0.25), 2.5);
        assert_eq!(approach(4.0, 4.0, 0.5), 4.0);
        assert_eq!(blend2(Vec2::ZERO, Vec2::ONE, 0.5), Vec2::splat(0.5));
    }
}
