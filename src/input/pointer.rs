use glam::Vec2;
use web_time::{Duration, Instant};

use crate::camera::Viewport;

/// Normalized pointer axes plus the idle timer.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Pointer position mapped to `[-1, 1]` on both axes, Y up.
    pub axes: Vec2,
    /// Raw pointer position in CSS pixels.
    pub position: Vec2,
    last_move: Option<Instant>,
}

impl PointerState {
    /// Record a pointer move and restart the idle timer.
    pub fn moved(&mut self, x: f32, y: f32, viewport: &Viewport, now: Instant) {
        self.position = Vec2::new(x, y);
        self.axes = viewport.normalize(x, y);
        self.last_move = Some(now);
    }

    /// Update the axes without counting as movement (touch taps).
    pub fn place(&mut self, x: f32, y: f32, viewport: &Viewport) {
        self.position = Vec2::new(x, y);
        self.axes = viewport.normalize(x, y);
    }

    /// Whether the pointer moved within the last `timeout`.
    #[must_use]
    pub fn is_moving(&self, now: Instant, timeout: Duration) -> bool {
        self.last_move
            .is_some_and(|t| now.saturating_duration_since(t) < timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_centered_with_y_up() {
        let vp = Viewport::new(800.0, 600.0);
        let mut p = PointerState::default();
        let t0 = Instant::now();
        p.moved(400.0, 300.0, &vp, t0);
        assert!(p.axes.length() < 1e-6);
        p.moved(0.0, 0.0, &vp, t0);
        assert_eq!(p.axes, Vec2::new(-1.0, 1.0));
        p.moved(800.0, 600.0, &vp, t0);
        assert_eq!(p.axes, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn idle_after_timeout() {
        let vp = Viewport::new(800.0, 600.0);
        let mut p = PointerState::default();
        let t0 = Instant::now();
        let timeout = Duration::from_secs(3);
        assert!(!p.is_moving(t0, timeout));

        p.moved(10.0, 10.0, &vp, t0);
        assert!(p.is_moving(t0 + Duration::from_millis(2999), timeout));
        assert!(!p.is_moving(t0 + Duration::from_secs(3), timeout));
    }

    #[test]
    fn place_does_not_wake_pointer() {
        let vp = Viewport::new(100.0, 100.0);
        let mut p = PointerState::default();
        p.place(100.0, 50.0, &vp);
        assert_eq!(p.axes.x, 1.0);
        assert!(!p.is_moving(Instant::now(), Duration::from_secs(3)));
    }
}
