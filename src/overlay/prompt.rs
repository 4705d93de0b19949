use glam::Vec2;
use web_time::{Duration, Instant};

use crate::camera::Viewport;

const OFFSET: Vec2 = Vec2::new(18.0, 28.0);
const MARGIN: f32 = 20.0;
const RATE: f32 = 0.12;
const SETTLE_PX: f32 = 0.5;
const HIDE_AFTER: Duration = Duration::from_secs(2);

/// Pointer-following "click to enter" prompt shown during the intro.
///
/// Advanced once per tick by the frame loop. Touch devices get a centered
/// prompt that is always visible.
#[derive(Debug, Clone)]
pub struct IntroPrompt {
    touch_device: bool,
    /// Prompt size in pixels, reported by the host for edge clamping.
    size: Vec2,
    position: Vec2,
    target: Option<Vec2>,
    visible: bool,
    last_move: Option<Instant>,
}

impl IntroPrompt {
    /// Prompt centered in the viewport.
    #[must_use]
    pub fn new(viewport: &Viewport, touch_device: bool) -> Self {
        Self {
            touch_device,
            size: Vec2::ZERO,
            position: viewport.center(),
            target: None,
            visible: touch_device,
            last_move: None,
        }
    }

    /// Prompt element size, for keeping it inside the viewport.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Top-left position in pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the prompt is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the prompt is still gliding toward its target.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// Pointer moved during the intro.
    pub fn pointer_moved(&mut self, pointer: Vec2, viewport: &Viewport, now: Instant) {
        if self.touch_device {
            self.visible = true;
            return;
        }
        let max = Vec2::new(
            viewport.width - self.size.x - MARGIN,
            viewport.height - self.size.y - MARGIN,
        )
        .max(Vec2::splat(MARGIN));
        self.target = Some((pointer + OFFSET).clamp(Vec2::splat(MARGIN), max));
        self.visible = true;
        self.last_move = Some(now);
    }

    /// One animation tick.
    pub fn advance(&mut self, now: Instant) {
        if let Some(target) = self.target {
            self.position += (target - self.position) * RATE;
            let d = target - self.position;
            if d.x.abs() < SETTLE_PX && d.y.abs() < SETTLE_PX {
                self.position = target;
                self.target = None;
            }
        }
        if !self.touch_device {
            if let Some(last) = self.last_move {
                if now.saturating_duration_since(last) >= HIDE_AFTER {
                    self.visible = false;
                    self.last_move = None;
                }
            }
        }
    }

    /// Hide and recenter (intro exited or re-shown).
    pub fn reset(&mut self, viewport: &Viewport) {
        self.position = viewport.center();
        self.target = None;
        self.last_move = None;
        self.visible = self.touch_device;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_pointer_and_settles() {
        let vp = Viewport::new(1000.0, 800.0);
        let mut p = IntroPrompt::new(&vp, false);
        assert!(!p.is_visible());
        let t0 = Instant::now();
        p.pointer_moved(Vec2::new(100.0, 100.0), &vp, t0);
        assert!(p.is_visible());

        let mut frames = 0;
        while p.is_moving() {
            p.advance(t0);
            frames += 1;
            assert!(frames < 500);
        }
        assert_eq!(p.position(), Vec2::new(118.0, 128.0));
    }

    #[test]
    fn target_is_clamped_to_margin() {
        let vp = Viewport::new(1000.0, 800.0);
        let mut p = IntroPrompt::new(&vp, false);
        p.set_size(Vec2::new(200.0, 40.0));
        let t0 = Instant::now();
        p.pointer_moved(Vec2::new(990.0, -50.0), &vp, t0);
        while p.is_moving() {
            p.advance(t0);
        }
        assert_eq!(p.position(), Vec2::new(780.0, 20.0));
    }

    #[test]
    fn hides_two_seconds_after_last_move() {
        let vp = Viewport::new(1000.0, 800.0);
        let mut p = IntroPrompt::new(&vp, false);
        let t0 = Instant::now();
        p.pointer_moved(Vec2::new(10.0, 10.0), &vp, t0);
        p.advance(t0 + Duration::from_millis(1999));
        assert!(p.is_visible());
        p.advance(t0 + Duration::from_secs(2));
        assert!(!p.is_visible());
    }

    #[test]
    fn touch_devices_keep_centered_prompt() {
        let vp = Viewport::new(400.0, 800.0);
        let mut p = IntroPrompt::new(&vp, true);
        assert!(p.is_visible());
        let t0 = Instant::now();
        p.pointer_moved(Vec2::new(10.0, 10.0), &vp, t0);
        p.advance(t0 + Duration::from_secs(10));
        assert!(p.is_visible());
        assert_eq!(p.position(), vp.center());
    }
}
