use glam::Vec2;
use web_time::Instant;

use super::event::TouchPoints;

/// Axis that claimed a single-finger gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Horizontal movement crossed the latch first.
    Horizontal,
    /// Vertical movement crossed the latch first.
    Vertical,
}

/// Interpreted touch gesture produced by [`TouchTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// Single-finger movement since the previous sample.
    Drag {
        /// Pixel delta since the previous sample.
        delta: Vec2,
        /// Latched axis, `None` until the latch threshold is crossed.
        axis: Option<DragAxis>,
    },
    /// A second finger went down.
    PinchStarted,
    /// Two-finger spread relative to the spread at pinch start.
    Pinch {
        /// Current spread divided by the initial spread.
        scale: f32,
    },
    /// Finger lifted without leaving the tap slop.
    Tap {
        /// Lift position in CSS pixels.
        position: Vec2,
    },
    /// Finger lifted after a drag.
    Release {
        /// Axis the gesture was latched to.
        axis: Option<DragAxis>,
        /// Velocity from the last two samples, in px/ms.
        velocity: Vec2,
    },
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Vec2,
    time: Instant,
}

/// Single-gesture touch state: direction latch, tap detection, pinch
/// spread and release velocity.
///
/// A gesture lasts from the first `start` to the next `end`. Once an axis
/// is claimed it stays claimed until the finger lifts.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    latch_px: f32,
    tap_slop_px: f32,
    origin: Option<Vec2>,
    previous: Option<Sample>,
    last: Option<Sample>,
    axis: Option<DragAxis>,
    pinch_spread: Option<f32>,
    was_pinch: bool,
    left_slop: bool,
}

impl TouchTracker {
    /// Create a tracker with the given direction latch and tap slop, in px.
    #[must_use]
    pub fn new(latch_px: f32, tap_slop_px: f32) -> Self {
        Self {
            latch_px,
            tap_slop_px,
            origin: None,
            previous: None,
            last: None,
            axis: None,
            pinch_spread: None,
            was_pinch: false,
            left_slop: false,
        }
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Axis claimed by the current gesture.
    #[must_use]
    pub fn axis(&self) -> Option<DragAxis> {
        self.axis
    }

    /// A finger touched down.
    pub fn start(
        &mut self,
        points: TouchPoints,
        now: Instant,
    ) -> Option<TouchGesture> {
        if let Some(spread) = points.spread() {
            return self.begin_pinch(spread);
        }
        if self.origin.is_some() {
            // second finger lifted earlier; keep the running gesture
            return None;
        }
        let sample = Sample {
            position: points.primary,
            time: now,
        };
        self.origin = Some(points.primary);
        self.previous = None;
        self.last = Some(sample);
        self.axis = None;
        self.left_slop = false;
        None
    }

    /// Fingers moved.
    pub fn moved(
        &mut self,
        points: TouchPoints,
        now: Instant,
    ) -> Option<TouchGesture> {
        if let Some(spread) = points.spread() {
            let Some(initial) = self.pinch_spread else {
                return self.begin_pinch(spread);
            };
            if initial <= f32::EPSILON {
                return None;
            }
            return Some(TouchGesture::Pinch {
                scale: spread / initial,
            });
        }
        if self.was_pinch {
            return None;
        }

        let origin = *self.origin.get_or_insert(points.primary);
        let last = self.last.map_or(points.primary, |s| s.position);
        let delta = points.primary - last;

        self.previous = self.last;
        self.last = Some(Sample {
            position: points.primary,
            time: now,
        });

        let total = points.primary - origin;
        if total.length() > self.tap_slop_px {
            self.left_slop = true;
        }
        if self.axis.is_none() {
            if total.x.abs() > self.latch_px && total.x.abs() >= total.y.abs()
            {
                self.axis = Some(DragAxis::Horizontal);
            } else if total.y.abs() > self.latch_px {
                self.axis = Some(DragAxis::Vertical);
            }
        }

        Some(TouchGesture::Drag {
            delta,
            axis: self.axis,
        })
    }

    /// A finger lifted. `points` holds the changed touch.
    ///
    /// Ends the whole gesture; pinches end silently.
    pub fn end(&mut self, points: TouchPoints) -> Option<TouchGesture> {
        let gesture = if self.was_pinch || self.origin.is_none() {
            None
        } else if !self.left_slop && self.axis.is_none() {
            Some(TouchGesture::Tap {
                position: points.primary,
            })
        } else {
            Some(TouchGesture::Release {
                axis: self.axis,
                velocity: self.velocity(),
            })
        };
        self.reset();
        gesture
    }

    /// Drop all gesture state.
    pub fn reset(&mut self) {
        self.origin = None;
        self.previous = None;
        self.last = None;
        self.axis = None;
        self.pinch_spread = None;
        self.was_pinch = false;
        self.left_slop = false;
    }

    fn begin_pinch(&mut self, spread: f32) -> Option<TouchGesture> {
        self.pinch_spread = Some(spread);
        self.was_pinch = true;
        if self.origin.is_none() {
            self.origin = Some(Vec2::ZERO);
        }
        Some(TouchGesture::PinchStarted)
    }

    fn velocity(&self) -> Vec2 {
        let (Some(prev), Some(last)) = (self.previous, self.last) else {
            return Vec2::ZERO;
        };
        let dt_ms =
            last.time.saturating_duration_since(prev.time).as_secs_f32() * 1000.0;
        if dt_ms <= f32::EPSILON {
            return Vec2::ZERO;
        }
        (last.position - prev.position) / dt_ms
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    fn tracker() -> TouchTracker {
        TouchTracker::new(15.0, 10.0)
    }

    #[test]
    fn short_touch_is_tap() {
        let mut t = tracker();
        let t0 = Instant::now();
        assert!(t.start(TouchPoints::single(100.0, 100.0), t0).is_none());
        let _ = t.moved(
            TouchPoints::single(103.0, 102.0),
            t0 + Duration::from_millis(16),
        );
        let g = t.end(TouchPoints::single(103.0, 102.0));
        assert_eq!(
            g,
            Some(TouchGesture::Tap {
                position: Vec2::new(103.0, 102.0)
            })
        );
        assert!(!t.is_active());
    }

    #[test]
    fn first_axis_past_latch_claims_gesture() {
        let mut t = tracker();
        let t0 = Instant::now();
        let _ = t.start(TouchPoints::single(0.0, 0.0), t0);

        let g = t.moved(TouchPoints::single(2.0, 10.0), t0);
        assert_eq!(
            g,
            Some(TouchGesture::Drag {
                delta: Vec2::new(2.0, 10.0),
                axis: None
            })
        );

        let g = t.moved(TouchPoints::single(4.0, 20.0), t0);
        assert!(matches!(
            g,
            Some(TouchGesture::Drag {
                axis: Some(DragAxis::Vertical),
                ..
            })
        ));

        // Large horizontal movement afterwards does not re-latch.
        let _ = t.moved(TouchPoints::single(200.0, 20.0), t0);
        assert_eq!(t.axis(), Some(DragAxis::Vertical));
    }

    #[test]
    fn release_velocity_uses_last_two_samples() {
        let mut t = tracker();
        let t0 = Instant::now();
        let _ = t.start(TouchPoints::single(0.0, 0.0), t0);
        let _ = t.moved(
            TouchPoints::single(0.0, 40.0),
            t0 + Duration::from_millis(10),
        );
        let _ = t.moved(
            TouchPoints::single(0.0, 60.0),
            t0 + Duration::from_millis(20),
        );
        let Some(TouchGesture::Release { axis, velocity }) =
            t.end(TouchPoints::single(0.0, 60.0))
        else {
            panic!("expected release");
        };
        assert_eq!(axis, Some(DragAxis::Vertical));
        assert!((velocity.y - 2.0).abs() < 1e-4);
        assert!(velocity.x.abs() < 1e-6);
    }

    #[test]
    fn pinch_reports_spread_ratio_and_ends_silently() {
        let mut t = tracker();
        let t0 = Instant::now();
        let _ = t.start(TouchPoints::single(100.0, 100.0), t0);
        let g = t.start(
            TouchPoints::pair(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)),
            t0,
        );
        assert_eq!(g, Some(TouchGesture::PinchStarted));

        let g = t.moved(
            TouchPoints::pair(Vec2::new(50.0, 100.0), Vec2::new(250.0, 100.0)),
            t0,
        );
        let Some(TouchGesture::Pinch { scale }) = g else {
            panic!("expected pinch");
        };
        assert!((scale - 2.0).abs() < 1e-5);

        // Remaining finger movement after a pinch is not a drag.
        assert!(t.moved(TouchPoints::single(60.0, 100.0), t0).is_none());
        assert!(t.end(TouchPoints::single(60.0, 100.0)).is_none());
    }
}
