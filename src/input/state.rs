use glam::{Vec2, Vec3};
use web_time::{Duration, Instant};

use super::event::{TouchPhase, TouchPoints};
use super::gyro::GyroState;
use super::motion::{MotionState, ShakeDetector};
use super::pointer::PointerState;
use super::touch::{TouchGesture, TouchTracker};
use crate::camera::Viewport;
use crate::options::InputOptions;

/// Which input family currently drives rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// Device orientation.
    Gyro,
    /// Mouse pointer.
    Pointer,
    /// Accumulated touch-drag rotation only.
    Touch,
    /// Nothing active.
    Idle,
}

/// Input read once per frame by the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Normalized axes in `[-1, 1]`.
    pub axes: Vec2,
    /// Whether any input source is live this frame.
    pub active: bool,
    /// Accumulated touch rotation in radians (`x` = yaw, `y` = pitch).
    pub touch_rotation: Vec2,
    /// Source behind `axes`.
    pub source: InputSource,
}

impl FrameInput {
    /// No input at all.
    pub const IDLE: Self = Self {
        axes: Vec2::ZERO,
        active: false,
        touch_rotation: Vec2::ZERO,
        source: InputSource::Idle,
    };
}

/// Single live input state for the session.
///
/// Event handlers write into it; the frame loop reads it through
/// [`frame_input`](Self::frame_input). Gesture interpretation that depends
/// on the display mode (scroll vs. rotate) stays with the controller, which
/// receives the [`TouchGesture`]s produced here.
#[derive(Debug, Clone)]
pub struct InputAggregator {
    opts: InputOptions,
    viewport: Viewport,
    pointer: PointerState,
    touch: TouchTracker,
    gyro: GyroState,
    motion: MotionState,
    shake: ShakeDetector,
    touch_rotation: Vec2,
}

impl InputAggregator {
    /// Create an aggregator for the given viewport.
    #[must_use]
    pub fn new(
        opts: InputOptions,
        viewport: Viewport,
        direction_latch_px: f32,
    ) -> Self {
        let touch = TouchTracker::new(direction_latch_px, opts.tap_slop_px);
        Self {
            opts,
            viewport,
            pointer: PointerState::default(),
            touch,
            gyro: GyroState::default(),
            motion: MotionState::default(),
            shake: ShakeDetector::default(),
            touch_rotation: Vec2::ZERO,
        }
    }

    /// Input options in effect.
    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.opts
    }

    /// Update the viewport used for pointer normalization.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Pointer moved to a pixel position.
    pub fn pointer_moved(&mut self, x: f32, y: f32, now: Instant) {
        self.pointer.moved(x, y, &self.viewport, now);
    }

    /// Touch event. Returns the interpreted gesture, if any.
    ///
    /// Single-finger start and end positions also update the pointer axes
    /// (without waking the idle timer), so taps aim grid hit tests.
    pub fn touch(
        &mut self,
        phase: TouchPhase,
        points: TouchPoints,
        now: Instant,
    ) -> Option<TouchGesture> {
        match phase {
            TouchPhase::Start => {
                if points.secondary.is_none() {
                    self.pointer.place(
                        points.primary.x,
                        points.primary.y,
                        &self.viewport,
                    );
                }
                self.touch.start(points, now)
            }
            TouchPhase::Move => self.touch.moved(points, now),
            TouchPhase::End => {
                self.pointer.place(
                    points.primary.x,
                    points.primary.y,
                    &self.viewport,
                );
                self.touch.end(points)
            }
        }
    }

    /// Accumulate a touch-drag pixel delta as rotation.
    ///
    /// Dragging right turns the model right; dragging down tilts it toward
    /// the viewer.
    pub fn add_touch_rotation(&mut self, delta_px: Vec2) {
        self.touch_rotation += delta_px * self.opts.touch_radians_per_px;
    }

    /// Accumulated touch rotation in radians.
    #[must_use]
    pub fn touch_rotation(&self) -> Vec2 {
        self.touch_rotation
    }

    /// Device orientation reading in degrees.
    pub fn orientation(&mut self, beta: f32, gamma: f32) {
        self.gyro.set_raw(beta, gamma, &self.opts.gyro);
    }

    /// Host reported the orientation permission outcome.
    pub fn set_orientation_permission(&mut self, granted: bool) {
        if granted {
            log::info!("device orientation enabled");
        } else {
            log::debug!("device orientation permission denied");
        }
        self.gyro.set_enabled(granted);
    }

    /// Whether gyro readings are accepted.
    #[must_use]
    pub fn gyro_enabled(&self) -> bool {
        self.gyro.is_enabled()
    }

    /// Accelerometer reading. Returns `true` when it completes a shake.
    pub fn motion(&mut self, acceleration: Vec3, now: Instant) -> bool {
        self.motion.set_acceleration(acceleration, &self.opts);
        self.shake.sample(acceleration, now, &self.opts.shake)
    }

    /// Smoothed parallax offset for the solo model.
    #[must_use]
    pub fn motion_offset(&self) -> Vec2 {
        self.motion.offset()
    }

    /// Advance per-frame smoothing (gyro, parallax).
    pub fn advance_frame(&mut self) {
        self.gyro.advance(&self.opts.gyro);
        self.motion.advance(&self.opts);
    }

    /// Current axes: the gyro when it is active, otherwise the pointer.
    #[must_use]
    pub fn axes(&self) -> Vec2 {
        if self.gyro.is_active(&self.opts.gyro) {
            self.gyro.axes()
        } else {
            self.pointer.axes
        }
    }

    /// No pointer movement within the idle timeout.
    #[must_use]
    pub fn is_pointer_idle(&self, now: Instant) -> bool {
        !self.pointer.is_moving(now, self.idle_timeout())
    }

    /// Snapshot for this frame's animation step.
    #[must_use]
    pub fn frame_input(&self, now: Instant) -> FrameInput {
        let touch_rotation = self.touch_rotation;
        let (axes, source) = if self.gyro.is_active(&self.opts.gyro) {
            (self.gyro.axes(), InputSource::Gyro)
        } else if !self.is_pointer_idle(now) {
            (self.pointer.axes, InputSource::Pointer)
        } else if touch_rotation != Vec2::ZERO {
            (Vec2::ZERO, InputSource::Touch)
        } else {
            (self.pointer.axes, InputSource::Idle)
        };
        FrameInput {
            axes,
            active: source != InputSource::Idle,
            touch_rotation,
            source,
        }
    }

    /// Reset per-model transient state (touch rotation, parallax).
    pub fn reset_transient(&mut self) {
        self.touch_rotation = Vec2::ZERO;
        self.motion.reset();
    }

    fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.opts.idle_timeout_ms)
    }
}
