use glam::{Vec2, Vec3};

/// Platform-agnostic input events.
///
/// Hosts translate DOM or window-system events into these and feed them to
/// [`GalleryController::handle_input`](crate::GalleryController::handle_input).
/// Keyboard input goes through
/// [`GalleryController::handle_key`](crate::GalleryController::handle_key)
/// instead, since key codes are strings.
///
/// # Example
///
/// ```ignore
/// controller.handle_input(InputEvent::PointerMoved { x: 100.0, y: 200.0 }, now);
/// controller.handle_input(InputEvent::Orientation { beta: 60.0, gamma: -5.0 }, now);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute viewport position.
    PointerMoved {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Primary pointer click.
    PointerClicked {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Touch start/move/end with up to two tracked points.
    Touch {
        /// Which part of the gesture this is.
        phase: TouchPhase,
        /// Active (or, for `End`, changed) touch points.
        points: TouchPoints,
    },
    /// Device orientation reading, in degrees.
    Orientation {
        /// Front/back tilt (-180..180).
        beta: f32,
        /// Left/right tilt (-90..90).
        gamma: f32,
    },
    /// Result of the host's orientation/motion permission prompt.
    OrientationPermission {
        /// Whether the user granted access.
        granted: bool,
    },
    /// Accelerometer reading in m/s², gravity excluded.
    Motion {
        /// Acceleration vector.
        acceleration: Vec3,
    },
    /// Viewport resized.
    Resized {
        /// New width in CSS pixels.
        width: f32,
        /// New height in CSS pixels.
        height: f32,
    },
}

/// Phase of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger touched down.
    Start,
    /// Fingers moved.
    Move,
    /// A finger lifted.
    End,
}

/// Up to two touch points; a second point means a pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoints {
    /// First touch position in CSS pixels.
    pub primary: Vec2,
    /// Second touch position, if two fingers are down.
    pub secondary: Option<Vec2>,
}

impl TouchPoints {
    /// A single-finger touch.
    #[must_use]
    pub fn single(x: f32, y: f32) -> Self {
        Self {
            primary: Vec2::new(x, y),
            secondary: None,
        }
    }

    /// A two-finger touch.
    #[must_use]
    pub fn pair(a: Vec2, b: Vec2) -> Self {
        Self {
            primary: a,
            secondary: Some(b),
        }
    }

    /// Distance between the two fingers, if both are present.
    #[must_use]
    pub fn spread(&self) -> Option<f32> {
        self.secondary.map(|b| (b - self.primary).length())
    }
}
