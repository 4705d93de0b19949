//! Platform-agnostic input aggregation.
//!
//! Hosts feed [`InputEvent`]s (pointer, touch, orientation, motion) into the
//! controller; the [`InputAggregator`] normalizes them into bounded axes,
//! gestures and shake detections that the per-frame animator reads.

mod event;
mod gyro;
mod keyboard;
mod motion;
mod pointer;
mod state;
mod touch;

pub use event::{InputEvent, TouchPhase, TouchPoints};
pub use gyro::GyroState;
pub use keyboard::KeyAction;
pub use motion::{MotionState, ShakeDetector};
pub use pointer::PointerState;
pub use state::{FrameInput, InputAggregator, InputSource};
pub use touch::{DragAxis, TouchGesture, TouchTracker};
