//! Per-frame model animation: exponential blending, one-shot transitions
//! and the grid intro sequencer.
//!
//! Solo, grid and scroll presentations run through the same
//! [`advance_entry`] step and differ only in their
//! [`PresentationParams`](crate::options::PresentationParams).

mod animator;
mod blend;
mod intro;
mod presentation;
pub mod transition;

pub use animator::{advance_entry, offset_xy, ReturnDrift, StepContext};
pub use blend::{approach, blend, blend2, decay_toward, rotation_distance};
pub use intro::IntroSequencer;
pub use presentation::Presentation;
pub use transition::{random_pose, Transition, TransitionPhase};
