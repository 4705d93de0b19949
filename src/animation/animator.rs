//! Per-frame rotation and position update for one display entry.

use glam::{Vec2, Vec3};

use super::blend::{approach, blend, decay_toward, rotation_distance};
use super::presentation::Presentation;
use super::transition::TransitionPhase;
use crate::input::FrameInput;
use crate::options::{AnimationOptions, PresentationParams};
use crate::scene::DisplayEntry;

/// Drift parameters for entries moving to a new layout slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnDrift {
    /// Position lerp rate per frame.
    pub rate: f32,
    /// Rotation decay toward home per frame.
    pub rotation_decay: f32,
    /// Position distance and rotation distance that end the drift.
    pub threshold: f32,
}

impl ReturnDrift {
    /// Drift parameters from the animation options.
    #[must_use]
    pub fn from_options(opts: &AnimationOptions) -> Self {
        Self {
            rate: opts.return_drift_rate,
            rotation_decay: opts.return_rotation_decay,
            threshold: opts.return_threshold,
        }
    }
}

/// Everything one frame's entry update needs besides the entry itself.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    /// Active presentation.
    pub presentation: Presentation,
    /// Its tuning.
    pub params: &'a PresentationParams,
    /// This frame's input.
    pub input: FrameInput,
    /// Relayout drift parameters.
    pub drift: ReturnDrift,
}

impl<'a> StepContext<'a> {
    /// Context for a presentation, reading its params from `opts`.
    #[must_use]
    pub fn new(
        presentation: Presentation,
        opts: &'a AnimationOptions,
        input: FrameInput,
    ) -> Self {
        Self {
            presentation,
            params: presentation.params(opts),
            input,
            drift: ReturnDrift::from_options(opts),
        }
    }
}

/// Advance one entry by one frame.
///
/// 1. Returning entries drift to their slot and decay toward home.
/// 2. Settling entries blend toward the settle target at the transition
///    rate and go idle below the threshold.
/// 3. Otherwise, live input pulls yaw/pitch toward the input target at the
///    follow rate (roll toward home at the roll rate).
/// 4. Without input the rotation decays multiplicatively toward home.
pub fn advance_entry(entry: &mut DisplayEntry, ctx: &StepContext<'_>) {
    let params = ctx.params;
    match entry.transition.phase {
        TransitionPhase::Returning => {
            advance_return(entry, &ctx.drift);
            return;
        }
        TransitionPhase::Settling => {
            let target = ctx.presentation.settle_target(
                params,
                entry.home_rotation,
                &ctx.input,
            );
            let _ = entry.transition.settle(
                &mut entry.rotation,
                target,
                params.transition_rate,
                params.transition_threshold,
            );
            return;
        }
        TransitionPhase::Idle => {}
    }

    if ctx.input.active {
        let target =
            Presentation::input_target(params, entry.home_rotation, &ctx.input);
        let r = &mut entry.rotation;
        r.x = approach(r.x, target.x, params.follow_rate);
        r.y = approach(r.y, target.y, params.follow_rate);
        r.z = approach(r.z, target.z, params.roll_rate);
    } else {
        entry.rotation =
            decay_toward(entry.rotation, entry.home_rotation, params.idle_decay);
    }
}

fn advance_return(entry: &mut DisplayEntry, drift: &ReturnDrift) {
    let distance = entry.position.distance(entry.base_position);
    let spin = rotation_distance(entry.rotation, entry.home_rotation);
    if distance < drift.threshold && spin < drift.threshold {
        entry.position = entry.base_position;
        entry.rotation = entry.home_rotation;
        entry.transition.phase = TransitionPhase::Idle;
        return;
    }
    entry.position = blend(entry.position, entry.base_position, drift.rate);
    entry.rotation =
        decay_toward(entry.rotation, entry.home_rotation, drift.rotation_decay);
}

/// Offset `base` by `offset` in the XY plane.
#[must_use]
pub fn offset_xy(base: Vec3, offset: Vec2) -> Vec3 {
    base + offset.extend(0.0)
}
