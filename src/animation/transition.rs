//! One-shot rotation transitions attached to a display entry.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use serde::Serialize;

use super::blend::{blend, rotation_distance};
use crate::options::RandomizeRange;

/// Where an entry is in its one-shot animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    /// Steady state: rotation follows input or rests at home.
    #[default]
    Idle,
    /// Blending from a random pose toward the settle target.
    Settling,
    /// Drifting to a new layout slot after a relayout.
    Returning,
}

/// Per-entry transition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// Current phase.
    pub phase: TransitionPhase,
    /// Intro generation that last randomized this entry, if any.
    pub generation: Option<u64>,
}

impl Transition {
    /// Whether a one-shot animation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Whether the rotation is blending toward a settle target.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.phase == TransitionPhase::Settling
    }

    /// Throw `rotation` to a random pose and start settling.
    pub fn randomize<R: Rng>(
        &mut self,
        rotation: &mut Vec3,
        range: &RandomizeRange,
        rng: &mut R,
    ) {
        *rotation = random_pose(range, rng);
        self.phase = TransitionPhase::Settling;
    }

    /// One settling step toward `target`.
    ///
    /// Returns `true` when the summed angular distance drops below
    /// `threshold`; the rotation then snaps to `target` and the phase
    /// returns to idle.
    pub fn settle(
        &mut self,
        rotation: &mut Vec3,
        target: Vec3,
        rate: f32,
        threshold: f32,
    ) -> bool {
        *rotation = blend(*rotation, target, rate);
        if rotation_distance(*rotation, target) < threshold {
            *rotation = target;
            self.phase = TransitionPhase::Idle;
            return true;
        }
        false
    }

    /// Start drifting toward a new slot.
    pub fn begin_return(&mut self) {
        self.phase = TransitionPhase::Returning;
    }
}

/// Random `(pitch, yaw, roll)` inside `±range · π` per axis.
pub fn random_pose<R: Rng>(range: &RandomizeRange, rng: &mut R) -> Vec3 {
    let mut axis = |extent: f32| rng.random_range(-1.0_f32..=1.0) * PI * extent;
    let pitch = axis(range.pitch);
    let yaw = axis(range.yaw);
    let roll = axis(range.roll);
    Vec3::new(pitch, yaw, roll)
}
