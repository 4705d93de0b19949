use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Half-extents of the random starting pose, as multiples of π.
///
/// A value of `1.0` for `yaw` means the yaw is drawn from `[-π, π]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct RandomizeRange {
    /// Pitch (rotation about X) half-extent.
    pub pitch: f32,
    /// Yaw (rotation about Y) half-extent.
    pub yaw: f32,
    /// Roll (rotation about Z) half-extent.
    pub roll: f32,
}

impl Default for RandomizeRange {
    fn default() -> Self {
        Self {
            pitch: 0.4,
            yaw: 1.0,
            roll: 0.15,
        }
    }
}

/// Per-presentation tuning for the per-frame animator.
///
/// Solo, grid and scroll presentations share one blend/transition
/// implementation and differ only in these values. Defaults differ per
/// presentation, so an overriding TOML table must be complete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct PresentationParams {
    /// Yaw reached at full horizontal input, as a multiple of π.
    #[schemars(title = "Yaw Sensitivity", range(min = 0.0, max = 1.0))]
    pub yaw_sensitivity: f32,
    /// Pitch reached at full vertical input, as a multiple of π.
    #[schemars(title = "Pitch Sensitivity", range(min = 0.0, max = 1.0))]
    pub pitch_sensitivity: f32,
    /// Blend rate toward the input-driven target.
    #[schemars(title = "Follow Rate", range(min = 0.01, max = 1.0))]
    pub follow_rate: f32,
    /// Blend rate of the roll axis back to its home value.
    #[schemars(title = "Roll Rate", range(min = 0.01, max = 1.0))]
    pub roll_rate: f32,
    /// Blend rate while a one-shot transition is settling.
    #[schemars(title = "Transition Rate", range(min = 0.01, max = 1.0))]
    pub transition_rate: f32,
    /// Summed absolute angular distance (radians) that ends a transition.
    #[schemars(skip)]
    pub transition_threshold: f32,
    /// Multiplicative decay toward home per idle frame.
    #[schemars(title = "Idle Decay", range(min = 0.5, max = 1.0))]
    pub idle_decay: f32,
    /// Optional `[upward, downward]` pitch offset limits in radians.
    /// Upward tilt is negative pitch.
    #[schemars(skip)]
    pub pitch_limits: Option<[f32; 2]>,
    /// Random starting pose used by intro/switch transitions.
    #[schemars(skip)]
    pub randomize: RandomizeRange,
}

impl PresentationParams {
    /// Single centered model.
    #[must_use]
    pub fn solo() -> Self {
        Self {
            yaw_sensitivity: 0.25,
            pitch_sensitivity: 0.15,
            follow_rate: 0.12,
            roll_rate: 0.12,
            transition_rate: 0.12,
            transition_threshold: 0.01,
            idle_decay: 0.94,
            pitch_limits: None,
            randomize: RandomizeRange::default(),
        }
    }

    /// Desktop multi-model grid.
    #[must_use]
    pub fn grid() -> Self {
        Self {
            yaw_sensitivity: 0.4,
            pitch_sensitivity: 0.4,
            follow_rate: 0.1,
            roll_rate: 0.08,
            transition_rate: 0.08,
            transition_threshold: 0.02,
            idle_decay: 0.95,
            pitch_limits: Some([-0.6, 0.35]),
            randomize: RandomizeRange {
                pitch: 0.6,
                yaw: 1.0,
                roll: 0.2,
            },
        }
    }

    /// Mobile single-column scroll list.
    #[must_use]
    pub fn scroll() -> Self {
        Self {
            follow_rate: 0.15,
            ..Self::grid()
        }
    }
}

impl Default for PresentationParams {
    fn default() -> Self {
        Self::solo()
    }
}

/// Tilt of the solo info panel that mirrors the model rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct InfoPanelOptions {
    /// Maximum panel yaw in degrees.
    pub max_yaw_deg: f32,
    /// Maximum panel pitch in degrees.
    pub max_pitch_deg: f32,
    /// Exponent applied to the normalized pitch before scaling back.
    pub pitch_softening: f32,
    /// Blend rate toward the pointer while the model is transitioning.
    pub follow_rate: f32,
    /// Blend rate back to zero while the panel is hidden.
    pub relax_rate: f32,
}

impl Default for InfoPanelOptions {
    fn default() -> Self {
        Self {
            max_yaw_deg: 20.0,
            max_pitch_deg: 2.0,
            pitch_softening: 1.35,
            follow_rate: 0.35,
            relax_rate: 0.18,
        }
    }
}

/// Animation tuning for every presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Solo presentation.
    #[schemars(title = "Solo")]
    pub solo: PresentationParams,
    /// Desktop grid presentation.
    #[schemars(title = "Grid")]
    pub grid: PresentationParams,
    /// Mobile scroll presentation.
    #[schemars(title = "Scroll")]
    pub scroll: PresentationParams,
    /// Position lerp rate for grid entries drifting to a new slot.
    #[schemars(skip)]
    pub return_drift_rate: f32,
    /// Rotation decay for grid entries drifting to a new slot.
    #[schemars(skip)]
    pub return_rotation_decay: f32,
    /// Distance and rotation magnitude that end a drift.
    #[schemars(skip)]
    pub return_threshold: f32,
    /// Info panel tilt.
    #[schemars(skip)]
    pub info_panel: InfoPanelOptions,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            solo: PresentationParams::solo(),
            grid: PresentationParams::grid(),
            scroll: PresentationParams::scroll(),
            return_drift_rate: 0.03,
            return_rotation_decay: 0.94,
            return_threshold: 0.01,
            info_panel: InfoPanelOptions::default(),
        }
    }
}
