use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::animation::blend2;
use crate::options::{InfoPanelOptions, PresentationParams};

/// Heading and body lines shown next to the solo model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoContent {
    /// Panel heading.
    pub title: String,
    /// Body paragraphs, already trimmed and non-empty.
    pub lines: Vec<String>,
}

impl InfoContent {
    /// Whether there is anything to show.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.lines.is_empty()
    }
}

/// Solo info panel: content, visibility and a tilt that mirrors the model.
#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    content: InfoContent,
    visible: bool,
    /// `(pitch, yaw)` in radians.
    tilt: Vec2,
}

/// Inputs for one tilt step.
#[derive(Debug, Clone, Copy)]
pub struct TiltInput {
    /// Rotation of the current solo model, if loaded.
    pub model_rotation: Option<Vec3>,
    /// Whether that model is mid-transition.
    pub transitioning: bool,
    /// Pointer axes, used while the model rotation is not meaningful.
    pub pointer_axes: Vec2,
}

impl InfoPanel {
    /// Replace the content and decide visibility.
    pub fn refresh(&mut self, content: InfoContent, allowed: bool) {
        self.visible = allowed && content.has_content();
        self.content = content;
    }

    /// Hide without touching the content.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the panel is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current content.
    #[must_use]
    pub fn content(&self) -> &InfoContent {
        &self.content
    }

    /// Tilt as `(pitch, yaw)` in degrees.
    #[must_use]
    pub fn tilt_degrees(&self) -> Vec2 {
        Vec2::new(self.tilt.x.to_degrees(), self.tilt.y.to_degrees())
    }

    /// Advance the tilt by one frame.
    pub fn advance(
        &mut self,
        input: &TiltInput,
        solo: &PresentationParams,
        opts: &InfoPanelOptions,
    ) {
        if !self.visible {
            self.tilt = blend2(self.tilt, Vec2::ZERO, opts.relax_rate);
            return;
        }
        let max_yaw = opts.max_yaw_deg.to_radians();
        let fallback = Vec2::new(
            soften_pitch(-input.pointer_axes.y * PI * solo.pitch_sensitivity, opts),
            (input.pointer_axes.x * PI * solo.yaw_sensitivity)
                .clamp(-max_yaw, max_yaw),
        );
        self.tilt = match input.model_rotation {
            Some(_) if input.transitioning => {
                blend2(self.tilt, fallback, opts.follow_rate)
            }
            Some(rotation) => Vec2::new(
                soften_pitch(rotation.x, opts),
                rotation.y.clamp(-max_yaw, max_yaw),
            ),
            None => fallback,
        };
    }
}

/// Clamp pitch to the panel limit with an easing exponent, so small model
/// tilts barely move the panel.
fn soften_pitch(radians: f32, opts: &InfoPanelOptions) -> f32 {
    let max = opts.max_pitch_deg.to_radians();
    if max == 0.0 {
        return 0.0;
    }
    let n = (radians / max).clamp(-1.0, 1.0);
    n.signum() * n.abs().powf(opts.pitch_softening) * max
}
