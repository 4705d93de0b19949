use std::f32::consts::PI;

use glam::Vec3;
use serde::Serialize;

use crate::input::FrameInput;
use crate::options::{AnimationOptions, PresentationParams};

/// How models are currently laid out.
///
/// The three presentations share one animator; they only differ in the
/// [`PresentationParams`] they select and in the pose a transition settles
/// toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// One large model.
    Solo,
    /// Desktop multi-column grid.
    Grid,
    /// Portrait single-column scroll list.
    Scroll,
}

impl Presentation {
    /// Tuning for this presentation.
    #[must_use]
    pub fn params(self, opts: &AnimationOptions) -> &PresentationParams {
        match self {
            Self::Solo => &opts.solo,
            Self::Grid => &opts.grid,
            Self::Scroll => &opts.scroll,
        }
    }

    /// Rotation the live input asks for, relative to `home`.
    ///
    /// Positive vertical input tilts the model's top toward the viewer
    /// (negative pitch). Touch rotation is added on top of the axes.
    #[must_use]
    pub fn input_target(
        params: &PresentationParams,
        home: Vec3,
        input: &FrameInput,
    ) -> Vec3 {
        let yaw =
            input.axes.x * PI * params.yaw_sensitivity + input.touch_rotation.x;
        let mut pitch = -input.axes.y * PI * params.pitch_sensitivity
            + input.touch_rotation.y;
        if let Some([upward, downward]) = params.pitch_limits {
            pitch = pitch.clamp(upward, downward);
        }
        Vec3::new(home.x + pitch, home.y + yaw, home.z)
    }

    /// Pose a one-shot transition settles toward.
    ///
    /// Solo follows live input so the model lands where the pointer already
    /// points; grid and scroll settle to the home pose.
    #[must_use]
    pub fn settle_target(
        self,
        params: &PresentationParams,
        home: Vec3,
        input: &FrameInput,
    ) -> Vec3 {
        match self {
            Self::Solo if input.active => {
                Self::input_target(params, home, input)
            }
            _ => home,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::InputSource;

    fn input(axes: Vec2) -> FrameInput {
        FrameInput {
            axes,
            active: true,
            touch_rotation: Vec2::ZERO,
            source: InputSource::Pointer,
        }
    }

    #[test]
    fn solo_and_grid_use_different_sensitivities() {
        let opts = AnimationOptions::default();
        let i = input(Vec2::new(1.0, 0.0));
        let solo = Presentation::input_target(
            Presentation::Solo.params(&opts),
            Vec3::ZERO,
            &i,
        );
        let grid = Presentation::input_target(
            Presentation::Grid.params(&opts),
            Vec3::ZERO,
            &i,
        );
        assert!((solo.y - PI * 0.25).abs() < 1e-6);
        assert!((grid.y - PI * 0.4).abs() < 1e-6);
    }

    #[test]
    fn grid_pitch_limits_are_asymmetric() {
        let opts = AnimationOptions::default();
        let params = Presentation::Grid.params(&opts);
        let up = Presentation::input_target(
            params,
            Vec3::ZERO,
            &input(Vec2::new(0.0, 1.0)),
        );
        let down = Presentation::input_target(
            params,
            Vec3::ZERO,
            &input(Vec2::new(0.0, -1.0)),
        );
        assert!((up.x + 0.6).abs() < 1e-6);
        assert!((down.x - 0.35).abs() < 1e-6);
    }

    #[test]
    fn grid_settles_home_and_solo_follows_input() {
        let opts = AnimationOptions::default();
        let home = Vec3::new(0.0, 0.26, 0.0);
        let i = input(Vec2::new(0.5, 0.0));
        assert_eq!(
            Presentation::Grid.settle_target(&opts.grid, home, &i),
            home
        );
        let solo = Presentation::Solo.settle_target(&opts.solo, Vec3::ZERO, &i);
        assert!(solo.y > 0.0);

        let idle = FrameInput::IDLE;
        assert_eq!(
            Presentation::Solo.settle_target(&opts.solo, Vec3::ZERO, &idle),
            Vec3::ZERO
        );
    }
}
