use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Device-orientation (gyroscope) normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gyroscope", inline)]
#[serde(default)]
pub struct GyroOptions {
    /// Front/back tilt (beta, degrees) treated as the neutral pose.
    #[schemars(title = "Neutral Tilt", range(min = 0.0, max = 90.0))]
    pub neutral_beta_deg: f32,
    /// Beta deviation (degrees) that maps to a full axis value.
    #[schemars(title = "Tilt Range", range(min = 5.0, max = 90.0))]
    pub beta_range_deg: f32,
    /// Left/right tilt (gamma, degrees) that maps to a full axis value.
    #[schemars(title = "Roll Range", range(min = 5.0, max = 90.0))]
    pub gamma_range_deg: f32,
    /// Per-frame exponential smoothing factor.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0))]
    pub smoothing: f32,
    /// |beta| (degrees) above which gamma is progressively damped.
    #[schemars(skip)]
    pub vertical_threshold_deg: f32,
    /// Lowest gamma weight applied when the device is fully upright.
    #[schemars(skip)]
    pub min_secondary_weight: f32,
    /// Axis magnitude below which gyro input counts as absent.
    #[schemars(skip)]
    pub active_epsilon: f32,
}

impl Default for GyroOptions {
    fn default() -> Self {
        Self {
            neutral_beta_deg: 55.0,
            beta_range_deg: 45.0,
            gamma_range_deg: 45.0,
            smoothing: 0.15,
            vertical_threshold_deg: 75.0,
            min_secondary_weight: 0.2,
            active_epsilon: 0.01,
        }
    }
}

/// Accelerometer shake detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Shake", inline)]
#[serde(default)]
pub struct ShakeOptions {
    /// Acceleration magnitude (m/s²) a sample must exceed.
    pub magnitude_threshold: f32,
    /// Minimum spacing between considered samples, in milliseconds.
    pub sample_interval_ms: u64,
    /// Rolling window length, in milliseconds.
    pub window_ms: u64,
    /// High-magnitude samples inside the window that count as a shake.
    pub required_samples: usize,
}

impl Default for ShakeOptions {
    fn default() -> Self {
        Self {
            magnitude_threshold: 15.0,
            sample_interval_ms: 50,
            window_ms: 600,
            required_samples: 4,
        }
    }
}

/// Input normalization parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
pub struct InputOptions {
    /// Pointer inactivity (ms) after which the pointer counts as idle.
    #[schemars(title = "Idle Timeout (ms)", range(min = 100, max = 10000))]
    pub idle_timeout_ms: u64,
    /// Radians of model rotation per pixel of touch drag.
    #[schemars(title = "Touch Sensitivity", range(min = 0.001, max = 0.05))]
    pub touch_radians_per_px: f32,
    /// Movement (px) below which a touch counts as a tap.
    #[schemars(skip)]
    pub tap_slop_px: f32,
    /// Smallest pinch zoom.
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Largest pinch zoom.
    #[schemars(skip)]
    pub max_zoom: f32,
    /// World units of solo parallax per m/s² of lateral acceleration.
    #[schemars(skip)]
    pub motion_offset_scale: f32,
    /// Largest parallax offset in world units.
    #[schemars(skip)]
    pub motion_offset_limit: f32,
    /// Per-frame smoothing of the parallax offset.
    #[schemars(skip)]
    pub motion_smoothing: f32,
    /// Gyroscope normalization.
    pub gyro: GyroOptions,
    /// Shake detection.
    pub shake: ShakeOptions,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            idle_timeout_ms: 3000,
            touch_radians_per_px: 0.01,
            tap_slop_px: 10.0,
            min_zoom: 0.5,
            max_zoom: 3.0,
            motion_offset_scale: 0.02,
            motion_offset_limit: 0.25,
            motion_smoothing: 0.1,
            gyro: GyroOptions::default(),
            shake: ShakeOptions::default(),
        }
    }
}
