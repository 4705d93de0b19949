//! Serializable per-frame output consumed by the host renderer.

use glam::{Vec2, Vec3};
use serde::Serialize;

use super::state::DisplayMode;
use crate::animation::{Presentation, TransitionPhase};
use crate::input::InputSource;
use crate::layout::LayoutKind;
use crate::overlay::LoadingStatus;
use crate::scene::{DisplayContext, NodeHandle};

/// Something the controller needs the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostRequest {
    /// Ask the user for device orientation/motion access. Report the answer
    /// with `InputEvent::OrientationPermission`.
    RequestOrientationPermission,
}

/// Transform of one loaded model instance.
///
/// The host rotates a pivot at `position` by `rotation` (Euler XYZ,
/// radians) and places the mesh inside the pivot scaled by `scale` and
/// translated by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntrySnapshot {
    /// Host node.
    pub handle: NodeHandle,
    /// Manifest index.
    pub model_index: usize,
    /// Solo or grid instance.
    pub context: DisplayContext,
    /// Whether the node should be drawn.
    pub visible: bool,
    /// Pivot position in world units, scroll applied.
    pub position: Vec3,
    /// Pivot rotation.
    pub rotation: Vec3,
    /// Uniform mesh scale.
    pub scale: f32,
    /// Mesh offset inside the pivot.
    pub offset: Vec3,
    /// Running one-shot transition.
    pub transition: TransitionPhase,
}

/// Intro overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntroSnapshot {
    /// Overlay shown.
    pub active: bool,
    /// Prompt shown.
    pub prompt_visible: bool,
    /// Prompt top-left in pixels.
    pub prompt_position: Vec2,
}

/// Info panel state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanelSnapshot {
    /// Panel shown.
    pub visible: bool,
    /// Heading.
    pub title: String,
    /// Body lines.
    pub lines: Vec<String>,
    /// `(pitch, yaw)` tilt in degrees.
    pub tilt_deg: Vec2,
}

/// Debug panel readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugSnapshot {
    /// Smoothed frames per second.
    pub fps: f32,
    /// Frames ticked so far.
    pub frames: u64,
    /// Scene change counter.
    pub scene_generation: u64,
    /// Input source driving the models.
    pub input_source: InputSource,
    /// Normalized input axes.
    pub axes: Vec2,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// Solo or grid.
    pub mode: DisplayMode,
    /// Animation parameter set in use.
    pub presentation: Presentation,
    /// Grid or column layout.
    pub layout: LayoutKind,
    /// Current model index.
    pub current_index: usize,
    /// Camera zoom.
    pub zoom: f32,
    /// Vertical extent of the orthographic frustum at this zoom.
    pub frustum_height: f32,
    /// Column scroll offset in world units.
    pub scroll_offset: f32,
    /// Party mode flag.
    pub party_mode: bool,
    /// Intro overlay.
    pub intro: IntroSnapshot,
    /// Solo info panel.
    pub info_panel: InfoPanelSnapshot,
    /// Loading screen.
    pub loading: LoadingStatus,
    /// Debug readout when the panel is on.
    pub debug: Option<DebugSnapshot>,
    /// Every loaded instance.
    pub entries: Vec<EntrySnapshot>,
}
