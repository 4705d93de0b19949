use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::fit::{MeshBounds, MeshFit};
use crate::animation::Transition;

/// Opaque handle to the host's scene-graph node for one display entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeHandle(pub u64);

/// Which display set an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayContext {
    /// Large single-model instance.
    Solo,
    /// Grid / scroll-list instance.
    Grid,
}

/// What the host reports when a mesh finishes loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadedMesh {
    /// Node the host created for the mesh.
    pub handle: NodeHandle,
    /// Mesh bounds before any scaling.
    pub bounds: MeshBounds,
}

/// Runtime state of one loaded model instance in one display context.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    /// Index into the manifest.
    pub model_index: usize,
    /// Display set this entry belongs to.
    pub context: DisplayContext,
    /// Host node.
    pub handle: NodeHandle,
    /// Whether the host should draw it.
    pub visible: bool,
    /// Current `(pitch, yaw, roll)` in radians.
    pub rotation: Vec3,
    /// Rest pose the animator returns to.
    pub home_rotation: Vec3,
    /// Current node position (drifts toward `base_position`).
    pub position: Vec3,
    /// Layout slot position.
    pub base_position: Vec3,
    /// Normalization computed from the mesh bounds.
    pub fit: MeshFit,
    /// Extra uniform scale on top of the fit (portrait column).
    pub layout_scale: f32,
    /// One-shot animation state.
    pub transition: Transition,
}

impl DisplayEntry {
    /// New hidden entry resting at its slot in its home pose.
    #[must_use]
    pub fn new(
        model_index: usize,
        context: DisplayContext,
        handle: NodeHandle,
        fit: MeshFit,
        base_position: Vec3,
        home_rotation: Vec3,
    ) -> Self {
        Self {
            model_index,
            context,
            handle,
            visible: false,
            rotation: home_rotation,
            home_rotation,
            position: base_position,
            base_position,
            fit,
            layout_scale: 1.0,
            transition: Transition::default(),
        }
    }

    /// Fit with the layout scale applied.
    #[must_use]
    pub fn effective_fit(&self) -> MeshFit {
        self.fit.scaled(self.layout_scale)
    }

    /// Move to a new slot immediately.
    pub fn place(&mut self, base_position: Vec3) {
        self.base_position = base_position;
        self.position = base_position;
    }
}
