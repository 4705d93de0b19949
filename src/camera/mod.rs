//! Orthographic camera and viewport math.
//!
//! The gallery never renders; the camera only exists so that pointer
//! positions can be mapped into the world-space plane where grid cells
//! live, and so the snapshot can tell the host which extents to project.

/// Orthographic projection with zoom.
pub mod ortho;
/// Viewport size and pointer normalization.
pub mod viewport;

pub use ortho::OrthoCamera;
pub use viewport::Viewport;
