use glam::Vec2;

use super::viewport::Viewport;

/// Orthographic camera looking down -Z at the gallery plane.
///
/// The vertical extent is `frustum_size / zoom`; the horizontal extent
/// follows the viewport aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    /// Viewport the projection is fitted to.
    pub viewport: Viewport,
    /// Vertical world extent at zoom 1.
    pub frustum_size: f32,
    /// Zoom factor; larger values show less of the world.
    pub zoom: f32,
}

impl OrthoCamera {
    /// Create a camera at zoom 1.
    #[must_use]
    pub fn new(viewport: Viewport, frustum_size: f32) -> Self {
        Self {
            viewport,
            frustum_size,
            zoom: 1.0,
        }
    }

    /// Update the viewport after a resize.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Half of the visible world width and height.
    #[must_use]
    pub fn half_extents(&self) -> Vec2 {
        let half_h = self.frustum_size * 0.5 / self.zoom;
        Vec2::new(half_h * self.viewport.aspect(), half_h)
    }

    /// World-space point under a pixel position.
    #[must_use]
    pub fn screen_to_world(&self, x: f32, y: f32) -> Vec2 {
        self.viewport.normalize(x, y) * self.half_extents()
    }

    /// World units covered by one vertical pixel.
    #[must_use]
    pub fn world_per_pixel(&self) -> f32 {
        self.frustum_size / (self.viewport.height * self.zoom)
    }
}
