use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a loaded mesh, in its own units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshBounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl MeshBounds {
    /// Bounds from two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Edge lengths.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Longest edge, or 1 for a degenerate box.
    #[must_use]
    pub fn max_dimension(&self) -> f32 {
        let m = self.size().max_element();
        if m > 0.0 {
            m
        } else {
            1.0
        }
    }
}

/// Uniform scale and offset that normalize a mesh for display.
///
/// `offset` is applied to the mesh inside its display node, after scaling,
/// so the node's own position is the layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshFit {
    /// Uniform scale factor.
    pub scale: f32,
    /// Translation applied to the scaled mesh.
    pub offset: Vec3,
}

impl MeshFit {
    /// Identity fit.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec3::ZERO,
    };

    /// Scale the longest edge to `desired` and center on the origin.
    #[must_use]
    pub fn centered(bounds: &MeshBounds, desired: f32, manual_scale: f32) -> Self {
        let scale = desired / bounds.max_dimension() * manual_scale;
        Self {
            scale,
            offset: -bounds.center() * scale,
        }
    }

    /// Like [`centered`](Self::centered), but the lowest point rests on
    /// `y = 0` so models in a row share a baseline.
    #[must_use]
    pub fn on_baseline(
        bounds: &MeshBounds,
        desired: f32,
        manual_scale: f32,
    ) -> Self {
        let mut fit = Self::centered(bounds, desired, manual_scale);
        fit.offset.y = -bounds.min.y * fit.scale;
        fit
    }

    /// Fit with an extra uniform factor applied (portrait column).
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            scale: self.scale * factor,
            offset: self.offset * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> MeshBounds {
        MeshBounds::new(Vec3::new(-1.0, 2.0, -0.5), Vec3::new(1.0, 6.0, 0.5))
    }

    #[test]
    fn centered_fit_normalizes_longest_edge() {
        let fit = MeshFit::centered(&bounds(), 4.725, 1.0);
        assert!((fit.scale - 4.725 / 4.0).abs() < 1e-6);
        let center = bounds().center() * fit.scale + fit.offset;
        assert!(center.length() < 1e-5);
    }

    #[test]
    fn baseline_fit_puts_bottom_at_zero() {
        let fit = MeshFit::on_baseline(&bounds(), 2.916, 2.0);
        let bottom = bounds().min.y * fit.scale + fit.offset.y;
        assert!(bottom.abs() < 1e-5);
        assert!((fit.scale - 2.916 / 4.0 * 2.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_bounds_do_not_divide_by_zero() {
        let flat = MeshBounds::new(Vec3::ONE, Vec3::ONE);
        let fit = MeshFit::centered(&flat, 3.0, 1.0);
        assert_eq!(fit.scale, 3.0);
    }
}
