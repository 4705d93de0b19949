use super::grid::GridLayout;

/// Momentum scrolling of the portrait column.
///
/// Dragging moves the *target* offset; [`advance`](Self::advance) eases the
/// rendered offset toward it each frame. Releasing applies the release
/// velocity once and snaps the target to the nearest slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    target: f32,
    dragging: bool,
}

impl ScrollState {
    /// Rendered offset in world units.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Target offset in world units.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether a vertical drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A vertical drag claimed the gesture.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Finger moved by `dy_px` pixels. Moving the finger up scrolls toward
    /// later slots. Overscroll is limited to half a cell at either end.
    pub fn drag(&mut self, dy_px: f32, world_per_px: f32, layout: &GridLayout) {
        if !self.dragging {
            self.begin_drag();
        }
        let slack = layout.cell_height * 0.5;
        self.target = (self.target - dy_px * world_per_px)
            .clamp(-slack, layout.max_offset() + slack);
    }

    /// Finger lifted with `velocity_px_per_ms`; apply momentum, then snap.
    /// Returns the slot the target snapped to.
    pub fn release(
        &mut self,
        velocity_px_per_ms: f32,
        momentum_ms: f32,
        world_per_px: f32,
        layout: &GridLayout,
    ) -> usize {
        self.dragging = false;
        self.target -= velocity_px_per_ms * momentum_ms * world_per_px;
        let index = layout.index_at(self.target);
        self.target = layout.offset_of(index);
        index
    }

    /// Ease the rendered offset toward the target.
    pub fn advance(&mut self, rate: f32) {
        self.offset += (self.target - self.offset) * rate;
    }

    /// Slot nearest to the rendered offset.
    #[must_use]
    pub fn index(&self, layout: &GridLayout) -> usize {
        layout.index_at(self.offset)
    }

    /// Jump straight to a slot.
    pub fn snap_to(&mut self, index: usize, layout: &GridLayout) {
        self.dragging = false;
        self.target = layout.offset_of(index);
        self.offset = self.target;
    }

    /// Rest on `index` in a freshly computed layout. Only the column
    /// scrolls; a grid layout resets the offset to zero.
    pub fn relayout(&mut self, index: usize, layout: &GridLayout) {
        self.dragging = false;
        self.target = if layout.is_column() {
            layout.offset_of(index)
        } else {
            0.0
        };
        self.offset = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Viewport;
    use crate::options::LayoutOptions;

    fn column(count: usize) -> GridLayout {
        GridLayout::for_viewport(
            &Viewport::new(400.0, 800.0),
            count,
            &LayoutOptions::default(),
        )
    }

    #[test]
    fn drag_up_scrolls_forward_and_clamps() {
        let layout = column(3);
        let mut s = ScrollState::default();
        s.begin_drag();
        s.drag(-100.0, 0.01, &layout);
        assert!((s.target() - 1.0).abs() < 1e-6);

        s.drag(-10_000.0, 0.01, &layout);
        let max = layout.max_offset() + layout.cell_height * 0.5;
        assert!((s.target() - max).abs() < 1e-5);

        s.drag(10_000.0, 0.01, &layout);
        assert!((s.target() + layout.cell_height * 0.5).abs() < 1e-5);
    }

    #[test]
    fn release_snaps_to_nearest_cell() {
        let layout = column(10);
        let h = layout.cell_height;
        let mut s = ScrollState::default();
        s.begin_drag();
        s.drag(-(1.3 * h) / 0.01, 0.01, &layout);
        let index = s.release(0.0, 120.0, 0.01, &layout);
        assert_eq!(index, 1);
        assert!((s.target() - h).abs() < 1e-5);
        assert!(!s.is_dragging());
    }

    #[test]
    fn release_velocity_carries_momentum() {
        let layout = column(10);
        let h = layout.cell_height;
        let mut s = ScrollState::default();
        s.begin_drag();
        // Flick upward at 2 px/ms: 2 * 120 * 0.01 = 2.4 world units.
        let index = s.release(-2.0, 120.0, 0.01, &layout);
        assert_eq!(index, layout.index_at(2.4));
        assert!((s.target() - index as f32 * h).abs() < 1e-5);
    }

    #[test]
    fn advance_eases_toward_target() {
        let layout = column(10);
        let mut s = ScrollState::default();
        s.snap_to(0, &layout);
        let _ = s.release(-5.0, 120.0, 0.01, &layout);
        let mut last = (s.target() - s.offset()).abs();
        for _ in 0..60 {
            s.advance(0.15);
            let d = (s.target() - s.offset()).abs();
            assert!(d <= last);
            last = d;
        }
        assert!(last < 0.01);
        assert_eq!(s.index(&layout), layout.index_at(s.target()));
    }

    #[test]
    fn relayout_rests_on_the_given_slot() {
        let layout = column(10);
        let mut s = ScrollState::default();
        s.relayout(5, &layout);
        assert!((s.offset() - 5.0 * layout.cell_height).abs() < 1e-5);
        assert_eq!(s.index(&layout), 5);

        let grid = GridLayout::for_viewport(
            &Viewport::new(1600.0, 900.0),
            10,
            &LayoutOptions::default(),
        );
        s.relayout(5, &grid);
        assert_eq!(s.offset(), 0.0);
        assert_eq!(s.target(), 0.0);
    }
}
