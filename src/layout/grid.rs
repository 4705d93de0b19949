use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::camera::Viewport;
use crate::options::LayoutOptions;

/// Arrangement chosen from the viewport aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Landscape multi-column grid, centered on the origin.
    Grid,
    /// Portrait single column scrolled vertically.
    Column,
}

/// World-space slot layout for grid entries.
///
/// Slot positions are the bottom-center of each cell; fitted grid models
/// rest on that baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Grid or column.
    pub kind: LayoutKind,
    /// Number of slots.
    pub count: usize,
    /// Columns (1 for the portrait column).
    pub columns: usize,
    /// Rows.
    pub rows: usize,
    /// Cell width in world units.
    pub cell_width: f32,
    /// Cell height in world units.
    pub cell_height: f32,
    /// Distance from the origin down to the first column slot.
    pub top_offset: f32,
    /// Extra scale applied to grid instances in this layout.
    pub model_scale: f32,
}

impl GridLayout {
    /// Layout for `count` models: a grid when the viewport is at least as
    /// wide as it is tall, otherwise a single column.
    #[must_use]
    pub fn for_viewport(
        viewport: &Viewport,
        count: usize,
        opts: &LayoutOptions,
    ) -> Self {
        if viewport.is_portrait() {
            return Self {
                kind: LayoutKind::Column,
                count,
                columns: 1,
                rows: count,
                cell_width: opts.column_cell_width,
                cell_height: opts.column_cell_height,
                top_offset: opts.column_top_offset,
                model_scale: opts.column_model_scale,
            };
        }
        let columns = opts.grid_columns.min(count).max(1);
        Self {
            kind: LayoutKind::Grid,
            count,
            columns,
            rows: count.div_ceil(columns),
            cell_width: opts.cell_width,
            cell_height: opts.cell_height,
            top_offset: 0.0,
            model_scale: 1.0,
        }
    }

    /// Whether this is the portrait scroll column.
    #[must_use]
    pub fn is_column(&self) -> bool {
        self.kind == LayoutKind::Column
    }

    /// `(column, row)` of a slot.
    #[must_use]
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Unscrolled slot position.
    #[must_use]
    pub fn position(&self, index: usize) -> Vec3 {
        match self.kind {
            LayoutKind::Column => Vec3::new(
                0.0,
                -(index as f32) * self.cell_height - self.top_offset,
                0.0,
            ),
            LayoutKind::Grid => {
                let (col, row) = self.cell_of(index);
                let grid_w = self.columns as f32 * self.cell_width;
                let grid_h = self.rows as f32 * self.cell_height;
                Vec3::new(
                    col as f32 * self.cell_width - grid_w * 0.5
                        + self.cell_width * 0.5,
                    grid_h * 0.5 - (row + 1) as f32 * self.cell_height,
                    0.0,
                )
            }
        }
    }

    /// Slot position with the column scroll offset applied.
    #[must_use]
    pub fn scrolled_position(&self, index: usize, scroll_offset: f32) -> Vec3 {
        let mut p = self.position(index);
        if self.is_column() {
            p.y += scroll_offset;
        }
        p
    }

    /// Column slot nearest to a scroll offset:
    /// `round(offset / cell_height)` clamped to `[0, count - 1]`.
    #[must_use]
    pub fn index_at(&self, offset: f32) -> usize {
        if self.count == 0 || self.cell_height <= 0.0 {
            return 0;
        }
        let max = (self.count - 1) as f32;
        (offset / self.cell_height).round().clamp(0.0, max) as usize
    }

    /// Scroll offset that centers a column slot at the top position.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f32 {
        index as f32 * self.cell_height
    }

    /// Largest meaningful scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.offset_of(self.count.saturating_sub(1))
    }

    /// Slot whose cell contains a world-space point.
    #[must_use]
    pub fn hit_test(&self, point: Vec2, scroll_offset: f32) -> Option<usize> {
        let half_w = self.cell_width * 0.5;
        (0..self.count).find(|&i| {
            let p = self.scrolled_position(i, scroll_offset);
            point.x >= p.x - half_w
                && point.x <= p.x + half_w
                && point.y >= p.y
                && point.y <= p.y + self.cell_height
        })
    }
}
