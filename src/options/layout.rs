use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Scene layout in world units (orthographic camera space).
pub struct LayoutOptions {
    /// Vertical extent of the orthographic frustum at zoom 1.
    #[schemars(skip)]
    pub frustum_size: f32,
    /// Columns of the landscape grid.
    #[schemars(title = "Grid Columns", range(min = 1, max = 10))]
    pub grid_columns: usize,
    /// Landscape grid cell width.
    #[schemars(skip)]
    pub cell_width: f32,
    /// Landscape grid cell height.
    #[schemars(skip)]
    pub cell_height: f32,
    /// Portrait column cell width (hit-test extent).
    #[schemars(skip)]
    pub column_cell_width: f32,
    /// Portrait column cell height.
    #[schemars(skip)]
    pub column_cell_height: f32,
    /// Distance from the origin to the first portrait slot.
    #[schemars(skip)]
    pub column_top_offset: f32,
    /// Grid instance scale in the portrait column relative to landscape.
    #[schemars(skip)]
    pub column_model_scale: f32,
    /// Per-frame approach rate of the rendered scroll offset.
    #[schemars(title = "Scroll Smoothing", range(min = 0.01, max = 1.0))]
    pub scroll_rate: f32,
    /// Movement (px) that claims a touch gesture for one axis.
    #[schemars(skip)]
    pub direction_latch_px: f32,
    /// Scroll distance (px) added per px/ms of release velocity.
    #[schemars(skip)]
    pub momentum_ms: f32,
    /// Horizontal position of the solo model.
    #[schemars(skip)]
    pub solo_x_offset: f32,
    /// Largest dimension of a fitted solo model.
    #[schemars(skip)]
    pub solo_model_size: f32,
    /// Largest dimension of a fitted grid model.
    #[schemars(skip)]
    pub grid_model_size: f32,
    /// Home yaw of grid models unless the manifest overrides it.
    #[schemars(title = "Grid Rotation (deg)", range(min = -90.0, max = 90.0))]
    pub grid_rotation_deg: f32,
    /// Delay between the last asset completing and the loading screen
    /// hiding, in milliseconds.
    #[schemars(skip)]
    pub reveal_delay_ms: u64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            frustum_size: 12.0,
            grid_columns: 5,
            cell_width: 3.96,
            cell_height: 4.32,
            column_cell_width: 3.2,
            column_cell_height: 2.2,
            column_top_offset: 1.0,
            column_model_scale: 0.617,
            scroll_rate: 0.15,
            direction_latch_px: 15.0,
            momentum_ms: 120.0,
            solo_x_offset: -3.1,
            solo_model_size: 4.725,
            grid_model_size: 2.916,
            grid_rotation_deg: 15.0,
            reveal_delay_ms: 500,
        }
    }
}
