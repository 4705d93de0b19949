use serde::Serialize;

/// Which set of display entries is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// One large model.
    #[default]
    Solo,
    /// Every model in the grid or column layout.
    Grid,
}

/// Session-level mode flags. Reset field by field, never replaced.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModeState {
    /// Manifest index of the solo model.
    pub current_index: usize,
    /// Solo or grid.
    pub display: DisplayMode,
    /// Camera zoom.
    pub zoom: f32,
    /// Solo zoom stashed while the grid forces zoom 1.
    pub saved_solo_zoom: f32,
    /// Zoom when the running pinch started.
    pub pinch_base: f32,
    /// Intro overlay shown.
    pub intro_active: bool,
    /// Toggled by shaking the device.
    pub party_mode: bool,
    /// Debug panel shown.
    pub debug_panel: bool,
}

impl ModeState {
    /// Initial state: solo, zoom 1, intro showing.
    #[must_use]
    pub fn new(debug_panel: bool) -> Self {
        Self {
            current_index: 0,
            display: DisplayMode::Solo,
            zoom: 1.0,
            saved_solo_zoom: 1.0,
            pinch_base: 1.0,
            intro_active: true,
            party_mode: false,
            debug_panel,
        }
    }

    /// Whether grid mode is active.
    #[must_use]
    pub fn is_grid(&self) -> bool {
        self.display == DisplayMode::Grid
    }

    /// Flip solo/grid. Entering the grid resets zoom to 1; leaving it
    /// restores the solo zoom.
    pub fn toggle_display(&mut self) -> DisplayMode {
        self.display = match self.display {
            DisplayMode::Solo => {
                self.saved_solo_zoom = self.zoom;
                self.zoom = 1.0;
                DisplayMode::Grid
            }
            DisplayMode::Grid => {
                self.zoom = self.saved_solo_zoom;
                DisplayMode::Solo
            }
        };
        self.display
    }
}
