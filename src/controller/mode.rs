//! Mode transitions: model switching, solo/grid toggling and the intro.

use super::state::DisplayMode;
use super::{GalleryController, HostRequest};
use crate::scene::DisplayContext;

impl GalleryController {
    /// Make `index` (wrapped into range) the current model.
    ///
    /// Resets touch rotation and the motion offset. In solo mode the entry
    /// that becomes visible starts from a random pose and settles.
    pub fn switch_to_model(&mut self, index: usize) {
        let n = self.scene.model_count();
        if n == 0 {
            return;
        }
        let index = index % n;
        self.mode.current_index = index;
        self.input.reset_transient();

        if !self.mode.is_grid() {
            let was_visible = self
                .scene
                .entry(DisplayContext::Solo, index)
                .is_some_and(|e| e.visible);
            self.scene.show_solo(index);
            if !was_visible {
                let range = self.options.animation.solo.randomize;
                if let Some(entry) =
                    self.scene.entry_mut(DisplayContext::Solo, index)
                {
                    entry.transition.randomize(
                        &mut entry.rotation,
                        &range,
                        &mut self.rng,
                    );
                }
            }
        }
        if self.layout.is_column() {
            self.scroll.snap_to(index, &self.layout);
        }
        log::debug!("switched to model {index}");
        self.refresh_info_panel();
    }

    /// Flip solo/grid and swap the visible entry sets. Entering the grid
    /// resets zoom; returning to solo restores it.
    pub fn toggle_mode(&mut self) {
        match self.mode.toggle_display() {
            DisplayMode::Grid => self.scene.show_grid(),
            DisplayMode::Solo => self.scene.show_solo(self.mode.current_index),
        }
        self.camera.zoom = self.mode.zoom;
        self.input.reset_transient();
        log::debug!("mode {:?}", self.mode.display);
        self.refresh_info_panel();
    }

    /// The column came to rest on `index` after a scroll gesture. The
    /// scroll target is already there, so only the index changes hands.
    pub(super) fn settle_column(&mut self, index: usize) {
        self.mode.current_index = index;
        self.input.reset_transient();
        self.refresh_info_panel();
        log::debug!("column snapped to {index}");
    }

    /// Dismiss the intro: switch to the grid and play the grid intro.
    ///
    /// Touch devices also ask the host for orientation/motion permission,
    /// which browsers only grant from a user gesture.
    pub fn exit_intro(&mut self) {
        if !self.mode.intro_active {
            return;
        }
        self.mode.intro_active = false;
        self.prompt.reset(&self.camera.viewport);

        if !self.mode.is_grid() {
            self.toggle_mode();
        }
        self.intro.begin();
        self.trigger_grid_intro();

        if self.touch_device
            && !self.input.gyro_enabled()
            && !self
                .requests
                .contains(&HostRequest::RequestOrientationPermission)
        {
            self.requests.push(HostRequest::RequestOrientationPermission);
        }
        self.refresh_info_panel();
    }

    /// Show the intro overlay again. The current mode is kept.
    pub fn show_intro(&mut self) {
        self.mode.intro_active = true;
        self.prompt.reset(&self.camera.viewport);
        self.refresh_info_panel();
    }

    /// Set the solo zoom, clamped to the configured pinch range. Ignored
    /// in grid mode, which always shows zoom 1.
    pub fn set_zoom(&mut self, zoom: f32) {
        if self.mode.is_grid() {
            return;
        }
        let opts = self.input.options();
        self.mode.zoom = zoom.clamp(opts.min_zoom, opts.max_zoom);
        self.camera.zoom = self.mode.zoom;
    }

    /// Randomize grid entries for the running intro generation. Slots that
    /// are still loading are picked up by later calls.
    pub(super) fn trigger_grid_intro(&mut self) {
        let range = self.options.animation.grid.randomize;
        let randomized = self.intro.trigger(
            self.scene.slots_mut(DisplayContext::Grid),
            &range,
            &mut self.rng,
        );
        if randomized > 0 {
            log::debug!("grid intro randomized {randomized} entries");
        }
    }

    /// Recompute the info panel for the current model and mode.
    pub(super) fn refresh_info_panel(&mut self) {
        let allowed = !self.mode.intro_active && !self.mode.is_grid();
        let content = self
            .manifest
            .get(self.mode.current_index)
            .map(|model| self.info.content_for(model))
            .unwrap_or_default();
        self.info_panel.refresh(content, allowed);
    }
}
