//! Per-frame update, resize and snapshot.

use glam::Vec3;
use web_time::Instant;

use super::snapshot::{
    DebugSnapshot, EntrySnapshot, FrameSnapshot, HostRequest,
    InfoPanelSnapshot, IntroSnapshot,
};
use super::GalleryController;
use crate::animation::{advance_entry, offset_xy, Presentation, StepContext};
use crate::camera::Viewport;
use crate::layout::GridLayout;
use crate::overlay::TiltInput;
use crate::scene::{DisplayContext, DisplayEntry};

impl GalleryController {
    /// Viewport changed size or orientation.
    ///
    /// Recomputes the layout. Visible grid entries drift to their new
    /// slots instead of jumping; the column keeps its current slot.
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        self.camera.resize(viewport);
        self.input.set_viewport(viewport);

        let old = self.layout;
        self.layout = GridLayout::for_viewport(
            &viewport,
            self.scene.model_count(),
            &self.options.layout,
        );
        if self.layout != old {
            log::debug!(
                "relayout {:?} -> {:?} ({}x{})",
                old.kind,
                self.layout.kind,
                self.layout.columns,
                self.layout.rows
            );
            self.scroll.relayout(self.mode.current_index, &self.layout);
            let layout = self.layout;
            for entry in self.scene.loaded(DisplayContext::Grid) {
                entry.base_position = layout.position(entry.model_index);
                entry.layout_scale = layout.model_scale;
                if entry.visible {
                    entry.transition.begin_return();
                } else {
                    entry.position = entry.base_position;
                }
            }
        }

        for index in 0..self.manifest.len() {
            let Some(base) = self.manifest.get(index).map(|m| self.solo_base(m))
            else {
                continue;
            };
            if let Some(entry) = self.scene.entry_mut(DisplayContext::Solo, index)
            {
                entry.place(base);
            }
        }
    }

    /// Advance every animation by one tick.
    pub fn update(&mut self, now: Instant) {
        self.frame_timing.tick(now);
        self.input.advance_frame();
        self.loading.advance(now);
        if self.mode.intro_active {
            self.prompt.advance(now);
        }

        let input = self.input.frame_input(now);
        self.last_input = input;
        let presentation = self.presentation();
        let ctx = StepContext::new(presentation, &self.options.animation, input);

        if self.mode.is_grid() {
            if self.layout.is_column() {
                self.scroll.advance(self.options.layout.scroll_rate);
            }
            for entry in self.scene.loaded(DisplayContext::Grid) {
                if entry.visible {
                    advance_entry(entry, &ctx);
                }
            }
        } else {
            let motion = self.input.motion_offset();
            if let Some(entry) = self
                .scene
                .entry_mut(DisplayContext::Solo, self.mode.current_index)
                .filter(|e| e.visible)
            {
                advance_entry(entry, &ctx);
                entry.position = offset_xy(entry.base_position, motion);
            }
        }

        let solo = if self.mode.is_grid() {
            None
        } else {
            self.scene
                .entry(DisplayContext::Solo, self.mode.current_index)
        };
        let tilt = TiltInput {
            model_rotation: solo.map(|e| e.rotation),
            transitioning: solo.is_some_and(|e| e.transition.is_active()),
            pointer_axes: self.input.axes(),
        };
        self.info_panel.advance(
            &tilt,
            &self.options.animation.solo,
            &self.options.animation.info_panel,
        );
    }

    /// Parameter set for the current mode and layout.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        if !self.mode.is_grid() {
            Presentation::Solo
        } else if self.layout.is_column() {
            Presentation::Scroll
        } else {
            Presentation::Grid
        }
    }

    /// State for the host to render this frame.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        let scroll = if self.layout.is_column() {
            self.scroll.offset()
        } else {
            0.0
        };
        let entries = self
            .scene
            .entries()
            .map(|entry| entry_snapshot(entry, scroll))
            .collect();
        let panel = self.info_panel.content();

        FrameSnapshot {
            mode: self.mode.display,
            presentation: self.presentation(),
            layout: self.layout.kind,
            current_index: self.mode.current_index,
            zoom: self.camera.zoom,
            frustum_height: self.camera.half_extents().y * 2.0,
            scroll_offset: scroll,
            party_mode: self.mode.party_mode,
            intro: IntroSnapshot {
                active: self.mode.intro_active,
                prompt_visible: self.mode.intro_active
                    && self.prompt.is_visible(),
                prompt_position: self.prompt.position(),
            },
            info_panel: InfoPanelSnapshot {
                visible: self.info_panel.is_visible(),
                title: panel.title.clone(),
                lines: panel.lines.clone(),
                tilt_deg: self.info_panel.tilt_degrees(),
            },
            loading: self.loading.status(),
            debug: self.mode.debug_panel.then(|| DebugSnapshot {
                fps: self.frame_timing.fps(),
                frames: self.frame_timing.frame_count(),
                scene_generation: self.scene.generation(),
                input_source: self.last_input.source,
                axes: self.last_input.axes,
            }),
            entries,
        }
    }

    /// Drain pending host requests.
    pub fn take_host_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.requests)
    }
}

fn entry_snapshot(entry: &DisplayEntry, scroll: f32) -> EntrySnapshot {
    let fit = entry.effective_fit();
    let position = match entry.context {
        DisplayContext::Grid => entry.position + Vec3::new(0.0, scroll, 0.0),
        DisplayContext::Solo => entry.position,
    };
    EntrySnapshot {
        handle: entry.handle,
        model_index: entry.model_index,
        context: entry.context,
        visible: entry.visible,
        position,
        rotation: entry.rotation,
        scale: fit.scale,
        offset: fit.offset,
        transition: entry.transition.phase,
    }
}
