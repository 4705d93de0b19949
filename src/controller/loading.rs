//! Manifest installation and asset completion callbacks.

use glam::Vec3;
use web_time::Instant;

use super::GalleryController;
use crate::error::GalleryError;
use crate::layout::{GridLayout, ScrollState};
use crate::manifest::{InfoIndex, Manifest, ModelConfig};
use crate::scene::{DisplayContext, DisplayEntry, LoadedMesh, MeshFit, Scene};

impl GalleryController {
    /// Install a parsed manifest and its info index.
    ///
    /// The host should then load two instances (solo and grid) of every
    /// model and report each through [`asset_loaded`](Self::asset_loaded)
    /// or [`asset_failed`](Self::asset_failed).
    ///
    /// # Errors
    ///
    /// [`GalleryError::EmptyManifest`] if the manifest lists no models; the
    /// loading gate shows the error and initialization stops.
    pub fn load_manifest(
        &mut self,
        manifest: Manifest,
        info: InfoIndex,
    ) -> Result<(), GalleryError> {
        if manifest.is_empty() {
            let err = GalleryError::EmptyManifest;
            self.loading.fail(err.to_string());
            return Err(err);
        }
        let n = manifest.len();
        log::info!("loading {n} models ({} info entries)", info.len());

        self.manifest = manifest;
        self.info = info;
        self.scene = Scene::new(n);
        self.layout = GridLayout::for_viewport(
            &self.camera.viewport,
            n,
            &self.options.layout,
        );
        self.scroll = ScrollState::default();
        self.loading.expect(n * 2);
        self.switch_to_model(0);
        Ok(())
    }

    /// Stop initialization with a user-visible message, e.g. when the
    /// manifest could not be fetched or parsed.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.loading.fail(message);
    }

    /// A mesh finished loading. Fits it, places it and decides visibility
    /// from the mode *now*, not the mode when the load started.
    ///
    /// Returns `false` for an index outside the manifest.
    pub fn asset_loaded(
        &mut self,
        index: usize,
        context: DisplayContext,
        mesh: LoadedMesh,
        now: Instant,
    ) -> bool {
        let Some(model) = self.manifest.get(index) else {
            log::warn!("asset loaded for unknown model {index}");
            return false;
        };
        let mut entry = match context {
            DisplayContext::Solo => self.solo_entry(index, model, mesh),
            DisplayContext::Grid => self.grid_entry(index, model, mesh),
        };
        entry.visible = match context {
            DisplayContext::Solo => {
                !self.mode.is_grid() && index == self.mode.current_index
            }
            DisplayContext::Grid => self.mode.is_grid(),
        };
        if !self.scene.install(entry) {
            return false;
        }
        self.loading.record(true, now);
        log::debug!("{context:?} instance of model {index} ready");

        if context == DisplayContext::Grid {
            self.trigger_grid_intro();
        }
        true
    }

    /// A mesh failed to load. Counted as finished so the loading screen
    /// still lifts. Indices outside the manifest are ignored.
    pub fn asset_failed(
        &mut self,
        index: usize,
        context: DisplayContext,
        reason: &str,
        now: Instant,
    ) {
        if self.manifest.get(index).is_none() {
            log::warn!("asset failed for unknown model {index}");
            return;
        }
        log::warn!("{context:?} instance of model {index} failed: {reason}");
        self.loading.record(false, now);
    }

    fn solo_entry(
        &self,
        index: usize,
        model: &ModelConfig,
        mesh: LoadedMesh,
    ) -> DisplayEntry {
        let fit = MeshFit::centered(
            &mesh.bounds,
            self.options.layout.solo_model_size,
            model.scale,
        );
        DisplayEntry::new(
            index,
            DisplayContext::Solo,
            mesh.handle,
            fit,
            self.solo_base(model),
            Vec3::ZERO,
        )
    }

    fn grid_entry(
        &self,
        index: usize,
        model: &ModelConfig,
        mesh: LoadedMesh,
    ) -> DisplayEntry {
        let fit = MeshFit::on_baseline(
            &mesh.bounds,
            self.options.layout.grid_model_size,
            model.scale,
        );
        let yaw = model
            .grid_rotation_deg
            .unwrap_or(self.options.layout.grid_rotation_deg)
            .to_radians();
        let mut entry = DisplayEntry::new(
            index,
            DisplayContext::Grid,
            mesh.handle,
            fit,
            self.layout.position(index),
            Vec3::new(0.0, yaw, 0.0),
        );
        entry.layout_scale = self.layout.model_scale;
        entry
    }

    /// Solo rest position: beside the info panel in landscape, centered in
    /// portrait, plus the model's own offsets.
    pub(super) fn solo_base(&self, model: &ModelConfig) -> Vec3 {
        let x = if self.camera.viewport.is_portrait() {
            0.0
        } else {
            self.options.layout.solo_x_offset
        };
        Vec3::new(x + model.x_offset, model.y_offset, 0.0)
    }
}
