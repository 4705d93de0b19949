use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Duration;

use super::state::ModeState;
use super::GalleryController;
use crate::animation::IntroSequencer;
use crate::camera::{OrthoCamera, Viewport};
use crate::input::{FrameInput, InputAggregator};
use crate::layout::{GridLayout, ScrollState};
use crate::manifest::{InfoIndex, Manifest};
use crate::options::Options;
use crate::overlay::{InfoPanel, IntroPrompt, LoadingGate};
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

/// Fluent builder for [`GalleryController`].
#[derive(Debug, Clone)]
pub struct GalleryControllerBuilder {
    options: Option<Options>,
    viewport: Viewport,
    touch_device: bool,
    seed: Option<u64>,
}

impl GalleryControllerBuilder {
    /// Default options, a 1280x720 viewport, pointer device, OS-seeded RNG.
    pub(super) fn new() -> Self {
        Self {
            options: None,
            viewport: Viewport::default(),
            touch_device: false,
            seed: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Initial viewport size in CSS pixels.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    /// Whether the host is a touch device (centered intro prompt, motion
    /// permission request on intro exit).
    #[must_use]
    pub fn with_touch_device(mut self, touch_device: bool) -> Self {
        self.touch_device = touch_device;
        self
    }

    /// Seed the randomization RNG for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Consume the builder. The controller starts empty; call
    /// [`GalleryController::load_manifest`] next.
    #[must_use]
    pub fn build(self) -> GalleryController {
        let options = self.options.unwrap_or_default();
        let viewport = self.viewport;
        let rng = self
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let input = InputAggregator::new(
            options.input.clone(),
            viewport,
            options.layout.direction_latch_px,
        );
        let camera = OrthoCamera::new(viewport, options.layout.frustum_size);
        let layout = GridLayout::for_viewport(&viewport, 0, &options.layout);
        let loading = LoadingGate::new(Duration::from_millis(
            options.layout.reveal_delay_ms,
        ));
        let mut prompt = IntroPrompt::new(&viewport, self.touch_device);
        prompt.set_size(Vec2::new(160.0, 40.0));

        log::debug!(
            "gallery controller {}x{} touch={}",
            viewport.width,
            viewport.height,
            self.touch_device
        );

        GalleryController {
            mode: ModeState::new(options.debug.show_panel),
            options,
            manifest: Manifest::default(),
            info: InfoIndex::default(),
            scene: Scene::default(),
            input,
            camera,
            layout,
            scroll: ScrollState::default(),
            intro: IntroSequencer::default(),
            prompt,
            info_panel: InfoPanel::default(),
            loading,
            frame_timing: FrameTiming::new(),
            rng,
            touch_device: self.touch_device,
            requests: Vec::new(),
            last_input: FrameInput::IDLE,
        }
    }
}

impl Default for GalleryControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
