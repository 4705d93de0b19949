//! The gallery controller: one owner for every piece of session state.
//!
//! Hosts construct a [`GalleryController`] through
//! [`GalleryController::builder`], install the manifest, report asset
//! completions, forward input events and call
//! [`update`](GalleryController::update) once per animation frame. Each
//! frame they read a [`FrameSnapshot`] and apply it to their own scene
//! graph; the controller never renders.

mod command;
mod construction;
mod frame;
mod input;
mod loading;
mod mode;
mod snapshot;
mod state;

pub use command::GalleryCommand;
pub use construction::GalleryControllerBuilder;
use rand::rngs::StdRng;
pub use snapshot::{
    DebugSnapshot, EntrySnapshot, FrameSnapshot, HostRequest,
    InfoPanelSnapshot, IntroSnapshot,
};
pub use state::{DisplayMode, ModeState};

use crate::animation::IntroSequencer;
use crate::camera::OrthoCamera;
use crate::input::{FrameInput, InputAggregator};
use crate::layout::{GridLayout, ScrollState};
use crate::manifest::{InfoIndex, Manifest};
use crate::options::Options;
use crate::overlay::{InfoPanel, IntroPrompt, LoadingGate};
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

/// Interaction and animation state machine for a 3D model gallery.
///
/// # Frame loop
///
/// Forward events with [`handle_input`](Self::handle_input) and
/// [`handle_key`](Self::handle_key), then call [`update`](Self::update)
/// and [`snapshot`](Self::snapshot) once per frame. Drain
/// [`take_host_requests`](Self::take_host_requests) after input.
///
/// # Loading
///
/// [`load_manifest`](Self::load_manifest) sizes the scene; every mesh the
/// host finishes is reported with [`asset_loaded`](Self::asset_loaded) or
/// [`asset_failed`](Self::asset_failed), in any order.
#[derive(Debug)]
pub struct GalleryController {
    /// Tuning, layout and keybindings.
    options: Options,
    manifest: Manifest,
    info: InfoIndex,
    /// Solo and grid display entries.
    scene: Scene,
    mode: ModeState,
    input: InputAggregator,
    camera: OrthoCamera,
    layout: GridLayout,
    scroll: ScrollState,
    intro: IntroSequencer,
    prompt: IntroPrompt,
    info_panel: InfoPanel,
    loading: LoadingGate,
    frame_timing: FrameTiming,
    /// Source of intro and switch poses.
    rng: StdRng,
    touch_device: bool,
    requests: Vec<HostRequest>,
    /// Input sampled by the last update, for the debug readout.
    last_input: FrameInput,
}

impl GalleryController {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> GalleryControllerBuilder {
        GalleryControllerBuilder::new()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Installed manifest.
    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Display entries.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mode flags.
    #[must_use]
    pub fn mode(&self) -> &ModeState {
        &self.mode
    }

    /// Current grid layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Column scroll state.
    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Orthographic camera.
    #[must_use]
    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    /// Input aggregator.
    #[must_use]
    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    /// Loading gate.
    #[must_use]
    pub fn loading(&self) -> &LoadingGate {
        &self.loading
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use web_time::{Duration, Instant};

    use super::*;
    use crate::animation::{Presentation, TransitionPhase};
    use crate::error::GalleryError;
    use crate::input::{InputEvent, TouchPhase, TouchPoints};
    use crate::overlay::LoadingStatus;
    use crate::scene::{DisplayContext, LoadedMesh, MeshBounds, NodeHandle};

    fn manifest(n: usize) -> Manifest {
        let entries: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"id": "m{i}", "glb": "objs/m{i}.glb"}}"#))
            .collect();
        Manifest::from_json(&format!("[{}]", entries.join(","))).unwrap()
    }

    fn mesh(handle: u64) -> LoadedMesh {
        LoadedMesh {
            handle: NodeHandle(handle),
            bounds: MeshBounds::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
        }
    }

    fn controller(
        n: usize,
        width: f32,
        height: f32,
        t0: Instant,
    ) -> GalleryController {
        let mut c = GalleryController::builder()
            .with_viewport(width, height)
            .with_seed(7)
            .build();
        c.load_manifest(manifest(n), InfoIndex::default()).unwrap();
        for i in 0..n {
            assert!(c.asset_loaded(i, DisplayContext::Solo, mesh(i as u64), t0));
            assert!(c.asset_loaded(
                i,
                DisplayContext::Grid,
                mesh((n + i) as u64),
                t0
            ));
        }
        c
    }

    fn desktop(n: usize, t0: Instant) -> GalleryController {
        controller(n, 1600.0, 900.0, t0)
    }

    #[test]
    fn switch_in_solo_randomizes_newly_shown_entry() {
        let t0 = Instant::now();
        let mut c = desktop(10, t0);
        c.execute(GalleryCommand::ExitIntro);
        c.toggle_mode();
        assert_eq!(c.mode().display, DisplayMode::Solo);
        assert_eq!(c.scene().visible_indices(DisplayContext::Solo), vec![0]);

        c.switch_to_model(2);
        assert_eq!(c.scene().visible_indices(DisplayContext::Solo), vec![2]);
        let entry = c.scene().entry(DisplayContext::Solo, 2).unwrap();
        assert!(entry.transition.is_settling());
        assert_ne!(entry.rotation, Vec3::ZERO);
    }

    #[test]
    fn switch_wraps_and_previous_goes_back() {
        let t0 = Instant::now();
        let mut c = desktop(3, t0);
        c.switch_to_model(4);
        assert_eq!(c.mode().current_index, 1);
        c.execute(GalleryCommand::PreviousModel);
        c.execute(GalleryCommand::PreviousModel);
        assert_eq!(c.mode().current_index, 2);
    }

    #[test]
    fn toggle_pair_restores_visibility_and_zoom() {
        let t0 = Instant::now();
        let mut c = desktop(4, t0);
        c.set_zoom(2.0);
        let solo = c.scene().visible_indices(DisplayContext::Solo);

        c.toggle_mode();
        assert_eq!(c.camera().zoom, 1.0);
        assert!(c.scene().visible_indices(DisplayContext::Solo).is_empty());
        assert_eq!(c.scene().visible_indices(DisplayContext::Grid).len(), 4);

        c.toggle_mode();
        assert_eq!(c.camera().zoom, 2.0);
        assert_eq!(c.scene().visible_indices(DisplayContext::Solo), solo);
        assert!(c.scene().visible_indices(DisplayContext::Grid).is_empty());
    }

    #[test]
    fn empty_manifest_fails_loading() {
        let mut c = GalleryController::builder().build();
        let err = c.load_manifest(Manifest::default(), InfoIndex::default());
        assert!(matches!(err, Err(GalleryError::EmptyManifest)));
        assert!(matches!(
            c.snapshot().loading,
            LoadingStatus::Failed { .. }
        ));
        assert!(c.snapshot().entries.is_empty());
    }

    #[test]
    fn loading_gate_is_fail_open_and_reveals_after_delay() {
        let t0 = Instant::now();
        let mut c = GalleryController::builder().build();
        c.load_manifest(manifest(2), InfoIndex::default()).unwrap();
        assert!(c.asset_loaded(0, DisplayContext::Solo, mesh(0), t0));
        assert!(c.asset_loaded(0, DisplayContext::Grid, mesh(1), t0));
        c.asset_failed(1, DisplayContext::Solo, "404", t0);
        assert!(!c.loading().is_complete());
        c.asset_failed(7, DisplayContext::Grid, "404", t0);
        assert!(!c.loading().is_complete());
        c.asset_failed(1, DisplayContext::Grid, "404", t0);
        assert!(c.loading().is_complete());

        c.update(t0 + Duration::from_millis(100));
        assert_eq!(c.snapshot().loading, LoadingStatus::Complete);
        c.update(t0 + Duration::from_millis(600));
        assert_eq!(c.snapshot().loading, LoadingStatus::Hidden);
    }

    #[test]
    fn intro_blocks_keys_until_dismissed() {
        let t0 = Instant::now();
        let mut c = desktop(3, t0);
        assert!(!c.handle_key("ArrowRight"));
        assert_eq!(c.mode().current_index, 0);

        c.handle_input(InputEvent::PointerClicked { x: 10.0, y: 10.0 }, t0);
        assert!(!c.mode().intro_active);
        assert!(c.mode().is_grid());
        assert!(c
            .scene()
            .slots(DisplayContext::Grid)
            .iter()
            .flatten()
            .all(|e| e.transition.is_settling()));

        assert!(c.handle_key("KeyR"));
        assert!(c.mode().intro_active);
        assert!(!c.handle_key("KeyL"));
    }

    #[test]
    fn touch_device_requests_permission_on_intro_exit() {
        let t0 = Instant::now();
        let mut c = GalleryController::builder()
            .with_viewport(390.0, 844.0)
            .with_touch_device(true)
            .build();
        c.load_manifest(manifest(2), InfoIndex::default()).unwrap();
        c.handle_input(
            InputEvent::Touch {
                phase: TouchPhase::Start,
                points: TouchPoints::single(100.0, 100.0),
            },
            t0,
        );
        c.handle_input(
            InputEvent::Touch {
                phase: TouchPhase::End,
                points: TouchPoints::single(100.0, 100.0),
            },
            t0,
        );
        assert!(!c.mode().intro_active);
        assert_eq!(
            c.take_host_requests(),
            vec![HostRequest::RequestOrientationPermission]
        );
        assert!(c.take_host_requests().is_empty());
    }

    #[test]
    fn grid_click_opens_hit_model_in_solo() {
        let t0 = Instant::now();
        let mut c = desktop(10, t0);
        c.exit_intro();
        assert!(c.mode().is_grid());

        // Map the center of cell 7 back to pixels.
        let p = c.layout().position(7);
        let world = Vec2::new(p.x, p.y + c.layout().cell_height * 0.5);
        let half = c.camera().half_extents();
        let vp = c.camera().viewport;
        let x = (world.x / half.x + 1.0) * 0.5 * vp.width;
        let y = (1.0 - world.y / half.y) * 0.5 * vp.height;

        c.handle_input(InputEvent::PointerClicked { x, y }, t0);
        assert_eq!(c.mode().current_index, 7);
        assert_eq!(c.mode().display, DisplayMode::Solo);
        assert_eq!(c.scene().visible_indices(DisplayContext::Solo), vec![7]);
    }

    #[test]
    fn solo_click_advances() {
        let t0 = Instant::now();
        let mut c = desktop(3, t0);
        c.exit_intro();
        c.toggle_mode();
        c.handle_input(InputEvent::PointerClicked { x: 5.0, y: 5.0 }, t0);
        assert_eq!(c.mode().current_index, 1);
    }

    #[test]
    fn solo_transition_settles_to_rest() {
        let t0 = Instant::now();
        let mut c = desktop(3, t0);
        c.exit_intro();
        c.toggle_mode();
        c.switch_to_model(1);
        for i in 0..400 {
            c.update(t0 + Duration::from_millis(16 * i));
        }
        let entry = c.scene().entry(DisplayContext::Solo, 1).unwrap();
        assert_eq!(entry.transition.phase, TransitionPhase::Idle);
        assert!(entry.rotation.length() < 0.02);
    }

    #[test]
    fn grid_intro_settles_to_home_pose() {
        let t0 = Instant::now();
        let mut c = desktop(4, t0);
        c.exit_intro();
        for i in 0..400 {
            c.update(t0 + Duration::from_millis(16 * i));
        }
        for entry in c.scene().slots(DisplayContext::Grid).iter().flatten() {
            assert!(!entry.transition.is_active());
            assert!((entry.rotation - entry.home_rotation).length() < 0.05);
        }
    }

    #[test]
    fn shake_toggles_party_mode() {
        let t0 = Instant::now();
        let mut c = desktop(2, t0);
        let shake = Vec3::new(20.0, 0.0, 0.0);
        for i in 0..4 {
            c.handle_input(
                InputEvent::Motion {
                    acceleration: shake,
                },
                t0 + Duration::from_millis(100 * i),
            );
        }
        assert!(c.mode().party_mode);
    }

    #[test]
    fn resize_to_portrait_switches_to_column_and_drifts() {
        let t0 = Instant::now();
        let mut c = desktop(10, t0);
        c.exit_intro();
        for i in 0..400 {
            c.update(t0 + Duration::from_millis(16 * i));
        }
        c.handle_input(
            InputEvent::Resized {
                width: 390.0,
                height: 844.0,
            },
            t0,
        );
        assert!(c.layout().is_column());
        assert_eq!(c.presentation(), Presentation::Scroll);
        let entry = c.scene().entry(DisplayContext::Grid, 3).unwrap();
        assert_eq!(entry.transition.phase, TransitionPhase::Returning);
        assert!((entry.base_position.y - (-3.0 * 2.2 - 1.0)).abs() < 1e-4);

        for i in 0..600 {
            c.update(t0 + Duration::from_millis(16 * i));
        }
        let entry = c.scene().entry(DisplayContext::Grid, 3).unwrap();
        assert_eq!(entry.transition.phase, TransitionPhase::Idle);
        assert_eq!(entry.position, entry.base_position);
    }

    #[test]
    fn resize_to_portrait_keeps_current_model_in_view() {
        let t0 = Instant::now();
        let mut c = desktop(10, t0);
        c.exit_intro();
        c.switch_to_model(5);
        c.handle_input(
            InputEvent::Resized {
                width: 390.0,
                height: 844.0,
            },
            t0,
        );
        assert!(c.layout().is_column());
        assert_eq!(c.mode().current_index, 5);
        assert_eq!(c.scroll().index(c.layout()), 5);
        assert!((c.snapshot().scroll_offset - c.layout().offset_of(5)).abs() < 1e-5);

        c.handle_input(
            InputEvent::Resized {
                width: 1600.0,
                height: 900.0,
            },
            t0,
        );
        assert!(!c.layout().is_column());
        assert_eq!(c.mode().current_index, 5);
        assert_eq!(c.snapshot().scroll_offset, 0.0);
    }

    #[test]
    fn toggle_clears_touch_rotation() {
        let t0 = Instant::now();
        let mut c = desktop(4, t0);
        c.exit_intro();
        c.toggle_mode();
        assert_eq!(c.mode().display, DisplayMode::Solo);

        let touch = |phase, x: f32| InputEvent::Touch {
            phase,
            points: TouchPoints::single(x, 400.0),
        };
        c.handle_input(touch(TouchPhase::Start, 200.0), t0);
        for i in 1..=5 {
            c.handle_input(
                touch(TouchPhase::Move, 200.0 + 20.0 * i as f32),
                t0 + Duration::from_millis(16 * i),
            );
        }
        c.handle_input(touch(TouchPhase::End, 300.0), t0 + Duration::from_millis(100));
        assert!(c.input().touch_rotation().x.abs() > 0.0);

        c.toggle_mode();
        assert_eq!(c.input().touch_rotation(), Vec2::ZERO);
    }

    #[test]
    fn column_drag_scrolls_and_snaps() {
        let t0 = Instant::now();
        let mut c = controller(10, 390.0, 844.0, t0);
        c.exit_intro();
        let touch = |phase, y: f32| InputEvent::Touch {
            phase,
            points: TouchPoints::single(200.0, y),
        };
        c.handle_input(touch(TouchPhase::Start, 600.0), t0);
        let mut y = 600.0;
        for i in 1..=20 {
            y -= 20.0;
            c.handle_input(
                touch(TouchPhase::Move, y),
                t0 + Duration::from_millis(16 * i),
            );
        }
        assert!(c.scroll().target() > 0.0);
        c.handle_input(touch(TouchPhase::End, y), t0 + Duration::from_millis(400));
        let index = c.mode().current_index;
        assert!(index > 0);
        assert!(
            (c.scroll().target() - c.layout().offset_of(index)).abs() < 1e-5
        );
    }

    #[test]
    fn snapshot_reports_info_panel_in_solo_only() {
        let t0 = Instant::now();
        let mut c = GalleryController::builder().with_seed(1).build();
        let info = InfoIndex::from_json(
            r#"[{"id": "m0", "heading": "First", "lines": ["Hello"]}]"#,
        )
        .unwrap();
        c.load_manifest(manifest(2), info).unwrap();
        assert!(!c.snapshot().info_panel.visible);

        c.exit_intro();
        c.toggle_mode();
        c.update(t0);
        let snap = c.snapshot();
        assert!(snap.info_panel.visible);
        assert_eq!(snap.info_panel.title, "First");

        c.switch_to_model(1);
        let snap = c.snapshot();
        assert_eq!(snap.info_panel.title, "M1");
        assert!(snap.info_panel.lines.is_empty());
        assert!(serde_json::to_string(&snap).is_ok());
    }

    #[test]
    fn stale_grid_load_follows_current_mode() {
        let t0 = Instant::now();
        let mut c = GalleryController::builder().with_seed(3).build();
        c.load_manifest(manifest(2), InfoIndex::default()).unwrap();
        c.exit_intro();
        c.toggle_mode();
        // Grid mesh arrives after the user went back to solo.
        assert!(c.asset_loaded(1, DisplayContext::Grid, mesh(9), t0));
        assert!(!c.scene().entry(DisplayContext::Grid, 1).unwrap().visible);
        assert!(!c.asset_loaded(5, DisplayContext::Grid, mesh(10), t0));
    }
}
