//! Browser bindings.
//!
//! [`WebGallery`] wraps a [`GalleryController`] for a JavaScript host that
//! owns the renderer: the host forwards DOM events, reports loaded meshes by
//! numeric node id and, every animation frame, applies the JSON snapshot
//! returned by [`WebGallery::frame`].

use glam::{Vec2, Vec3};
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::controller::GalleryController;
use crate::input::{InputEvent, TouchPhase, TouchPoints};
use crate::manifest::{InfoIndex, Manifest};
use crate::options::Options;
use crate::scene::{DisplayContext, LoadedMesh, MeshBounds, NodeHandle};

/// Install the panic hook and console logger once per page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Gallery controller exposed to JavaScript.
#[wasm_bindgen]
pub struct WebGallery {
    controller: GalleryController,
}

#[wasm_bindgen]
impl WebGallery {
    /// Create a gallery for a viewport, optionally tuned by a TOML preset.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        touch_device: bool,
        options_toml: Option<String>,
    ) -> Result<WebGallery, JsValue> {
        let options = match options_toml {
            Some(toml) => Options::from_toml(&toml).map_err(to_js)?,
            None => Options::default(),
        };
        let controller = GalleryController::builder()
            .with_options(options)
            .with_viewport(width, height)
            .with_touch_device(touch_device)
            .build();
        Ok(Self { controller })
    }

    /// Install `models.json` and (optionally) `model-info.json` contents.
    ///
    /// A broken manifest is fatal and shows in the loading status; a broken
    /// info file only loses the descriptions.
    pub fn load_manifest(
        &mut self,
        manifest_json: &str,
        info_json: Option<String>,
    ) -> Result<(), JsValue> {
        let manifest = match Manifest::from_json(manifest_json) {
            Ok(manifest) => manifest,
            Err(e) => {
                self.controller.fail_loading(e.to_string());
                return Err(to_js(e));
            }
        };
        let info = info_json
            .map(|json| {
                InfoIndex::from_json(&json).unwrap_or_else(|e| {
                    log::warn!("model info ignored: {e}");
                    InfoIndex::default()
                })
            })
            .unwrap_or_default();
        self.controller.load_manifest(manifest, info).map_err(to_js)
    }

    /// Manifest or info fetch failed before parsing.
    pub fn fail_loading(&mut self, message: &str) {
        self.controller.fail_loading(message);
    }

    /// A mesh finished loading. `bounds` is `[min_x, min_y, min_z, max_x,
    /// max_y, max_z]`.
    pub fn asset_loaded(
        &mut self,
        index: usize,
        solo: bool,
        node: u32,
        bounds: &[f32],
    ) -> Result<bool, JsValue> {
        let [min_x, min_y, min_z, max_x, max_y, max_z] = *bounds else {
            return Err(JsValue::from_str("bounds must hold six numbers"));
        };
        let mesh = LoadedMesh {
            handle: NodeHandle(u64::from(node)),
            bounds: MeshBounds::new(
                Vec3::new(min_x, min_y, min_z),
                Vec3::new(max_x, max_y, max_z),
            ),
        };
        Ok(self.controller.asset_loaded(
            index,
            context(solo),
            mesh,
            Instant::now(),
        ))
    }

    /// A mesh failed to load.
    pub fn asset_failed(&mut self, index: usize, solo: bool, reason: &str) {
        self.controller
            .asset_failed(index, context(solo), reason, Instant::now());
    }

    /// `pointermove`.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.input(InputEvent::PointerMoved { x, y });
    }

    /// `click` from a mouse.
    pub fn pointer_clicked(&mut self, x: f32, y: f32) {
        self.input(InputEvent::PointerClicked { x, y });
    }

    /// `touchstart` / `touchmove` / `touchend`. Pass the second touch for
    /// two-finger gestures.
    pub fn touch(
        &mut self,
        phase: &str,
        x: f32,
        y: f32,
        x2: Option<f32>,
        y2: Option<f32>,
    ) -> Result<(), JsValue> {
        let phase = match phase {
            "start" => TouchPhase::Start,
            "move" => TouchPhase::Move,
            "end" => TouchPhase::End,
            other => {
                return Err(JsValue::from_str(&format!(
                    "unknown touch phase {other}"
                )))
            }
        };
        let points = match (x2, y2) {
            (Some(x2), Some(y2)) => {
                TouchPoints::pair(Vec2::new(x, y), Vec2::new(x2, y2))
            }
            _ => TouchPoints::single(x, y),
        };
        self.input(InputEvent::Touch { phase, points });
        Ok(())
    }

    /// `deviceorientation` beta/gamma in degrees.
    pub fn orientation(&mut self, beta: f32, gamma: f32) {
        self.input(InputEvent::Orientation { beta, gamma });
    }

    /// Result of the permission request asked for by the controller.
    pub fn orientation_permission(&mut self, granted: bool) {
        self.input(InputEvent::OrientationPermission { granted });
    }

    /// `devicemotion` acceleration including gravity.
    pub fn motion(&mut self, x: f32, y: f32, z: f32) {
        self.input(InputEvent::Motion {
            acceleration: Vec3::new(x, y, z),
        });
    }

    /// Window resized or rotated.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.input(InputEvent::Resized { width, height });
    }

    /// `keydown` with `KeyboardEvent.code`. Returns whether it was handled.
    pub fn key(&mut self, code: &str) -> bool {
        self.controller.handle_key(code)
    }

    /// Advance one animation frame and return the snapshot as JSON.
    pub fn frame(&mut self) -> Result<String, JsValue> {
        self.controller.update(Instant::now());
        serde_json::to_string(&self.controller.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pending host requests as a JSON array of strings.
    pub fn host_requests(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.take_host_requests())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// JSON schema of the options, for a tuning UI.
    pub fn options_schema() -> Result<String, JsValue> {
        serde_json::to_string(&Options::json_schema())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl WebGallery {
    fn input(&mut self, event: InputEvent) {
        self.controller.handle_input(event, Instant::now());
    }
}

fn context(solo: bool) -> DisplayContext {
    if solo {
        DisplayContext::Solo
    } else {
        DisplayContext::Grid
    }
}

#[allow(clippy::needless_pass_by_value)]
fn to_js(e: crate::error::GalleryError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
