//! Input routing for GalleryController

use glam::Vec2;
use web_time::Instant;

use super::{GalleryCommand, GalleryController};
use crate::input::{
    DragAxis, InputEvent, TouchGesture, TouchPhase, TouchPoints,
};

// ── Unified input handler ──

impl GalleryController {
    /// Process a platform-agnostic input event.
    ///
    /// Hosts forward raw DOM events as [`InputEvent`] variants. Taps are
    /// derived from touch sequences, so touch hosts should not also send
    /// [`InputEvent::PointerClicked`] for the synthesized click.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.input.pointer_moved(x, y, now);
                if self.mode.intro_active {
                    self.prompt.pointer_moved(
                        Vec2::new(x, y),
                        &self.camera.viewport,
                        now,
                    );
                }
            }
            InputEvent::PointerClicked { x, y } => self.click(x, y),
            InputEvent::Touch { phase, points } => {
                self.dispatch_touch(phase, points, now);
            }
            InputEvent::Orientation { beta, gamma } => {
                self.input.orientation(beta, gamma);
            }
            InputEvent::OrientationPermission { granted } => {
                self.input.set_orientation_permission(granted);
            }
            InputEvent::Motion { acceleration } => {
                if self.input.motion(acceleration, now) {
                    self.execute(GalleryCommand::TogglePartyMode);
                }
            }
            InputEvent::Resized { width, height } => self.resize(width, height),
        }
    }

    /// Click or tap at a pixel position.
    ///
    /// Exits the intro if it is showing. In grid mode a hit on a cell opens
    /// that model in solo mode; anything else advances to the next model.
    fn click(&mut self, x: f32, y: f32) {
        if self.mode.intro_active {
            self.exit_intro();
            return;
        }
        if self.scene.model_count() == 0 {
            return;
        }
        if self.mode.is_grid() {
            let world = self.camera.screen_to_world(x, y);
            if let Some(index) = self.layout.hit_test(world, self.scroll.offset())
            {
                self.switch_to_model(index);
                self.toggle_mode();
                return;
            }
        }
        self.switch_to_model(self.mode.current_index + 1);
    }

    /// Run the gesture tracker, then route the gesture for the current
    /// mode and layout.
    fn dispatch_touch(
        &mut self,
        phase: TouchPhase,
        points: TouchPoints,
        now: Instant,
    ) {
        let gesture = self.input.touch(phase, points, now);
        if self.mode.intro_active {
            if phase == TouchPhase::End {
                self.exit_intro();
            }
            return;
        }
        let Some(gesture) = gesture else {
            return;
        };
        let scrolling = self.mode.is_grid() && self.layout.is_column();

        match gesture {
            TouchGesture::Drag { delta, axis } => match axis {
                Some(DragAxis::Vertical) if scrolling => {
                    self.scroll.drag(
                        delta.y,
                        self.camera.world_per_pixel(),
                        &self.layout,
                    );
                }
                // wait for the latch before claiming a column gesture
                None if scrolling => {}
                _ => self.input.add_touch_rotation(delta),
            },
            TouchGesture::PinchStarted => {
                self.mode.pinch_base = self.mode.zoom;
            }
            TouchGesture::Pinch { scale } => {
                self.set_zoom(self.mode.pinch_base * scale);
            }
            TouchGesture::Tap { position } => self.click(position.x, position.y),
            TouchGesture::Release { axis, velocity } => {
                if scrolling && axis == Some(DragAxis::Vertical) {
                    let index = self.scroll.release(
                        velocity.y,
                        self.options.layout.momentum_ms,
                        self.camera.world_per_pixel(),
                        &self.layout,
                    );
                    self.settle_column(index);
                }
            }
        }
    }
}
