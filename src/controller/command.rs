//! The controller's interactive vocabulary.
//!
//! Key presses, host UI buttons and programmatic calls all end up as a
//! [`GalleryCommand`] passed to
//! [`GalleryController::execute`](super::GalleryController::execute).

use super::GalleryController;
use crate::input::KeyAction;

/// A discrete operation on the gallery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryCommand {
    /// Show the next model, wrapping.
    NextModel,
    /// Show the previous model, wrapping.
    PreviousModel,
    /// Show a specific model (index wraps).
    SwitchToModel {
        /// Manifest index.
        index: usize,
    },
    /// Flip between solo and grid.
    ToggleMode,
    /// Show the intro overlay again.
    ShowIntro,
    /// Dismiss the intro overlay.
    ExitIntro,
    /// Show or hide the debug panel.
    ToggleDebugPanel,
    /// Flip party mode.
    TogglePartyMode,
    /// Set the solo camera zoom (clamped to the configured range).
    SetZoom {
        /// Zoom factor.
        zoom: f32,
    },
}

impl From<KeyAction> for GalleryCommand {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::PreviousModel => Self::PreviousModel,
            KeyAction::NextModel => Self::NextModel,
            KeyAction::ToggleMode => Self::ToggleMode,
            KeyAction::ShowIntro => Self::ShowIntro,
            KeyAction::ToggleDebugPanel => Self::ToggleDebugPanel,
        }
    }
}

impl GalleryController {
    /// Run a command.
    pub fn execute(&mut self, command: GalleryCommand) {
        log::debug!("execute {command:?}");
        match command {
            GalleryCommand::NextModel => {
                self.switch_to_model(self.mode.current_index + 1);
            }
            GalleryCommand::PreviousModel => {
                let n = self.scene.model_count().max(1);
                self.switch_to_model(self.mode.current_index + n - 1);
            }
            GalleryCommand::SwitchToModel { index } => {
                self.switch_to_model(index);
            }
            GalleryCommand::ToggleMode => self.toggle_mode(),
            GalleryCommand::ShowIntro => self.show_intro(),
            GalleryCommand::ExitIntro => self.exit_intro(),
            GalleryCommand::ToggleDebugPanel => {
                self.mode.debug_panel = !self.mode.debug_panel;
            }
            GalleryCommand::TogglePartyMode => {
                self.mode.party_mode = !self.mode.party_mode;
                log::info!("party mode {}", self.mode.party_mode);
            }
            GalleryCommand::SetZoom { zoom } => self.set_zoom(zoom),
        }
    }

    /// Look up a key code in the bindings and run its command.
    ///
    /// While the intro is showing every key is ignored. Returns whether
    /// the key was handled.
    pub fn handle_key(&mut self, code: &str) -> bool {
        if self.mode.intro_active {
            return false;
        }
        let Some(action) = self.options.keybindings.lookup(code) else {
            return false;
        };
        self.execute(action.into());
        true
    }
}
