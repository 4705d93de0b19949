use serde::{Deserialize, Serialize};

/// Gallery actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_mode = ["KeyG", "Space"]
/// show_intro = ["KeyR"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Show the previous model (wraps around).
    PreviousModel,
    /// Show the next model (wraps around).
    NextModel,
    /// Flip between solo and grid presentation.
    ToggleMode,
    /// Bring the intro overlay back.
    ShowIntro,
    /// Show or hide the debug panel.
    ToggleDebugPanel,
}
