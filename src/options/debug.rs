use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug overlay toggles.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Show the debug panel (FPS, mode, input source) at startup.
    #[schemars(title = "Show Debug Panel")]
    pub show_panel: bool,
}
