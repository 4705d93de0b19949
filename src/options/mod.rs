//! Centralized gallery options with TOML preset support.
//!
//! All tweakable settings (per-presentation animation rates, input
//! normalization, layout, keybindings, debug toggles) are consolidated here.
//! Options serialize to/from TOML so tuning presets can live next to the
//! manifest.

mod animation;
mod debug;
mod input;
mod keybindings;
mod layout;

use std::path::Path;

pub use animation::{
    AnimationOptions, InfoPanelOptions, PresentationParams, RandomizeRange,
};
pub use debug::DebugOptions;
pub use input::{GyroOptions, InputOptions, ShakeOptions};
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input.gyro]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Per-presentation animation tuning.
    pub animation: AnimationOptions,
    /// Input normalization.
    pub input: InputOptions,
    /// World-space layout.
    pub layout: LayoutOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Debug overlay options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GalleryError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path).map_err(GalleryError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GalleryError::Io)?;
        }
        std::fs::write(path, content).map_err(GalleryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
