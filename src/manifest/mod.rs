//! Model manifest (`models.json`) and model info (`model-info.json`).
//!
//! Both files are parsed leniently: the top level must be an array, but
//! individual malformed entries are skipped with a warning instead of
//! failing the whole load.

mod info;
mod model;

use std::path::Path;

pub use info::{InfoIndex, ModelInfo};
pub use model::{AssetSource, ModelConfig};
use serde_json::Value;

use crate::error::GalleryError;

/// Ordered list of models. Layout math derives from order and length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    models: Vec<ModelConfig>,
}

impl Manifest {
    /// Wrap an already-built model list.
    #[must_use]
    pub fn new(models: Vec<ModelConfig>) -> Self {
        Self { models }
    }

    /// Parse `models.json`.
    ///
    /// Fails if the JSON is invalid, the top level is not an array, or no
    /// entry is usable.
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GalleryError::ManifestParse(e.to_string()))?;
        let Value::Array(entries) = value else {
            return Err(GalleryError::ManifestParse(
                "model manifest must be an array".into(),
            ));
        };

        let mut models = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            match ModelConfig::from_value(entry) {
                Ok(model) => models.push(model),
                Err(reason) => {
                    log::warn!("skipping manifest entry {i}: {reason}");
                }
            }
        }
        if models.is_empty() {
            return Err(GalleryError::EmptyManifest);
        }
        log::info!("manifest lists {} models", models.len());
        Ok(Self { models })
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Models in display order.
    #[must_use]
    pub fn models(&self) -> &[ModelConfig] {
        &self.models
    }

    /// Model at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ModelConfig> {
        self.models.get(index)
    }

    /// Number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the manifest lists no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Identifier derived from a file or directory name: lower-case, runs of
/// non-alphanumerics collapsed to `-`, trimmed; `model` if nothing is left.
#[must_use]
pub fn derive_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(c);
        } else {
            pending_dash = true;
        }
    }
    if id.is_empty() {
        "model".to_owned()
    } else {
        id
    }
}

/// Human title derived from a file name: extension dropped, `-`/`_` become
/// spaces, camelCase is split, every word capitalized.
#[must_use]
pub fn derive_title(name: &str) -> String {
    let base = match name.rfind('.') {
        Some(dot) if dot > 0 && !name[dot + 1..].is_empty() => &name[..dot],
        _ => name,
    };

    let mut spaced = String::with_capacity(base.len() + 8);
    let mut prev: Option<char> = None;
    for c in base.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase())
        {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an asset path into `(base path with trailing slash, file name)`
/// for loaders that resolve sibling resources relative to the base.
#[must_use]
pub fn split_asset_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(slash) => (&path[..=slash], &path[slash + 1..]),
        None => ("", path),
    }
}

/// File name without directories or extension.
fn file_stem(path: &str) -> &str {
    let (_, file) = split_asset_path(path);
    match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_id_slugifies() {
        assert_eq!(derive_id("Ancient Vase_02"), "ancient-vase-02");
        assert_eq!(derive_id("--Chair--"), "chair");
        assert_eq!(derive_id("!!!"), "model");
    }

    #[test]
    fn derive_title_humanizes() {
        assert_eq!(derive_title("ancient_vase.glb"), "Ancient Vase");
        assert_eq!(derive_title("redChair-v2"), "Red Chair V2");
        assert_eq!(derive_title("  lamp  "), "Lamp");
    }

    #[test]
    fn split_path_keeps_trailing_slash() {
        assert_eq!(
            split_asset_path("objs/chair/chair.obj"),
            ("objs/chair/", "chair.obj")
        );
        assert_eq!(split_asset_path("chair.glb"), ("", "chair.glb"));
    }

    #[test]
    fn manifest_skips_malformed_entries() {
        let json = r#"[
            {"id": "vase", "title": "Vase", "glb": "objs/vase.glb", "scale": 1.5},
            {"title": "No asset"},
            "not an object",
            {"obj": "objs/lamp/tableLamp.obj", "mtl": "objs/lamp/tableLamp.mtl",
             "yOffset": -0.5, "gridRotationDeg": 30}
        ]"#;
        let manifest = Manifest::from_json(json).unwrap();
        assert_eq!(manifest.len(), 2);

        let vase = manifest.get(0).unwrap();
        assert_eq!(vase.scale, 1.5);
        assert_eq!(vase.auto_rotate_speed, 0.25);

        let lamp = manifest.get(1).unwrap();
        assert_eq!(lamp.id, "tablelamp");
        assert_eq!(lamp.title, "Table Lamp");
        assert_eq!(lamp.y_offset, -0.5);
        assert_eq!(lamp.grid_rotation_deg, Some(30.0));
        assert_eq!(
            lamp.source,
            AssetSource::Obj {
                path: "objs/lamp/tableLamp.obj".into(),
                mtl: Some("objs/lamp/tableLamp.mtl".into()),
            }
        );
    }

    #[test]
    fn manifest_must_be_a_non_empty_array() {
        assert!(matches!(
            Manifest::from_json(r#"{"models": []}"#),
            Err(GalleryError::ManifestParse(_))
        ));
        assert!(matches!(
            Manifest::from_json("[]"),
            Err(GalleryError::EmptyManifest)
        ));
        assert!(matches!(
            Manifest::from_json("[{\"title\": \"x\"}]"),
            Err(GalleryError::EmptyManifest)
        ));
        assert!(matches!(
            Manifest::from_json("not json"),
            Err(GalleryError::ManifestParse(_))
        ));
    }

    #[test]
    fn info_index_is_lenient() {
        let json = r#"[
            {"id": " vase ", "heading": "The Vase", "lines": [" one ", "", 3, "two"]},
            {"id": "", "heading": "skipped"},
            {"heading": "no id"},
            {"id": "lamp", "heading": 5}
        ]"#;
        let info = InfoIndex::from_json(json).unwrap();
        assert_eq!(info.len(), 2);
        let vase = info.get("vase").unwrap();
        assert_eq!(vase.heading, "The Vase");
        assert_eq!(vase.lines, vec!["one".to_owned(), "two".to_owned()]);
        assert_eq!(info.get("lamp").unwrap().heading, "");
    }

    #[test]
    fn info_content_falls_back_to_title() {
        let manifest = Manifest::from_json(
            r#"[{"id": "lamp", "title": "Desk Lamp", "glb": "lamp.glb"},
                {"id": "vase", "title": "Vase", "glb": "vase.glb"}]"#,
        )
        .unwrap();
        let info =
            InfoIndex::from_json(r#"[{"id": "lamp", "lines": ["Brass."]}]"#)
                .unwrap();

        let lamp = info.content_for(manifest.get(0).unwrap());
        assert_eq!(lamp.title, "Desk Lamp");
        assert_eq!(lamp.lines, vec!["Brass.".to_owned()]);

        let vase = info.content_for(manifest.get(1).unwrap());
        assert_eq!(vase.title, "Vase");
        assert!(vase.lines.is_empty());
    }

    #[test]
    fn info_must_be_an_array() {
        assert!(matches!(
            InfoIndex::from_json("{}"),
            Err(GalleryError::InfoParse(_))
        ));
    }
}
