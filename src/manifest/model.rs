use serde::{Deserialize, Serialize};

use super::{derive_id, derive_title, file_stem};

/// Asset files backing one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum AssetSource {
    /// Binary glTF.
    Glb {
        /// Path to the `.glb` file.
        path: String,
    },
    /// Wavefront OBJ with an optional material library.
    Obj {
        /// Path to the `.obj` file.
        path: String,
        /// Path to the `.mtl` file.
        mtl: Option<String>,
    },
}

impl AssetSource {
    /// Path of the primary asset file.
    #[must_use]
    pub fn primary_path(&self) -> &str {
        match self {
            Self::Glb { path } | Self::Obj { path, .. } => path,
        }
    }
}

/// Static descriptor of one gallery model. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    /// Stable identifier (keys the info file).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Asset files.
    pub source: AssetSource,
    /// Manual scale on top of the automatic fit.
    pub scale: f32,
    /// Turntable speed hint for hosts that spin idle models.
    pub auto_rotate_speed: f32,
    /// Horizontal offset of the solo model.
    pub x_offset: f32,
    /// Vertical offset of the solo model.
    pub y_offset: f32,
    /// Home yaw in grid mode, overriding the layout default.
    pub grid_rotation_deg: Option<f32>,
}

/// Wire shape of a manifest entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModel {
    id: Option<String>,
    title: Option<String>,
    glb: Option<String>,
    obj: Option<String>,
    mtl: Option<String>,
    scale: Option<f32>,
    auto_rotate_speed: Option<f32>,
    x_offset: Option<f32>,
    y_offset: Option<f32>,
    grid_rotation_deg: Option<f32>,
}

impl ModelConfig {
    /// Parse one manifest entry. Returns a reason when the entry is
    /// unusable.
    pub(super) fn from_value(value: serde_json::Value) -> Result<Self, String> {
        let raw: RawModel =
            serde_json::from_value(value).map_err(|e| e.to_string())?;

        let source = match (non_blank(raw.glb), non_blank(raw.obj)) {
            (Some(path), _) => AssetSource::Glb { path },
            (None, Some(path)) => AssetSource::Obj {
                path,
                mtl: non_blank(raw.mtl),
            },
            (None, None) => return Err("entry has neither glb nor obj".into()),
        };

        let stem = file_stem(source.primary_path());
        let id = non_blank(raw.id).unwrap_or_else(|| derive_id(stem));
        let title = non_blank(raw.title).unwrap_or_else(|| derive_title(stem));

        Ok(Self {
            id,
            title,
            source,
            scale: raw.scale.unwrap_or(1.0),
            auto_rotate_speed: raw.auto_rotate_speed.unwrap_or(0.25),
            x_offset: raw.x_offset.unwrap_or(0.0),
            y_offset: raw.y_offset.unwrap_or(0.0),
            grid_rotation_deg: raw.grid_rotation_deg,
        })
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
