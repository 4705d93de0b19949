use std::path::Path;

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::ModelConfig;
use crate::error::GalleryError;
use crate::overlay::InfoContent;

/// Descriptive text for one model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelInfo {
    /// Heading; empty means "use the manifest title".
    pub heading: String,
    /// Trimmed, non-empty body lines.
    pub lines: Vec<String>,
}

/// Model info keyed by manifest id.
#[derive(Debug, Clone, Default)]
pub struct InfoIndex {
    by_id: FxHashMap<String, ModelInfo>,
}

impl InfoIndex {
    /// Parse `model-info.json`: an array of `{id, heading, lines}`.
    ///
    /// Entries without a non-blank string id are skipped.
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GalleryError::InfoParse(e.to_string()))?;
        let Value::Array(entries) = value else {
            return Err(GalleryError::InfoParse(
                "model info must be an array".into(),
            ));
        };

        let mut by_id = FxHashMap::default();
        for entry in &entries {
            let Some(id) = entry
                .get("id")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|id| !id.is_empty())
            else {
                log::warn!("skipping model info entry without id");
                continue;
            };
            let heading = entry
                .get("heading")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned();
            let lines = entry
                .get("lines")
                .and_then(Value::as_array)
                .map(|lines| {
                    lines
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::trim)
                        .filter(|l| !l.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default();
            let _ = by_id.insert(id.to_owned(), ModelInfo { heading, lines });
        }
        Ok(Self { by_id })
    }

    /// Read and parse an info file.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Info for a model id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModelInfo> {
        self.by_id.get(id)
    }

    /// Panel content for a model: the info heading (or the manifest title
    /// when blank or missing) plus body lines.
    #[must_use]
    pub fn content_for(&self, model: &ModelConfig) -> InfoContent {
        match self.get(&model.id) {
            Some(info) => {
                let title = if info.heading.trim().is_empty() {
                    model.title.clone()
                } else {
                    info.heading.clone()
                };
                InfoContent {
                    title,
                    lines: info.lines.clone(),
                }
            }
            None => InfoContent {
                title: model.title.clone(),
                lines: Vec::new(),
            },
        }
    }
}
