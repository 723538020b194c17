//! Settings for text synchronization
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! only overrides what it names.

use crate::Result;
use diff_locate::DiffStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How text replacement locates changes and recovers from ones it cannot map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SyncSettings {
    /// Strategy used to locate the changed region
    pub diff: DiffStrategy,
    /// Where the selection goes when the change cannot be mapped
    pub fallback: FallbackSelection,
    /// Clamp a selection that lies past the end of the text instead of
    /// dropping it
    pub clamp_out_of_range: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            diff: DiffStrategy::Affix,
            fallback: FallbackSelection::End,
            clamp_out_of_range: true,
        }
    }
}

/// Selection to apply when the difference does not coalesce into one region.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FallbackSelection {
    /// Caret at the start of the new text
    Start,
    /// Caret at the end of the new text
    #[default]
    End,
    /// Leave whatever selection the input chose after the text write
    HostDefault,
}

impl SyncSettings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from `path`, or return defaults if the file doesn't exist
    /// or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match Self::from_json(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to parse sync settings, using defaults: {}",
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
