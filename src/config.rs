use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sheet::Playback;

/// Optional defaults file for packing runs.
///
/// Every field has a default, so a partial file is fine. Playback values are
/// passed through to the descriptor unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Descriptor entry name used in single-folder mode
    pub animation_name: String,
    /// Playback metadata written into every descriptor entry
    pub playback: Playback,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            version: 1,
            animation_name: "idle".to_string(),
            playback: Playback::default(),
        }
    }
}

impl SheetConfig {
    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SheetConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
