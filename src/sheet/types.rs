use std::collections::BTreeMap;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Position and cell geometry of one animation within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub x: u32,
    pub y: u32,
    pub rows: u32,
    pub columns: u32,
}

/// Playback metadata passed through to the descriptor unchanged.
///
/// The consuming engine interprets these; the packer never computes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Playback {
    pub frames_per_sprite: u32,
    pub scale_x: f64,
    pub scale_y: f64,
    pub is_looping: bool,
    pub centered: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            frames_per_sprite: 10,
            scale_x: 1.0,
            scale_y: 0.0,
            is_looping: true,
            centered: false,
        }
    }
}

/// One named entry in the descriptor file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationEntry {
    pub config: GridConfig,
    #[serde(flatten)]
    pub playback: Playback,
}

/// Descriptor file contents: animation name to entry
pub type Descriptor = BTreeMap<String, AnimationEntry>;

/// A composited sheet image plus its descriptor entry.
///
/// `animation` is `None` exactly when variable frame sizes were allowed,
/// since grid geometry is undefined for non-uniform frames.
#[derive(Debug)]
pub struct Sheet {
    pub image: RgbaImage,
    pub animation: Option<AnimationEntry>,
}

impl Sheet {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_field_names() {
        let entry = AnimationEntry {
            config: GridConfig {
                sprite_width: 16,
                sprite_height: 24,
                x: 0,
                y: 48,
                rows: 2,
                columns: 8,
            },
            playback: Playback::default(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        let config = &value["config"];
        assert_eq!(config["spriteWidth"], 16);
        assert_eq!(config["spriteHeight"], 24);
        assert_eq!(config["x"], 0);
        assert_eq!(config["y"], 48);
        assert_eq!(config["rows"], 2);
        assert_eq!(config["columns"], 8);

        // Playback fields sit beside "config", not nested under it
        assert_eq!(value["framesPerSprite"], 10);
        assert_eq!(value["scaleX"], 1.0);
        assert_eq!(value["scaleY"], 0.0);
        assert_eq!(value["isLooping"], true);
        assert_eq!(value["centered"], false);
    }

    #[test]
    fn test_entry_round_trips_through_serde() {
        let entry = AnimationEntry {
            config: GridConfig {
                sprite_width: 8,
                sprite_height: 8,
                x: 0,
                y: 0,
                rows: 1,
                columns: 4,
            },
            playback: Playback::default(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: AnimationEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
