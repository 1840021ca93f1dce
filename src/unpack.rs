use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{ImageReader, imageops};
use log::info;

use crate::error::SheetgenError;
use crate::output::read_descriptor;

/// Re-slice a packed sheet into individual frame files.
///
/// `base` is a path without extension; both `<base>.png` and `<base>.json`
/// must exist. Each animation gets a sibling directory named after it,
/// holding one numbered file per grid cell in row-major order.
pub fn unpack_sheet(base: &Path) -> Result<()> {
    let image_path = with_suffix(base, ".png");
    let json_path = with_suffix(base, ".json");

    if !image_path.exists() || !json_path.exists() {
        return Err(SheetgenError::MissingPair(base.to_path_buf()).into());
    }

    let descriptor = read_descriptor(&json_path)?;
    let sheet = ImageReader::open(&image_path)
        .map_err(|e| SheetgenError::ImageLoad {
            path: image_path.clone(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SheetgenError::ImageLoad {
            path: image_path.clone(),
            source: e,
        })?
        .into_rgba8();

    let parent = match base.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    for (name, entry) in &descriptor {
        let out_dir = parent.join(name);
        fs::create_dir_all(&out_dir).map_err(|e| SheetgenError::OutputWrite {
            path: out_dir.clone(),
            source: e,
        })?;

        let cfg = &entry.config;
        let mut frame_index = 0u32;
        for row in 0..cfg.rows {
            for col in 0..cfg.columns {
                // 1-based, zero-padded to two digits; the consuming engine
                // relies on these exact names
                frame_index += 1;
                let x = cfg.x + col * cfg.sprite_width;
                let y = cfg.y + row * cfg.sprite_height;
                let frame =
                    imageops::crop_imm(&sheet, x, y, cfg.sprite_width, cfg.sprite_height)
                        .to_image();

                let out_path = out_dir.join(format!("{name}_{frame_index:02}.png"));
                frame.save(&out_path).map_err(|e| SheetgenError::ImageSave {
                    path: out_path.clone(),
                    source: e,
                })?;
            }
        }

        info!(
            "Extracted {} frames for '{}' into {}",
            frame_index,
            name,
            out_dir.display()
        );
    }

    Ok(())
}

/// Append a literal suffix to a path without treating dots specially.
///
/// `Path::with_extension` would clobber anything after the last dot in the
/// final component, which breaks base names like `hero.v2`.
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(base.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}
