use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{RgbaImage, imageops};
use log::{debug, info, warn};

use crate::error::SheetgenError;
use crate::frame::{load_frames, subfolders};
use crate::output::{save_sheet_image, write_descriptor};
use crate::sheet::{AnimationEntry, Descriptor, Playback, SheetBuilder};

/// Options for packing a single folder
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Stack frames vertically instead of laying out a grid
    pub stack: bool,
    /// Accept frames of differing dimensions (no descriptor is written)
    pub allow_variable_sizes: bool,
    /// Name of the descriptor entry
    pub animation_name: String,
    /// Passthrough playback metadata
    pub playback: Playback,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            stack: false,
            allow_variable_sizes: false,
            animation_name: "idle".to_string(),
            playback: Playback::default(),
        }
    }
}

/// Pack one folder of frames into a sheet written next to the folder.
///
/// The sheet is named after the folder and keeps the first frame's file
/// extension; the descriptor (when one applies) goes beside it as
/// `<folder>.json`. Returns the sheet path.
pub fn pack_folder(folder: &Path, options: &PackOptions) -> Result<PathBuf> {
    let folder = folder
        .canonicalize()
        .with_context(|| format!("cannot resolve folder {}", folder.display()))?;
    let frames = load_frames(&folder)?;

    let sheet = SheetBuilder::new()
        .stack(options.stack)
        .allow_variable_sizes(options.allow_variable_sizes)
        .playback(options.playback)
        .build(&frames)?;

    let stem = folder_name(&folder);
    let parent = folder.parent().unwrap_or(Path::new(".")).to_path_buf();

    let ext = frames[0]
        .path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_lowercase();

    let sheet_path = parent.join(format!("{stem}.{ext}"));
    save_sheet_image(&sheet.image, &sheet_path)?;
    info!("Saved {}", sheet_path.display());

    if let Some(animation) = sheet.animation {
        let json_path = parent.join(format!("{stem}.json"));
        let mut descriptor = Descriptor::new();
        descriptor.insert(options.animation_name.clone(), animation);
        write_descriptor(&descriptor, &json_path)?;
        info!("Saved {}", json_path.display());
    }

    Ok(sheet_path)
}

/// An intermediate per-folder sheet awaiting combination
struct SubSheet {
    path: PathBuf,
    name: String,
    image: RgbaImage,
    animation: AnimationEntry,
}

/// Pack every subfolder of `parent` and combine the results vertically.
///
/// Each subfolder becomes one grid-mode animation named after it; the
/// combined sheet and descriptor are written to the parent folder under its
/// own base name. Per-subfolder failures are skipped with a warning; the
/// batch only fails when no subfolder produced a sheet.
pub fn pack_tree(parent: &Path, playback: Playback) -> Result<()> {
    let parent = parent
        .canonicalize()
        .with_context(|| format!("cannot resolve folder {}", parent.display()))?;

    let mut subsheets = Vec::new();
    for sub in subfolders(&parent)? {
        let name = folder_name(&sub);
        match pack_subfolder(&sub, &name, playback, &parent)? {
            Some(subsheet) => subsheets.push(subsheet),
            None => continue,
        }
    }

    if subsheets.is_empty() {
        return Err(SheetgenError::EmptyBatch(parent).into());
    }

    let width = subsheets.iter().map(|s| s.image.width()).max().unwrap_or(0);
    let height = subsheets.iter().map(|s| s.image.height()).sum();
    let mut combined = RgbaImage::new(width, height);
    let mut descriptor = Descriptor::new();

    let mut y_offset = 0u32;
    for sub in &mut subsheets {
        imageops::overlay(&mut combined, &sub.image, 0, i64::from(y_offset));
        sub.animation.config.x = 0;
        sub.animation.config.y = y_offset;
        descriptor.insert(sub.name.clone(), sub.animation.clone());
        y_offset += sub.image.height();
    }

    let base = folder_name(&parent);
    let sheet_path = parent.join(format!("{base}.png"));
    let json_path = parent.join(format!("{base}.json"));
    save_sheet_image(&combined, &sheet_path)?;
    write_descriptor(&descriptor, &json_path)?;
    info!(
        "Combined {} animations into {} ({}x{})",
        descriptor.len(),
        sheet_path.display(),
        width,
        height
    );

    for sub in &subsheets {
        match fs::remove_file(&sub.path) {
            Ok(()) => debug!("Deleted intermediate {}", sub.path.display()),
            Err(e) => warn!("Failed to delete intermediate {}: {}", sub.path.display(), e),
        }
    }

    Ok(())
}

/// Pack one subfolder in grid mode, writing its intermediate sheet.
///
/// Returns `Ok(None)` when the subfolder is unusable (empty or mismatched
/// frame sizes); only I/O failures on the intermediate itself propagate.
fn pack_subfolder(
    sub: &Path,
    name: &str,
    playback: Playback,
    parent: &Path,
) -> Result<Option<SubSheet>> {
    let sheet = match load_frames(sub)
        .and_then(|frames| SheetBuilder::new().playback(playback).build(&frames))
    {
        Ok(sheet) => sheet,
        Err(e) => {
            warn!("Skipping {}: {:#}", sub.display(), e);
            return Ok(None);
        }
    };

    // Grid mode always yields a descriptor entry
    let Some(animation) = sheet.animation else {
        return Ok(None);
    };

    let path = parent.join(format!("{name}.png"));
    save_sheet_image(&sheet.image, &path)?;
    debug!("Wrote intermediate {}", path.display());

    Ok(Some(SubSheet {
        path,
        name: name.to_string(),
        image: sheet.image,
        animation,
    }))
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}
