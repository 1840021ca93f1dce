use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;
use log::debug;

use super::Frame;
use crate::error::SheetgenError;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Load all frames from a folder, sorted lexicographically by filename.
///
/// Only the folder itself is listed; nested directories are not descended
/// into (they are animation sources of their own in multi mode).
pub fn load_frames(folder: &Path) -> Result<Vec<Frame>> {
    if !folder.is_dir() {
        return Err(SheetgenError::InputNotFound(folder.to_path_buf()).into());
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(folder)
        .with_context(|| format!("failed to read directory {}", folder.display()))?
    {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(SheetgenError::EmptyFolder(folder.to_path_buf()).into());
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Loading {} frames from {}", paths.len(), folder.display());

    paths.into_iter().map(load_single_frame).collect()
}

/// Immediate subdirectories of a folder, sorted by name.
pub fn subfolders(parent: &Path) -> Result<Vec<PathBuf>> {
    if !parent.is_dir() {
        return Err(SheetgenError::InputNotFound(parent.to_path_buf()).into());
    }

    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(parent)
        .with_context(|| format!("failed to read directory {}", parent.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_single_frame(path: PathBuf) -> Result<Frame> {
    let image = ImageReader::open(&path)
        .map_err(|e| SheetgenError::ImageLoad {
            path: path.clone(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SheetgenError::ImageLoad {
            path: path.clone(),
            source: e,
        })?
        .into_rgba8();

    Ok(Frame { path, image })
}
