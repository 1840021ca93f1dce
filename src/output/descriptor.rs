use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::SheetgenError;
use crate::sheet::Descriptor;

/// Write a descriptor as pretty-printed JSON
pub fn write_descriptor(descriptor: &Descriptor, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(descriptor)?;
    fs::write(path, content).map_err(|e| SheetgenError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Read a descriptor back from its JSON file
pub fn read_descriptor(path: &Path) -> Result<Descriptor> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptor {}", path.display()))?;
    let descriptor =
        serde_json::from_str(&content).map_err(|e| SheetgenError::DescriptorParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(descriptor)
}
