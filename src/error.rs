use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetgenError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("No image files found in '{0}'")]
    EmptyFolder(PathBuf),

    #[error("No frames to pack")]
    NoFrames,

    #[error(
        "Frame '{path}' is {width}x{height} but the first frame is \
         {expected_width}x{expected_height}; use stack mode for variable sizes"
    )]
    SizeMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("Missing .png or .json companion for base path '{0}'")]
    MissingPair(PathBuf),

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("No subfolder produced a usable sheet in '{0}'")]
    EmptyBatch(PathBuf),

    #[error("Invalid descriptor '{path}': {source}")]
    DescriptorParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
