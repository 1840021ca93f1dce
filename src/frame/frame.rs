use image::RgbaImage;
use std::path::PathBuf;

/// One source image before composition
#[derive(Debug, Clone)]
pub struct Frame {
    /// Original file path
    pub path: PathBuf,
    /// Decoded pixel data
    pub image: RgbaImage,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
