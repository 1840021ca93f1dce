use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, RgbaImage};

use crate::error::SheetgenError;

/// Save a sheet image, inferring the format from the path extension.
///
/// JPEG cannot carry an alpha channel, so sheets destined for .jpg/.jpeg
/// are flattened to RGB first.
pub fn save_sheet_image(image: &RgbaImage, path: &Path) -> Result<()> {
    let jpeg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"));

    let result = if jpeg {
        DynamicImage::ImageRgba8(image.clone()).into_rgb8().save(path)
    } else {
        image.save(path)
    };

    result.map_err(|e| SheetgenError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");

        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
        save_sheet_image(&image, &path).unwrap();

        let back = image::open(&path).unwrap().into_rgba8();
        assert_eq!(back, image);
    }

    #[test]
    fn test_save_jpeg_flattens_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.jpg");

        let image = RgbaImage::new(4, 4);
        save_sheet_image(&image, &path).unwrap();
        assert!(path.exists());
    }
}
