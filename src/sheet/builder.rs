use anyhow::Result;
use image::{RgbaImage, imageops};
use log::debug;

use super::layout::GridLayout;
use super::types::{AnimationEntry, GridConfig, Playback, Sheet};
use crate::error::SheetgenError;
use crate::frame::Frame;

/// Composes loaded frames into a single sheet image.
///
/// Grid mode lays uniform-size frames out row-major, at most
/// [`MAX_COLUMNS`](super::MAX_COLUMNS) per row. Stack mode pastes frames
/// top-to-bottom at x=0 and is the only mode that accepts variable sizes.
pub struct SheetBuilder {
    stack: bool,
    allow_variable_sizes: bool,
    playback: Playback,
}

impl SheetBuilder {
    pub fn new() -> Self {
        Self {
            stack: false,
            allow_variable_sizes: false,
            playback: Playback::default(),
        }
    }

    /// Force vertical stacking even for uniform frames
    pub fn stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    /// Accept frames of differing dimensions (implies stacking, no descriptor)
    pub fn allow_variable_sizes(mut self, allow: bool) -> Self {
        self.allow_variable_sizes = allow;
        self
    }

    pub fn playback(mut self, playback: Playback) -> Self {
        self.playback = playback;
        self
    }

    /// Build a sheet from the given frames
    pub fn build(&self, frames: &[Frame]) -> Result<Sheet> {
        let Some(first) = frames.first() else {
            return Err(SheetgenError::NoFrames.into());
        };

        if !self.allow_variable_sizes {
            self.check_uniform(frames, first.width(), first.height())?;
        }

        if self.stack || self.allow_variable_sizes {
            Ok(self.build_stack(frames, first))
        } else {
            Ok(self.build_grid(frames, first.width(), first.height()))
        }
    }

    fn check_uniform(&self, frames: &[Frame], width: u32, height: u32) -> Result<()> {
        for frame in frames {
            if frame.width() != width || frame.height() != height {
                return Err(SheetgenError::SizeMismatch {
                    path: frame.path.clone(),
                    width: frame.width(),
                    height: frame.height(),
                    expected_width: width,
                    expected_height: height,
                }
                .into());
            }
        }
        Ok(())
    }

    #[expect(clippy::cast_possible_truncation, reason = "frame counts are small")]
    fn build_grid(&self, frames: &[Frame], sprite_width: u32, sprite_height: u32) -> Sheet {
        let layout = GridLayout::for_frame_count(frames.len() as u32);
        let (width, height) = layout.sheet_size(sprite_width, sprite_height);
        let mut image = RgbaImage::new(width, height);

        for (i, frame) in frames.iter().enumerate() {
            let (x, y) = layout.cell_origin(i as u32, sprite_width, sprite_height);
            imageops::overlay(&mut image, &frame.image, i64::from(x), i64::from(y));
        }

        debug!(
            "Grid sheet: {}x{} ({} columns, {} rows)",
            width, height, layout.columns, layout.rows
        );

        let animation = AnimationEntry {
            config: GridConfig {
                sprite_width,
                sprite_height,
                x: 0,
                y: 0,
                rows: layout.rows,
                columns: layout.columns,
            },
            playback: self.playback,
        };

        Sheet {
            image,
            animation: Some(animation),
        }
    }

    #[expect(clippy::cast_possible_truncation, reason = "frame counts are small")]
    fn build_stack(&self, frames: &[Frame], first: &Frame) -> Sheet {
        let width = frames.iter().map(Frame::width).max().unwrap_or(0);
        let height = frames.iter().map(Frame::height).sum();
        let mut image = RgbaImage::new(width, height);

        let mut y_offset = 0u32;
        for frame in frames {
            imageops::overlay(&mut image, &frame.image, 0, i64::from(y_offset));
            y_offset += frame.height();
        }

        debug!("Stacked sheet: {}x{} ({} frames)", width, height, frames.len());

        // Uniform frames keep a one-column grid descriptor; variable sizes
        // have no meaningful cell geometry.
        let animation = if self.allow_variable_sizes {
            None
        } else {
            Some(AnimationEntry {
                config: GridConfig {
                    sprite_width: first.width(),
                    sprite_height: first.height(),
                    x: 0,
                    y: 0,
                    rows: frames.len() as u32,
                    columns: 1,
                },
                playback: self.playback,
            })
        };

        Sheet { image, animation }
    }
}

impl Default for SheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::path::PathBuf;

    fn solid_frame(name: &str, width: u32, height: u32, rgba: [u8; 4]) -> Frame {
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            *pixel = Rgba(rgba);
        }
        Frame {
            path: PathBuf::from(name),
            image,
        }
    }

    #[test]
    fn test_grid_placement() {
        // Three 2x2 frames fit one row; each cell holds its own colour
        let frames = vec![
            solid_frame("a.png", 2, 2, [255, 0, 0, 255]),
            solid_frame("b.png", 2, 2, [0, 255, 0, 255]),
            solid_frame("c.png", 2, 2, [0, 0, 255, 255]),
        ];

        let sheet = SheetBuilder::new().build(&frames).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (6, 2));
        assert_eq!(sheet.image.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(sheet.image.get_pixel(2, 0), &Rgba([0, 255, 0, 255]));
        assert_eq!(sheet.image.get_pixel(4, 1), &Rgba([0, 0, 255, 255]));

        let anim = sheet.animation.unwrap();
        assert_eq!(anim.config.columns, 3);
        assert_eq!(anim.config.rows, 1);
        assert_eq!(anim.config.sprite_width, 2);
        assert_eq!(anim.config.sprite_height, 2);
        assert_eq!((anim.config.x, anim.config.y), (0, 0));
    }

    #[test]
    fn test_grid_wraps_past_eight() {
        let frames: Vec<_> = (0..10)
            .map(|i| solid_frame(&format!("{i}.png"), 4, 4, [i as u8, 0, 0, 255]))
            .collect();

        let sheet = SheetBuilder::new().build(&frames).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (32, 8));

        // Frame 8 wraps to the second row
        assert_eq!(sheet.image.get_pixel(0, 4), &Rgba([8, 0, 0, 255]));
        assert_eq!(sheet.image.get_pixel(5, 4), &Rgba([9, 0, 0, 255]));

        let anim = sheet.animation.unwrap();
        assert_eq!(anim.config.columns, 8);
        assert_eq!(anim.config.rows, 2);
    }

    #[test]
    fn test_stack_geometry() {
        let frames = vec![
            solid_frame("a.png", 3, 2, [1, 0, 0, 255]),
            solid_frame("b.png", 5, 4, [2, 0, 0, 255]),
            solid_frame("c.png", 2, 1, [3, 0, 0, 255]),
        ];

        let sheet = SheetBuilder::new()
            .allow_variable_sizes(true)
            .build(&frames)
            .unwrap();

        // Width = widest frame, height = sum of heights
        assert_eq!((sheet.width(), sheet.height()), (5, 7));
        // Cumulative y offsets, left-aligned at x=0
        assert_eq!(sheet.image.get_pixel(0, 0), &Rgba([1, 0, 0, 255]));
        assert_eq!(sheet.image.get_pixel(0, 2), &Rgba([2, 0, 0, 255]));
        assert_eq!(sheet.image.get_pixel(0, 6), &Rgba([3, 0, 0, 255]));
        // No descriptor for variable sizes
        assert!(sheet.animation.is_none());
    }

    #[test]
    fn test_stack_uniform_keeps_descriptor() {
        let frames = vec![
            solid_frame("a.png", 4, 4, [1, 0, 0, 255]),
            solid_frame("b.png", 4, 4, [2, 0, 0, 255]),
        ];

        let sheet = SheetBuilder::new().stack(true).build(&frames).unwrap();
        assert_eq!((sheet.width(), sheet.height()), (4, 8));

        let anim = sheet.animation.unwrap();
        assert_eq!(anim.config.rows, 2);
        assert_eq!(anim.config.columns, 1);
        assert_eq!(anim.config.sprite_width, 4);
        assert_eq!(anim.config.sprite_height, 4);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let frames = vec![
            solid_frame("a.png", 4, 4, [1, 0, 0, 255]),
            solid_frame("b.png", 4, 6, [2, 0, 0, 255]),
        ];

        let err = SheetBuilder::new().build(&frames).unwrap_err();
        match err.downcast_ref::<SheetgenError>() {
            Some(SheetgenError::SizeMismatch {
                width,
                height,
                expected_width,
                expected_height,
                ..
            }) => {
                assert_eq!((*width, *height), (4, 6));
                assert_eq!((*expected_width, *expected_height), (4, 4));
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_stack_without_variable_still_requires_uniform() {
        let frames = vec![
            solid_frame("a.png", 4, 4, [1, 0, 0, 255]),
            solid_frame("b.png", 2, 4, [2, 0, 0, 255]),
        ];

        let err = SheetBuilder::new().stack(true).build(&frames).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SheetgenError>(),
            Some(SheetgenError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_no_frames() {
        let err = SheetBuilder::new().build(&[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SheetgenError>(),
            Some(SheetgenError::NoFrames)
        ));
    }
}
