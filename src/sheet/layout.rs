/// Widest a uniform grid is allowed to be, in cells
pub const MAX_COLUMNS: u32 = 8;

/// Row/column geometry of a uniform-grid sheet.
///
/// Frame `i` occupies cell `(i / columns, i % columns)`, so index order is
/// row-major within the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
}

impl GridLayout {
    /// Layout for `count` frames: `columns = min(8, count)`,
    /// `rows = ceil(count / columns)`. `count` must be at least 1.
    pub fn for_frame_count(count: u32) -> Self {
        let columns = count.min(MAX_COLUMNS);
        let rows = count.div_ceil(columns);
        Self { columns, rows }
    }

    /// Pixel origin of frame `index` given the uniform sprite size
    pub fn cell_origin(&self, index: u32, sprite_width: u32, sprite_height: u32) -> (u32, u32) {
        (
            (index % self.columns) * sprite_width,
            (index / self.columns) * sprite_height,
        )
    }

    /// Sheet pixel dimensions given the uniform sprite size
    pub fn sheet_size(&self, sprite_width: u32, sprite_height: u32) -> (u32, u32) {
        (self.columns * sprite_width, self.rows * sprite_height)
    }
}
