//! Pixel geometry of the tileset grid

use crate::io::configuration::MAX_TILE_SIZE;
use crate::io::error::{Result, SpliceError};

/// Square region of the tileset covered by one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Horizontal offset of the left edge
    pub left: i64,
    /// Vertical offset of the top edge
    pub upper: i64,
    /// Edge length in pixels
    pub size: u32,
}

impl TileRect {
    /// Offset just past the right edge, saturating at `i64::MAX`
    pub const fn right(&self) -> i64 {
        self.left.saturating_add(self.size as i64)
    }

    /// Offset just past the bottom edge, saturating at `i64::MAX`
    pub const fn lower(&self) -> i64 {
        self.upper.saturating_add(self.size as i64)
    }

    /// Whether the rectangle lies entirely inside an image of the given dimensions
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.upper >= 0
            && self.right() <= width as i64
            && self.lower() <= height as i64
    }

    /// Whether the rectangle shares at least one pixel with an image of the given dimensions
    pub const fn overlaps(&self, width: u32, height: u32) -> bool {
        self.right() > 0
            && self.lower() > 0
            && self.left < width as i64
            && self.upper < height as i64
    }
}

/// Fixed-size cells separated by fixed spacing, with a leading margin of one
/// spacing on the top and left edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    tile_size: u32,
    tile_spacing: i64,
}

impl TileLayout {
    /// Build a layout from the parsed command-line values
    ///
    /// Spacing may be zero or negative; the cells then touch or overlap.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::InvalidTileSize`] if the tile size is not
    /// positive or exceeds [`MAX_TILE_SIZE`]
    pub fn new(tile_size: i64, tile_spacing: i64) -> Result<Self> {
        let size = u32::try_from(tile_size)
            .ok()
            .filter(|&size| size > 0 && size <= MAX_TILE_SIZE)
            .ok_or(SpliceError::InvalidTileSize { value: tile_size })?;

        Ok(Self {
            tile_size: size,
            tile_spacing,
        })
    }

    /// Edge length of every tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Gap between adjacent tiles and the leading margin
    pub const fn tile_spacing(&self) -> i64 {
        self.tile_spacing
    }

    /// Distance the cursor moves per cell, `None` if it overflows `i64`
    pub const fn stride(&self) -> Option<i64> {
        (self.tile_size as i64).checked_add(self.tile_spacing)
    }

    /// Rectangle for the cell at `row`, `col`
    ///
    /// Every preceding cell in the row advances the cursor by one stride,
    /// whether or not it produced a tile. Returns `None` when the offset
    /// does not fit an `i64`; such a cell lies outside any tileset.
    pub fn rect(&self, row: usize, col: usize) -> Option<TileRect> {
        Some(TileRect {
            left: self.offset(col)?,
            upper: self.offset(row)?,
            size: self.tile_size,
        })
    }

    fn offset(&self, index: usize) -> Option<i64> {
        if index == 0 {
            return Some(self.tile_spacing);
        }
        i64::try_from(index)
            .ok()?
            .checked_mul(self.stride()?)?
            .checked_add(self.tile_spacing)
    }
}
