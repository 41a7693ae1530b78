//! In-memory tileset image and tile cropping

use image::{DynamicImage, RgbaImage, imageops};

use crate::splicing::layout::TileRect;

/// Source image the tiles are cut from, fixed for the whole run
#[derive(Debug, Clone)]
pub struct Tileset {
    image: RgbaImage,
}

impl Tileset {
    /// Wrap a decoded image, normalising it to RGBA8
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgba8(),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the rectangle lies fully inside the tileset
    pub fn contains(&self, rect: &TileRect) -> bool {
        rect.fits_within(self.width(), self.height())
    }

    /// Cut out a tile
    ///
    /// The result is always `rect.size` square. Pixels the rectangle covers
    /// outside the tileset are left fully transparent.
    pub fn crop(&self, rect: &TileRect) -> RgbaImage {
        let mut tile = Self::blank_tile(rect.size);
        // Overlap bounds the origin to (-size, dimension), so negation cannot overflow
        if rect.overlaps(self.width(), self.height()) {
            imageops::replace(&mut tile, &self.image, -rect.left, -rect.upper);
        }
        tile
    }

    /// Fully transparent tile, written for cells that lie outside any tileset
    pub fn blank_tile(size: u32) -> RgbaImage {
        RgbaImage::new(size, size)
    }
}
