//! Tileset decoding and PNG tile export

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::io::error::{Result, SpliceError};
use crate::splicing::tileset::Tileset;

/// Open and decode the tileset image
///
/// The format is detected from the file contents, so any raster format the
/// `image` crate decodes is accepted.
///
/// # Errors
///
/// Returns [`SpliceError::TilesetLoad`] if the file is missing, unreadable or
/// not a decodable image
pub fn load_tileset(path: &Path) -> Result<Tileset> {
    let image = image::ImageReader::open(path)
        .map_err(|e| SpliceError::TilesetLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .with_guessed_format()
        .map_err(|e| SpliceError::TilesetLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| SpliceError::TilesetLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(Tileset::from_image(image))
}

/// Write a tile as PNG, replacing any existing file
///
/// # Errors
///
/// Returns [`SpliceError::TileSave`] if the file cannot be created or encoded
pub fn save_tile(tile: &RgbaImage, path: &Path) -> Result<()> {
    tile.save_with_format(path, ImageFormat::Png)
        .map_err(|e| SpliceError::TileSave {
            path: path.to_path_buf(),
            source: e,
        })
}
