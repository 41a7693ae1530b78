//! Tile names file loading

use std::path::Path;

use crate::io::error::{Result, SpliceError};
use crate::splicing::grid::TileNameGrid;

/// Read the tile names file into a grid, one row per line
///
/// # Errors
///
/// Returns [`SpliceError::TileNamesRead`] if the file is missing, unreadable
/// or not valid UTF-8
pub fn load_tile_names(path: &Path) -> Result<TileNameGrid> {
    let text = std::fs::read_to_string(path).map_err(|e| SpliceError::TileNamesRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(TileNameGrid::from_text(&text))
}
