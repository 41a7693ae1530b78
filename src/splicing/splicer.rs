//! Grid walk that crops each named cell and writes it as `<name>.png`

use std::collections::HashSet;
use std::path::{Path, PathBuf, is_separator};

use crate::io::configuration::TILE_EXTENSION;
use crate::io::error::{Result, SpliceError};
use crate::io::image::save_tile;
use crate::io::progress::ProgressManager;
use crate::splicing::grid::{Cell, TileNameGrid};
use crate::splicing::layout::TileLayout;
use crate::splicing::tileset::Tileset;

/// Summary of the files a splice run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpliceReport {
    /// Number of tile files written, rewrites included
    pub tiles_written: usize,
    /// Names whose rectangle reached outside the tileset, in grid order
    pub out_of_bounds: Vec<char>,
    /// Names written more than once; the last cell in reading order wins
    pub overwritten: Vec<char>,
}

/// Destination of the tile named `name` inside `output_dir`
///
/// # Errors
///
/// Returns [`SpliceError::InvalidTileName`] if `name` is a path separator,
/// which would place the tile outside `output_dir`
pub fn tile_path(output_dir: &Path, name: char) -> Result<PathBuf> {
    if is_separator(name) {
        return Err(SpliceError::InvalidTileName { name });
    }
    Ok(output_dir.join(format!("{name}.{TILE_EXTENSION}")))
}

/// Crop every named cell of the grid out of the tileset and save it
///
/// Cells are visited row by row. A rectangle reaching outside the tileset
/// only produces a warning; the padded tile is still written. A cell whose
/// offset overflows is written as a fully transparent tile.
///
/// # Errors
///
/// Returns an error if:
/// - The tile size is not positive or exceeds the size cap
/// - A tile name is a path separator
/// - A tile cannot be written to the output directory
pub fn splice_tileset(
    tileset: &Tileset,
    names: &TileNameGrid,
    output_dir: &Path,
    tile_size: i64,
    tile_spacing: i64,
    progress: &ProgressManager,
) -> Result<SpliceReport> {
    let layout = TileLayout::new(tile_size, tile_spacing)?;
    let mut report = SpliceReport::default();
    let mut written = HashSet::new();

    for grid_cell in names.cells() {
        let Cell::Tile(name) = grid_cell.cell else {
            continue;
        };

        let rect = layout.rect(grid_cell.row, grid_cell.col);
        if !rect.is_some_and(|rect| tileset.contains(&rect)) {
            progress.warn(&format!("{name} is not in the tileset!"));
            report.out_of_bounds.push(name);
        }

        let tile = rect.map_or_else(
            || Tileset::blank_tile(layout.tile_size()),
            |rect| tileset.crop(&rect),
        );
        save_tile(&tile, &tile_path(output_dir, name)?)?;

        if !written.insert(name) && !report.overwritten.contains(&name) {
            report.overwritten.push(name);
        }
        report.tiles_written += 1;
        progress.advance(name);
    }

    progress.finish();
    Ok(report)
}
