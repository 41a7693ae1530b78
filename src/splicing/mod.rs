//! Tileset slicing driven by a character grid
//!
//! This module contains the domain side of the tool:
//! - Tile name grid parsing and cell classification
//! - Cell geometry and crop rectangles
//! - The tileset image and the splice loop writing one PNG per tile

/// Tile name grid and cell classification
pub mod grid;
/// Cell geometry in tileset pixels
pub mod layout;
/// Grid walk that crops and saves each named tile
pub mod splicer;
/// Decoded tileset image and cropping
pub mod tileset;

pub use grid::TileNameGrid;
pub use layout::TileLayout;
pub use splicer::{SpliceReport, splice_tileset};
pub use tileset::Tileset;
