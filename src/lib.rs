//! Slice a tileset image into individual named tiles
//!
//! A text grid names the tile at each cell of the tileset with one character.
//! Every named cell is cropped and written as `<name>.png` into an output
//! directory; blank cells only advance the cursor.

#![forbid(unsafe_code)]

/// Command line, file loading, tile export and error handling
pub mod io;
/// Grid walk, cell geometry and tile cropping
pub mod splicing;

pub use io::error::{Result, SpliceError};
