//! Error types for argument handling, file loading and tile output

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::EXPECTED_ARGUMENTS;

/// Main error type for every terminal failure of a splice run
#[derive(Debug)]
pub enum SpliceError {
    /// Wrong number of positional arguments
    ArgumentCount {
        /// Arguments as received, program name excluded
        received: Vec<String>,
    },

    /// Argument parser rejected the invocation
    Arguments {
        /// Parser diagnostic
        reason: String,
    },

    /// Numeric parameter did not parse as a base-10 integer
    NotAnInteger {
        /// Name of the parameter being checked
        parameter: &'static str,
        /// Value as received
        value: String,
    },

    /// Tileset image missing, unreadable or in an unsupported format
    TilesetLoad {
        /// Path to the tileset image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Tile names file missing or unreadable
    TileNamesRead {
        /// Path to the tile names file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output directory could not be created
    OutputDirectory {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Cropped tile could not be written
    TileSave {
        /// Destination of the tile
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Tile name cannot be used as a file name
    InvalidTileName {
        /// Offending grid character
        name: char,
    },

    /// Tile size cannot describe a crop rectangle
    InvalidTileSize {
        /// Tile size as parsed
        value: i64,
    },
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentCount { received } => {
                write!(
                    f,
                    "Expected {EXPECTED_ARGUMENTS} arguments. Received {} argument(s): {received:?}",
                    received.len()
                )
            }
            Self::Arguments { reason } => write!(f, "Invalid arguments: {reason}"),
            Self::NotAnInteger { parameter, value } => {
                write!(f, "{parameter} must be an integer! Received: {value}")
            }
            Self::TilesetLoad { path, .. } => {
                write!(f, "Tileset {} not found!", path.display())
            }
            Self::TileNamesRead { path, .. } => {
                write!(f, "Tile Names {} not found!", path.display())
            }
            Self::OutputDirectory { path, source } => {
                write!(f, "Error making directory {}: {source}", path.display())
            }
            Self::TileSave { path, source } => {
                write!(f, "Failed to save tile '{}': {source}", path.display())
            }
            Self::InvalidTileName { name } => {
                write!(f, "Tile name {name:?} cannot be used as a file name")
            }
            Self::InvalidTileSize { value } => {
                write!(f, "tileSize must be positive to slice tiles! Received: {value}")
            }
        }
    }
}

impl std::error::Error for SpliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TilesetLoad { source, .. } | Self::TileSave { source, .. } => Some(source),
            Self::TileNamesRead { source, .. } | Self::OutputDirectory { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for splice results
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Create a not-an-integer error
pub fn not_an_integer(parameter: &'static str, value: &impl ToString) -> SpliceError {
    SpliceError::NotAnInteger {
        parameter,
        value: value.to_string(),
    }
}
