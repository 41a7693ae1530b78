/// Argument reading, pipeline orchestration and exit status
pub mod cli;
/// Command-line contract and output conventions
pub mod configuration;
/// Error types for every terminal failure
pub mod error;
/// Tileset decoding and tile export
pub mod image;
/// Tile names file loading
pub mod names;
/// Output directory preparation
pub mod output;
/// Progress display and warnings
pub mod progress;
