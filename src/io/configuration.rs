//! Fixed command-line contract and output conventions

/// Name shown in usage text and handed to the argument parser
pub const PROGRAM_NAME: &str = "tilesplicer";

/// Sole argument that prints usage instead of running a job
pub const HELP_KEYWORD: &str = "help";

/// Number of positional arguments a splice job requires
pub const EXPECTED_ARGUMENTS: usize = 5;

/// One-line usage printed for `help`
pub const USAGE: &str =
    "Command format:\n\ttilesplicer tilesetFile tileNamesFile outputDirectory tileSize tileSpacing";

// A padded RGBA tile of this edge length takes 1 GiB
/// Largest accepted tile edge length in pixels
pub const MAX_TILE_SIZE: u32 = 16_384;

/// Extension of every written tile, always encoded as PNG
pub const TILE_EXTENSION: &str = "png";

/// Grid character that leaves its cell unsliced
pub const SKIP_MARKER: char = ' ';

/// Characters that terminate a grid row and never name a tile
pub const LINE_TERMINATORS: [char; 2] = ['\n', '\r'];

// Every outcome, success or failure, leaves the process with this status.
// Callers detect failure from the printed diagnostics.
/// Process exit status for all outcomes
pub const EXIT_STATUS: u8 = 0;

// Progress bar display settings
/// Template for the tile progress bar
pub const PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}";
