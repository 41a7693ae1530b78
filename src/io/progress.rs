//! Tile progress display and in-run warnings

use crate::io::configuration::PROGRESS_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the tiles of one splice run
///
/// Draws to stderr and stays invisible when stderr is not a terminal.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible bar expecting `total_tiles` tiles
    pub fn new(total_tiles: usize) -> Self {
        let bar = ProgressBar::new(total_tiles as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one written tile
    pub fn advance(&self, name: char) {
        self.bar.set_message(format!("{name}"));
        self.bar.inc(1);
    }

    /// Print a warning without tearing the bar
    // Allow print for user feedback on tiles outside the tileset
    #[allow(clippy::print_stderr)]
    pub fn warn(&self, message: &str) {
        self.bar.suspend(|| eprintln!("{message}"));
    }

    /// Finish the bar with the number of tiles written
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} tiles written", self.position()));
    }

    /// Number of tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
