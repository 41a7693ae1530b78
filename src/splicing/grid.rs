//! Character grid naming the tile found at each tileset cell

use std::collections::BTreeSet;

use crate::io::configuration::{LINE_TERMINATORS, SKIP_MARKER};

/// What the splicer does with a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Blank marker or line terminator: the cursor advances, nothing is written
    Skip,
    /// Cell holds a tile written as `<name>.png`
    Tile(char),
}

impl Cell {
    /// Classify a grid character
    pub fn classify(ch: char) -> Self {
        if ch == SKIP_MARKER || LINE_TERMINATORS.contains(&ch) {
            Self::Skip
        } else {
            Self::Tile(ch)
        }
    }
}

/// A single grid position in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Line index, maps to the vertical cell position
    pub row: usize,
    /// Character index within the line, maps to the horizontal cell position
    pub col: usize,
    /// Classified content of the cell
    pub cell: Cell,
}

/// Ordered rows of tile names, each row kept exactly as read
///
/// Line terminators stay attached to their row. They occupy a trailing
/// position that is classified as [`Cell::Skip`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileNameGrid {
    rows: Vec<String>,
}

impl TileNameGrid {
    /// Split text into rows at `\r\n`, `\r` or `\n`, retaining each row's terminator
    pub fn from_text(text: &str) -> Self {
        let mut rows = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let end = rest.find(LINE_TERMINATORS).map_or(rest.len(), |at| {
                if rest.get(at..).is_some_and(|tail| tail.starts_with("\r\n")) {
                    at + 2
                } else {
                    at + 1
                }
            });
            let (row, tail) = rest.split_at(end);
            rows.push(row.to_owned());
            rest = tail;
        }

        Self { rows }
    }

    /// Rows in file order
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Every cell in reading order, skipped cells included
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.chars().enumerate().map(move |(col, ch)| GridCell {
                row,
                col,
                cell: Cell::classify(ch),
            })
        })
    }

    /// Number of cells that produce a tile file, repeated names counted each time
    pub fn tile_count(&self) -> usize {
        self.cells()
            .filter(|cell| matches!(cell.cell, Cell::Tile(_)))
            .count()
    }

    /// Distinct tile names, which is also the set of files a run leaves behind
    pub fn tile_names(&self) -> BTreeSet<char> {
        self.cells()
            .filter_map(|cell| match cell.cell {
                Cell::Tile(name) => Some(name),
                Cell::Skip => None,
            })
            .collect()
    }
}
