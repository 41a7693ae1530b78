//! Tests for tile names file loading

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use tilesplicer::SpliceError;
    use tilesplicer::io::names::load_tile_names;

    // Tests rows keep their line terminators
    // Verified by splitting with lines()
    #[test]
    fn test_rows_retain_newlines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");
        fs::write(&path, "AB\n C\nD").unwrap();

        let grid = load_tile_names(&path).unwrap();
        assert_eq!(grid.rows(), &["AB\n", " C\n", "D"]);
    }

    // Tests an empty file yields an empty grid
    // Verified by inserting an empty row for empty input
    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("names.txt");
        fs::write(&path, "").unwrap();

        let grid = load_tile_names(&path).unwrap();
        assert!(grid.rows().is_empty());
    }

    // Tests a missing file reports the requested path
    // Verified by formatting a different path into the error
    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.txt");

        let err = load_tile_names(&path).unwrap_err();
        assert!(matches!(err, SpliceError::TileNamesRead { .. }));
        assert_eq!(
            err.to_string(),
            format!("Tile Names {} not found!", path.display())
        );
    }
}
