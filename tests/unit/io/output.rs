//! Tests for output directory preparation

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use tilesplicer::SpliceError;
    use tilesplicer::io::output::{DirectoryStatus, ensure_output_directory};

    // Tests nested directories are created
    // Verified by using create_dir instead of create_dir_all
    #[test]
    fn test_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("c");

        assert_eq!(
            ensure_output_directory(&path).unwrap(),
            DirectoryStatus::Created
        );
        assert!(path.is_dir());
    }

    // Tests an existing directory is reused untouched
    // Verified by clearing the directory on reuse
    #[test]
    fn test_existing_directory_reused() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("keep.txt");
        fs::write(&marker, "keep").unwrap();

        assert_eq!(
            ensure_output_directory(temp_dir.path()).unwrap(),
            DirectoryStatus::AlreadyExisted
        );
        assert!(marker.exists());
    }

    // Tests creation below a regular file fails
    // Verified by ignoring the creation result
    #[test]
    fn test_creation_failure() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        fs::write(&file, "").unwrap();

        let result = ensure_output_directory(&file.join("out"));
        assert!(matches!(result, Err(SpliceError::OutputDirectory { .. })));
    }
}
