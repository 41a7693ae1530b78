//! Keeps `tests/unit` a mirror of `src` and every test file non-empty

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

// Entry points and module files carry no logic of their own
fn is_exempt(relative: &str) -> bool {
    matches!(relative, "main.rs" | "lib.rs") || relative.ends_with("mod.rs")
}

/// Relative paths of every `.rs` file and directory below `base`
fn mirror_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let relative = path
            .strip_prefix(base)
            .map_err(|_strip_error| io::Error::other("path outside base"))?
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            paths.insert(relative);
            mirror_paths(&path, base, paths)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") && !is_exempt(&relative) {
            paths.insert(relative);
        }
    }
    Ok(())
}

fn collect(root: &str) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    let base = Path::new(root);
    if let Err(error) = mirror_paths(base, base, &mut paths) {
        unreachable!("Failed to scan {root}: {error}");
    }
    paths
}

fn report(paths: &BTreeSet<&String>, from: &str, to: &str) -> String {
    paths
        .iter()
        .map(|path| format!("  - {from}/{path} -> {to}/{path}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_src_and_unit_tests_mirror() {
    let src = collect("src");
    let unit = collect("tests/unit");

    let untested: BTreeSet<&String> = src.difference(&unit).collect();
    assert!(
        untested.is_empty(),
        "Source files without unit tests:\n{}",
        report(&untested, "src", "tests/unit")
    );

    let orphaned: BTreeSet<&String> = unit.difference(&src).collect();
    assert!(
        orphaned.is_empty(),
        "Unit tests without source files:\n{}",
        report(&orphaned, "tests/unit", "src")
    );
}

#[test]
fn test_unit_files_contain_tests() {
    let empty: Vec<String> = collect("tests/unit")
        .into_iter()
        .filter(|relative| relative.ends_with(".rs"))
        .filter(|relative| {
            fs::read_to_string(Path::new("tests/unit").join(relative))
                .map_or(true, |content| !content.contains("#[test]"))
        })
        .collect();

    assert!(
        empty.is_empty(),
        "Unit test files without #[test] functions:\n{}",
        empty.join("\n")
    );
}
