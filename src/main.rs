//! CLI entry point for slicing a tileset into named tiles

use std::process::ExitCode;
use tilesplicer::io::cli::{exit_status, run};

fn main() -> ExitCode {
    let result = run(std::env::args_os().skip(1));
    exit_status(&result)
}
