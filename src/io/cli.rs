//! Command-line reading and the splice pipeline

use crate::io::configuration::{EXIT_STATUS, EXPECTED_ARGUMENTS, HELP_KEYWORD, PROGRAM_NAME, USAGE};
use crate::io::error::{Result, SpliceError, not_an_integer};
use crate::io::image::load_tileset;
use crate::io::names::load_tile_names;
use crate::io::output::{DirectoryStatus, ensure_output_directory};
use crate::io::progress::ProgressManager;
use crate::splicing::splicer::{SpliceReport, splice_tileset};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(
    about = "Slice a tileset image into named tiles",
    disable_help_flag = true,
    disable_version_flag = true,
    allow_hyphen_values = true
)]
/// Positional arguments of a splice job, numbers still unparsed
pub struct Cli {
    /// Tileset image to slice
    #[arg(value_name = "TILESET_FILE", allow_hyphen_values = true)]
    pub tileset_file: PathBuf,

    /// Text file naming each grid cell with one character
    #[arg(value_name = "TILE_NAMES_FILE", allow_hyphen_values = true)]
    pub tile_names_file: PathBuf,

    /// Directory receiving one PNG per tile name
    #[arg(value_name = "OUTPUT_DIRECTORY", allow_hyphen_values = true)]
    pub output_directory: PathBuf,

    /// Tile edge length in pixels
    #[arg(value_name = "TILE_SIZE", allow_hyphen_values = true)]
    pub tile_size: String,

    /// Gap between tiles and leading margin in pixels
    #[arg(value_name = "TILE_SPACING", allow_hyphen_values = true)]
    pub tile_spacing: String,
}

/// What the command line asked for
#[derive(Debug)]
pub enum Invocation {
    /// Print usage and stop
    Help,
    /// Run one splice job
    Splice(SpliceJob),
}

/// How a successful invocation ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Usage text was printed
    Usage,
    /// Tiles were written
    Spliced(SpliceReport),
}

/// Fully typed splice job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceJob {
    /// Tileset image to slice
    pub tileset_file: PathBuf,
    /// Tile names file
    pub tile_names_file: PathBuf,
    /// Directory receiving the tiles
    pub output_directory: PathBuf,
    /// Tile edge length in pixels, not range checked
    pub tile_size: i64,
    /// Gap between tiles in pixels, not range checked
    pub tile_spacing: i64,
}

impl SpliceJob {
    /// Parse the numeric arguments of a command line
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::NotAnInteger`] naming the first parameter that
    /// is not an integer
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let tile_size = check_int("tileSize", &cli.tile_size)?;
        let tile_spacing = check_int("tileSpacing", &cli.tile_spacing)?;

        Ok(Self {
            tileset_file: cli.tileset_file,
            tile_names_file: cli.tile_names_file,
            output_directory: cli.output_directory,
            tile_size,
            tile_spacing,
        })
    }

    /// Make the output directory, load both inputs and splice
    ///
    /// The directory is created before either input is opened, so a missing
    /// tileset still leaves the directory behind.
    ///
    /// # Errors
    ///
    /// Returns the first failure of any stage; no stage is retried
    // Allow print for user feedback when reusing a directory
    #[allow(clippy::print_stderr)]
    pub fn run(&self, progress: Option<ProgressManager>) -> Result<SpliceReport> {
        if ensure_output_directory(&self.output_directory)? == DirectoryStatus::AlreadyExisted {
            eprintln!(
                "Note: directory {} already exists!",
                self.output_directory.display()
            );
        }

        let tileset = load_tileset(&self.tileset_file)?;
        let names = load_tile_names(&self.tile_names_file)?;
        let progress = progress.unwrap_or_else(|| ProgressManager::new(names.tile_count()));

        splice_tileset(
            &tileset,
            &names,
            &self.output_directory,
            self.tile_size,
            self.tile_spacing,
            &progress,
        )
    }
}

/// Parse a labelled value as a base-10 integer
///
/// Surrounding whitespace and a leading sign are accepted.
///
/// # Errors
///
/// Returns [`SpliceError::NotAnInteger`] naming `parameter` and the raw value
pub fn check_int(parameter: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_parse_error| not_an_integer(parameter, &value))
}

/// Turn raw arguments, program name excluded, into an invocation
///
/// Paths are not checked here; the loaders report missing files.
///
/// # Errors
///
/// Returns an error if:
/// - The argument count is not exactly five
/// - `tileSize` or `tileSpacing` is not an integer
pub fn read_arguments<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if let [only] = args.as_slice()
        && only.as_os_str() == HELP_KEYWORD
    {
        return Ok(Invocation::Help);
    }

    if args.len() != EXPECTED_ARGUMENTS {
        return Err(SpliceError::ArgumentCount {
            received: args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        });
    }

    // Leading `--` keeps every user argument positional, a literal `--` included
    let command_line = [OsString::from(PROGRAM_NAME), OsString::from("--")]
        .into_iter()
        .chain(args);
    let cli = Cli::try_parse_from(command_line)
        .map_err(|e| SpliceError::Arguments {
            reason: e.to_string(),
        })?;

    SpliceJob::from_cli(cli).map(Invocation::Splice)
}

/// Read arguments and carry out the invocation
///
/// # Errors
///
/// Returns the first failure of argument reading or of the splice job
// Allow print for the usage text
#[allow(clippy::print_stdout)]
pub fn run<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match read_arguments(args)? {
        Invocation::Help => {
            println!("{USAGE}");
            Ok(Outcome::Usage)
        }
        Invocation::Splice(job) => job.run(None).map(Outcome::Spliced),
    }
}

/// Report a failed run and pick the process exit status
///
/// Every outcome maps to [`EXIT_STATUS`]; failures are only visible through
/// the printed diagnostic.
// Allow print for the terminal diagnostic
#[allow(clippy::print_stderr)]
pub fn exit_status(result: &Result<Outcome>) -> ExitCode {
    if let Err(error) = result {
        eprintln!("{error}");
    }
    ExitCode::from(EXIT_STATUS)
}
