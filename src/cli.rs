//! Command-line interface implementation for sprout.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_BASE_DIR;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "sprout: declarative component scaffolding tool", long_about = None)]
pub struct Args {
    /// Command to run: 'generate' (the default) or 'help'
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Path to the YAML configuration file listing components
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root directory generated components are placed under
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Overwrite existing files instead of skipping them
    #[arg(short, long)]
    pub force: bool,

    /// Path to a component template overriding the bundled default
    #[arg(long, value_name = "PATH")]
    pub component_template: Option<PathBuf>,

    /// Path to a story template overriding the bundled default
    #[arg(long, value_name = "PATH")]
    pub story_template: Option<PathBuf>,

    /// Print the computed plan and exit without prompting or writing
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt and proceed.
    /// The plan is still printed before any file is written.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With clap's default error handling for unknown options and
///   malformed arguments (non-zero status, message on stderr)
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
