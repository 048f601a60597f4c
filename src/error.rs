//! Error handling for the sprout application.
//! Defines the error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Error types for sprout operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem errors raised while creating directories or writing
    /// generated files.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The configuration file given via `--config` does not exist.
    #[error("Configuration file not found: '{path}'.")]
    ConfigNotFoundError { path: String },

    /// The configuration document exists but has an invalid shape.
    #[error("Configuration error: {0}.")]
    ConfigFormatError(String),

    /// A template override path given via flags does not exist.
    #[error("Template file not found: '{path}'.")]
    TemplateNotFoundError { path: String },

    /// Template rendering failed.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// An exclude pattern from the configuration could not be compiled.
    #[error("Exclude pattern error: {0}.")]
    ExcludePatternError(String),

    /// The interactive confirmation prompt failed.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The command line named a command sprout does not know.
    #[error("Unknown command: '{name}'.")]
    UnknownCommandError { name: String },
}

/// Convenience type alias for Results with sprout's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
