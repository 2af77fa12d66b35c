//! Error handling for theme-builder.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::style::{paint, Style};

/// Errors that can stop a builder run.
///
/// Invalid answers are not represented here: they are recovered locally by
/// asking the same question again.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A file of the project tree could not be read, written or removed
    #[error("Cannot access '{}': {source}.", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path scheduled for deletion does not exist
    #[error("Cannot delete '{}': no such file or directory.", .path.display())]
    MissingPath { path: PathBuf },

    /// Represents errors that occur while loading the builder manifest
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The input source failed to produce an answer
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors that occur while resetting the work tree
    #[error("Workspace reset error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Represents errors that occur while rendering include directives
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Pattern error: {0}.")]
    RegexError(#[from] regex::Error),

    #[error("File pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// The operator cancelled the run
    #[error("Theme generation interrupted.")]
    Interrupted,

    /// A step was requested after the flow finished
    #[error("The builder has already been finalized.")]
    Finalized,
}

impl Error {
    /// Wraps an io error together with the path it occurred on.
    pub fn file<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::FileError { path, source }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", paint(err, Style::Error));
    std::process::exit(1);
}
