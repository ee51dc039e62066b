//! Error handling for create-mcp-server.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for create-mcp-server operations.
///
/// Project generation failures (an existing output directory, filesystem or
/// rendering errors) are fatal. Host registration failures are caught by the
/// caller and reported as warnings.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Cannot proceed: output directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Prompt failed: {0}.")]
    PromptError(String),

    /// The user interrupted a prompt (Ctrl-C or closed input).
    #[error("Operation cancelled.")]
    UserAbort,

    #[error("Claude.app is not available on '{os}'.")]
    UnsupportedPlatformError { os: String },

    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVarError { name: String },

    #[error("Could not determine the home directory.")]
    HomeDirectoryError,

    #[error("Command '{command}' failed: {stderr}")]
    ShellCommandError { command: String, stderr: String },

    #[error("Failed to parse host config '{path}'. Original error: {e}")]
    HostConfigParseError { path: String, e: serde_json::Error },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                Error::UserAbort
            }
            other => Error::PromptError(other.to_string()),
        }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// A user abort exits with status code 0, everything else with 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    match err {
        Error::UserAbort => std::process::exit(0),
        _ => std::process::exit(1),
    }
}
