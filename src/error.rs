//! Error handling for cxxinit.
//! Defines the error type returned by the project model, the generator and
//! the interactive layer, plus the mapping of every error onto an exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of an [`Error`], used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied something the generator cannot work with.
    InvalidInput,
    /// Creating a directory failed. Directories created before it remain.
    CreateDirectory,
    /// Writing a file failed. Files written before it remain.
    WriteFile,
    /// Talking to the terminal failed.
    Prompt,
    /// A built-in template failed to render.
    Template,
    /// Any other I/O failure (reading a blueprint, stdin).
    Io,
}

impl ErrorKind {
    /// Process exit code for this kind. Never 0, distinct per kind.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Io => 1,
            ErrorKind::InvalidInput => 2,
            ErrorKind::CreateDirectory => 3,
            ErrorKind::WriteFile => 4,
            ErrorKind::Prompt => 5,
            ErrorKind::Template => 6,
        }
    }

    /// True for the kinds caused by the filesystem rather than by the input.
    pub fn is_io_failure(self) -> bool {
        matches!(self, ErrorKind::CreateDirectory | ErrorKind::WriteFile | ErrorKind::Io)
    }
}

/// Custom error types for cxxinit operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Target directory '{target_dir}' does not exist or is not a directory.")]
    TargetDirectoryMissing { target_dir: String },

    #[error("Project '{name}' belongs to a super project, but no parent was supplied.")]
    MissingParent { name: String },

    #[error("Parent '{parent}' of project '{name}' is not a super project.")]
    ParentNotSuper { name: String, parent: String },

    #[error("Invalid project name '{name}': {reason}.")]
    InvalidName { name: String, reason: String },

    #[error("Invalid value for '{field}' of project '{name}': {reason}.")]
    InvalidField { name: String, field: &'static str, reason: String },

    #[error("Cannot add '{child}' to '{parent}': {reason}.")]
    InvalidChild { parent: String, child: String, reason: String },

    #[error("Blueprint error: {0}.")]
    BlueprintError(String),

    #[error("Failed to create directory '{}': {source}.", .path.display())]
    CreateDirectoryError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}.", .path.display())]
    WriteFileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TargetDirectoryMissing { .. }
            | Error::MissingParent { .. }
            | Error::ParentNotSuper { .. }
            | Error::InvalidName { .. }
            | Error::InvalidField { .. }
            | Error::InvalidChild { .. }
            | Error::BlueprintError(_) => ErrorKind::InvalidInput,
            Error::CreateDirectoryError { .. } => ErrorKind::CreateDirectory,
            Error::WriteFileError { .. } => ErrorKind::WriteFile,
            Error::PromptError(_) => ErrorKind::Prompt,
            Error::MinijinjaError(_) => ErrorKind::Template,
            Error::IoError(_) => ErrorKind::Io,
        }
    }

    /// Shorthand for `self.kind().exit_code()`.
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

/// Convenience type alias for Results with cxxinit's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with the status code of the
/// error's [`ErrorKind`].
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
