//! Error types for the prp-runner CLI.
//!
//! Uses thiserror for derive macros and provides one-line, user-actionable
//! error messages. A runner exiting non-zero is not an error: its code is
//! relayed as the process exit code instead.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for prp-runner operations.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The runner manifest does not exist.
    #[error("Runner manifest not found at {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// The runner manifest could not be read or parsed.
    #[error("Invalid format in {}: {reason}", .path.display())]
    ManifestMalformed { path: PathBuf, reason: String },

    /// The requested runner is not defined in the manifest.
    #[error("Runner '{runner}' not found in {}", .manifest.display())]
    UnknownRunner { runner: String, manifest: PathBuf },

    /// The task file does not exist.
    #[error("PRP file not found at {}", .path.display())]
    TaskFileNotFound { path: PathBuf },

    /// The task file exists but could not be read as text.
    #[error("failed to read PRP file '{}': {source}", .path.display())]
    TaskFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The runner has an empty command template.
    #[error("Runner '{runner}' has an empty command_template")]
    EmptyCommand { runner: String },

    /// The runner's program could not be found.
    #[error(
        "Command '{program}' not found. Please ensure the '{runner}' CLI tool is installed and in your PATH."
    )]
    CommandNotFound { runner: String, program: String },

    /// The runner's program was found but could not be started.
    #[error("failed to execute runner command '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command-line usage not caught by argument parsing.
    #[error("{0}")]
    Usage(String),

    /// Relaying runner output or waiting on it failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// Returns the exit code for this error.
    ///
    /// Every local failure maps to the same code; distinct codes are reserved
    /// for the runner's own exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::ManifestNotFound { .. }
            | RunnerError::ManifestMalformed { .. }
            | RunnerError::UnknownRunner { .. }
            | RunnerError::TaskFileNotFound { .. }
            | RunnerError::TaskFileUnreadable { .. }
            | RunnerError::EmptyCommand { .. }
            | RunnerError::CommandNotFound { .. }
            | RunnerError::SpawnFailed { .. }
            | RunnerError::Usage(_)
            | RunnerError::Io { .. } => exit_codes::FAILURE,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        RunnerError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for prp-runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
