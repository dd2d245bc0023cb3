//! Typed errors raised by the runner library.
//!
//! Only discovery and configuration problems abort a run. A launch failure is
//! folded into a failed `TestResult` by the execution loop and never reaches
//! the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;

#[derive(Error, Debug)]
pub enum RunnerError {
    /// The test directory is missing or cannot be listed.
    #[error("cannot read test directory '{}'", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered test could not be spawned.
    #[error("cannot launch '{}'", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// `init` refused to overwrite an existing configuration file.
    #[error("configuration file '{}' already exists (use --force to overwrite)", path.display())]
    ConfigExists { path: PathBuf },
}

impl RunnerError {
    pub fn discovery(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RunnerError::Discovery {
            path: path.into(),
            source,
        }
    }

    pub fn launch(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RunnerError::Launch {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RunnerError::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
