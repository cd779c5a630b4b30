//! Domain-specific error types for the outer layers of porcelain-state.
//!
//! The parsers and the freshness cache never fail; everything that can go wrong lives
//! in repository discovery, git subprocesses and configuration I/O. This module defines
//! [`PorcelainError`] for those paths using `thiserror`.
//!
//! # Public API
//! - [`PorcelainError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PorcelainError>`
//!
//! # Error Categories
//! - **Repository**: Repository not found, git2 library errors
//! - **Git subprocess**: Non-zero exit of a plumbing command, rejected references
//! - **Configuration**: Read, parse and write failures of the JSON config file

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for porcelain-state
#[derive(Error, Debug)]
pub enum PorcelainError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Git subprocess errors
    #[error("git {command} failed: {stderr}")]
    GitCommandFailed { command: String, stderr: String },

    #[error("Invalid reference name: '{reference}'")]
    InvalidReference { reference: String },

    // Config errors
    #[error("Could not determine configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PorcelainError
pub type Result<T> = std::result::Result<T, PorcelainError>;

impl PorcelainError {
    /// Create a git command failed error from the arguments and captured stderr
    pub fn git_command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an invalid reference error
    pub fn invalid_reference(reference: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }
}
