//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use resource_schema::LoaderError;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the schema loader
    #[error("{0}")]
    Loader(#[from] LoaderError),

    /// Configuration file could not be parsed
    #[error("Invalid configuration file {}: {}", path.display(), reason)]
    ConfigFile { path: PathBuf, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// A JSON Pointer did not match any node
    #[error("No node at '{}' in '{}'", pointer, name)]
    PointerNotFound { name: String, pointer: String },

    /// One or more schemas failed the check command
    #[error("{} of {} schema(s) failed to load", failed, total)]
    CheckFailed { failed: usize, total: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a configuration file error
    pub fn config_file(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Loader(LoaderError::ResourceNotFound { .. }) => 3,
            Self::Loader(LoaderError::ResourceUnreadable { .. }) => 4,
            Self::Loader(LoaderError::MalformedSchema { .. }) => 5,
            Self::Loader(LoaderError::InvalidResourceName { .. }) => 6,
            Self::ConfigFile { .. } | Self::Config(_) => 7,
            Self::InvalidArgs(_) => 8,
            Self::PointerNotFound { .. } => 9,
            Self::CheckFailed { .. } => 10,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgs(_) | Self::Loader(LoaderError::InvalidResourceName { .. })
        )
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    let mut message = error.to_string();

    if let Error::Loader(loader_error) = error {
        if loader_error.is_bundle_defect() {
            message.push_str("\n  the provider bundle is incomplete or damaged");
        }
    }

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {}", message)
    }
}
