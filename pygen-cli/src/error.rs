//! Error types for the CLI.
//!
//! This module defines all error types used throughout the CLI,
//! providing detailed error messages with the offending path attached.

use std::path::PathBuf;
use thiserror::Error;

use pygen_ir::IrError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error reading an IR document.
    #[error("Failed to load IR document: {0}")]
    Load(#[from] LoadError),

    /// Error from the IR layer (encoding, emitting).
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// A check did not pass (findings denied, file not canonical).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error reading an IR document from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// IO error reading the file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid IR document.
    #[error("Invalid IR in {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: IrError,
    },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An emitted path would land outside the output directory.
    #[error("Refusing to write {path}: path is not inside the output directory")]
    OutsideOutputDir { path: PathBuf },
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Validation failures exit with 2 so scripts can tell "checked and
    /// found problems" apart from "could not run".
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            _ => 1,
        }
    }
}
