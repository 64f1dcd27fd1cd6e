//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),

    #[error("Invalid book '{id}': {reason}")]
    InvalidBook { id: String, reason: String },

    #[error("Duplicate book identifier: {0}")]
    DuplicateId(String),
}

/// Errors that can occur while computing aggregates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("No book has a finished date; period aggregates are undefined")]
    MissingDate,
}

/// Errors that can occur while parsing a letter grade
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("Malformed grade '{0}': expected A, B, C, D or F optionally followed by '+' or '-'")]
    Malformed(String),
}

/// Errors that can occur during infographic generation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid infographic size {width}x{height}: both sides must be non-zero")]
    InvalidSize { width: usize, height: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
