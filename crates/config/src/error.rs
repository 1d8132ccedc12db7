//! Error types for feed manifests

use podfeed_builder::FeedError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for manifest operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading, saving or rendering a manifest
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a manifest or audio file
    #[error("Failed to read file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a manifest or feed file
    #[error("Failed to write file at {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the manifest
    #[error("Failed to parse manifest at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to serialize the manifest
    #[error("Failed to serialize manifest: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Manifest contains invalid values
    #[error("Manifest validation failed: {0}")]
    ValidationError(String),

    /// Failed to create an output directory
    #[error("Failed to create directory at {path}: {source}")]
    DirectoryCreationError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A path could not be resolved
    #[error("Could not resolve path: {reason}")]
    PathResolutionError { reason: String },

    /// Failed to back up the previous manifest
    #[error("Failed to backup manifest: {source}")]
    BackupError { source: std::io::Error },

    /// Manifest file does not exist
    #[error("Manifest not found at {path}")]
    NotFound { path: PathBuf },

    /// Feed assembly failed
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validation error for a specific manifest field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the field (e.g., "episodes[0].url")
    pub field: String,

    /// Human-readable error message
    pub message: String,

    /// The invalid value, if available
    pub value: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Creates a validation error with the invalid value
    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: Some(value.to_string()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)?;
        if let Some(ref value) = self.value {
            write!(f, " (got: {})", value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Joins validation errors into a single message
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
