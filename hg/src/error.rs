//! Generator error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running a generation request
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Environment variable {name} is required but not set")]
    MissingConfiguration { name: String },

    #[error("Environment variable {name} has invalid value '{value}' (expected {expected})")]
    InvalidConfigurationValue {
        name: String,
        value: String,
        expected: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Template '{name}' not found in {}", .dir.display())]
    TemplateNotFound { name: String, dir: PathBuf },

    #[error("Failed to render template {name}: {message}")]
    TemplateRender { name: String, message: String },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl GenError {
    /// Wrap an I/O error with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Check if this error should stop the process before any request runs
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GenError::MissingConfiguration { .. } | GenError::InvalidConfigurationValue { .. }
        )
    }
}

/// Result alias used across the library
pub type GenResult<T> = Result<T, GenError>;
