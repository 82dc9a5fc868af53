//! Error types for modelsync-core
//!
//! Provides unified error handling across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::Span;

/// Main error type for model operations
#[derive(Debug, Error)]
pub enum ModelError {
    /// Missing or invalid payload field, raised before any I/O
    #[error("{operation}: {message}")]
    Validation { operation: String, message: String },

    /// A located node has an unexpected kind
    #[error("Structural mismatch: {0}")]
    StructuralMismatch(String),

    /// Closed-schema violation during extraction
    #[error("Unrecognized property '{name}' in model '{namespace}'")]
    UnrecognizedProperty { namespace: String, name: String },

    /// Update/remove of an entry that does not exist
    #[error("No {container} entry named '{name}' in model '{namespace}'")]
    EntryNotFound {
        namespace: String,
        container: &'static str,
        name: String,
    },

    /// Grammar could not be loaded or produced no tree
    #[error("Parser setup failed: {0}")]
    ParserSetup(String),

    /// Malformed source text
    #[error("Parse error at line {}, column {}: {message}", span.start_line, span.start_col)]
    Parse { message: String, span: Span },

    /// `create` onto a path that already exists
    #[error("File already exists: {}", .0.display())]
    FileExists(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ModelError {
    /// Create a validation error
    pub fn validation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::Validation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a structural mismatch error
    pub fn structural(msg: impl Into<String>) -> Self {
        ModelError::StructuralMismatch(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>, span: Span) -> Self {
        ModelError::Parse {
            message: msg.into(),
            span,
        }
    }

    /// True for the error kinds raised before the file system is touched
    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation { .. })
    }
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
