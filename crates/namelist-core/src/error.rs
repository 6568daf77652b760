//! Error types for the rendering pipeline.

use std::path::PathBuf;

use namelist_data::DataError;
use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering name lists
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template could not be read from disk
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `$` in the template that is neither `$$` nor a valid placeholder
    #[error("Invalid placeholder at line {line}, column {column}: {message}")]
    InvalidPlaceholder {
        line: usize,
        column: usize,
        message: String,
    },

    /// Placeholders used by the template with no value to fill them
    #[error("Template references unknown placeholders: {}", .0.join(", "))]
    UnresolvedPlaceholders(Vec<String>),

    /// Output could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cell or column addressing error
    #[error(transparent)]
    Data(#[from] DataError),
}
