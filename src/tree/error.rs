// ABOUTME: Error types for tree walking and copying operations
// ABOUTME: Defines security, pattern, and rendering errors raised during the walk

use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Path '{path}' is outside the working directory '{root}'")]
    OutsideWorkspace { path: PathBuf, root: PathBuf },

    #[error("Invalid copy pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to render '{path}': {source}")]
    Render {
        path: PathBuf,
        source: TemplateError,
    },

    #[error("Rendered name for '{path}' is empty")]
    EmptyRenderedName { path: PathBuf },

    #[error("Path '{path}' is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
