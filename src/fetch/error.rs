// ABOUTME: Error types for template source retrieval
// ABOUTME: Defines errors for unsupported locators and staging failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unsupported template source: {url}")]
    UnsupportedSource { url: String },

    #[error("Template source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to walk template source: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
