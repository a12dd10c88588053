// ABOUTME: Error types for action invocation
// ABOUTME: Defines input validation errors and chains collaborator failures

use thiserror::Error;

use crate::fetch::FetchError;
use crate::template::TemplateError;
use crate::tree::TreeError;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Action not found: {name}")]
    ActionNotFound { name: String },

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;
