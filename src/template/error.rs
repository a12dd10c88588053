// ABOUTME: Error types for template rendering operations
// ABOUTME: Defines specific error types for expression parsing and evaluation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error in '{template}': {message}")]
    Syntax { template: String, message: String },

    #[error("Template render error: {0}")]
    Render(String),

    #[error("Value serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
