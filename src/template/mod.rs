// ABOUTME: Template rendering module for the imprint engine
// ABOUTME: Provides expression rendering, value contexts, and custom filters

pub mod context;
pub mod engine;
pub mod error;
pub mod filters;

pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
