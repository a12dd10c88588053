// ABOUTME: Main library module for the imprint templating engine
// ABOUTME: Exports all core modules and provides the public API

pub mod actions;
pub mod cli;
pub mod fetch;
pub mod template;
pub mod tree;

// Re-export commonly used types
pub use actions::{Action, ActionContext, ActionOutput, ActionRegistry, FetchTemplateAction, TemplateInput};
pub use cli::{App, Args, Config};
pub use fetch::{FetchRequest, Fetcher, LocalFetcher};
pub use template::{RenderContext, TemplateEngine};
pub use tree::{CopyMatcher, TreeCopier};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
