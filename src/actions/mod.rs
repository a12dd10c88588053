// ABOUTME: Action invocation contract for the imprint engine
// ABOUTME: Defines the action trait, invocation context, and name-based registry

pub mod error;
pub mod fetch_template;

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

pub use error::{ActionError, Result};
pub use fetch_template::{FetchTemplateAction, TemplateInput};

/// Per-invocation context handed to every action.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Boundary all destination paths must stay inside
    pub workspace_root: PathBuf,
    /// Base for resolving relative source locators
    pub base_url: Option<String>,
}

impl ActionContext {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self {
            workspace_root,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Result of a successful action invocation.
#[derive(Debug, Clone)]
pub struct ActionOutput {
    /// Directory populated by the action, inside the workspace
    pub output_path: PathBuf,
}

#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, input: Value, context: ActionContext) -> Result<ActionOutput>;
}

pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Registry with all built-in actions, wired to the given fetcher
    pub fn with_builtins(fetcher: Box<dyn crate::fetch::Fetcher>) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FetchTemplateAction::new(fetcher)));
        registry
    }

    pub fn register(&mut self, action: Box<dyn Action>) {
        self.actions.insert(action.name().to_string(), action);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|action| action.as_ref())
    }

    pub async fn execute(
        &self,
        name: &str,
        input: Value,
        context: ActionContext,
    ) -> Result<ActionOutput> {
        match self.get(name) {
            Some(action) => action.execute(input, context).await,
            None => Err(ActionError::ActionNotFound {
                name: name.to_string(),
            }),
        }
    }

    pub fn list_actions(&self) -> Vec<&str> {
        self.actions.keys().map(|name| name.as_str()).collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
