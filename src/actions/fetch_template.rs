// ABOUTME: The fetch:template action entry point
// ABOUTME: Validates input, stages the source tree, and renders it into the workspace

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::error::{ActionError, Result};
use super::{Action, ActionContext, ActionOutput};
use crate::fetch::{FetchRequest, Fetcher};
use crate::template::{RenderContext, TemplateEngine};
use crate::tree::{self, CopyMatcher, TreeCopier};

pub const ACTION_NAME: &str = "fetch:template";

/// Input accepted by the `fetch:template` action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInput {
    /// Template source locator, handed to the fetcher unchanged
    pub url: String,
    /// Destination path, resolved against the workspace root
    pub target_path: PathBuf,
    /// Value mapping for template rendering
    #[serde(default)]
    pub values: Map<String, Value>,
    /// Glob patterns for entries copied verbatim
    #[serde(default)]
    pub copy_without_render: Option<Vec<String>>,
}

pub struct FetchTemplateAction {
    fetcher: Box<dyn Fetcher>,
}

impl FetchTemplateAction {
    pub fn new(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Validate the raw input shape before any I/O. Structural problems are
    /// reported here, with no staging directory requested and no fetch
    /// performed.
    pub fn validate_input(input: &Value) -> Result<TemplateInput> {
        if let Some(patterns) = input.get("copyWithoutRender") {
            let valid = patterns
                .as_array()
                .is_some_and(|list| list.iter().all(Value::is_string));
            if !valid {
                return Err(ActionError::InvalidInput {
                    field: "copyWithoutRender".to_string(),
                    message: "copyWithoutRender must be an array of strings".to_string(),
                });
            }
        }

        let input: TemplateInput =
            serde_json::from_value(input.clone()).map_err(|err| ActionError::InvalidInput {
                field: "input".to_string(),
                message: err.to_string(),
            })?;

        if input.target_path.as_os_str().is_empty() {
            return Err(ActionError::InvalidInput {
                field: "targetPath".to_string(),
                message: "targetPath must not be empty".to_string(),
            });
        }

        Ok(input)
    }

    /// Every run starts from an empty target; refuse to merge into an
    /// existing populated destination.
    fn ensure_empty_target(dest: &Path, target_path: &Path) -> Result<()> {
        if !dest.exists() {
            return Ok(());
        }

        let occupied = !dest.is_dir() || fs::read_dir(dest)?.next().is_some();
        if occupied {
            return Err(ActionError::InvalidInput {
                field: "targetPath".to_string(),
                message: format!("target '{}' already exists and is not empty", target_path.display()),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Action for FetchTemplateAction {
    fn name(&self) -> &'static str {
        ACTION_NAME
    }

    async fn execute(&self, input: Value, context: ActionContext) -> Result<ActionOutput> {
        let input = Self::validate_input(&input)?;

        // Eager containment check: obviously-bad input fails before a
        // staging directory or fetch is even requested.
        let dest = tree::ensure_contained(&input.target_path, &context.workspace_root)?;
        Self::ensure_empty_target(&dest, &input.target_path)?;

        let matcher = match &input.copy_without_render {
            Some(patterns) => CopyMatcher::new(patterns)?,
            None => CopyMatcher::empty(),
        };

        let staging = tempfile::Builder::new()
            .prefix("imprint-staging-")
            .tempdir()?;
        debug!("Staging directory: {}", staging.path().display());

        info!("Fetching template source: {}", input.url);
        self.fetcher
            .fetch_contents(FetchRequest {
                base_url: context.base_url.clone(),
                fetch_url: input.url.clone(),
                output_path: staging.path().to_path_buf(),
            })
            .await?;

        let engine = TemplateEngine::new()?;
        let render_context = RenderContext::new(input.values);
        let copier = TreeCopier::new(
            &engine,
            &render_context,
            matcher,
            context.workspace_root.clone(),
        );

        let output_path = copier.copy_templated_contents(staging.path(), &dest)?;
        info!("Template rendered to {}", output_path.display());

        Ok(ActionOutput { output_path })
    }
}
