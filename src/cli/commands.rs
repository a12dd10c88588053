// ABOUTME: Command implementations for the imprint CLI
// ABOUTME: Handles execution of the render and check commands

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::config::Config;
use crate::actions::{fetch_template, ActionContext, ActionRegistry};
use crate::fetch::LocalFetcher;
use crate::template::TemplateEngine;

pub struct RenderOptions {
    pub url: String,
    pub target: PathBuf,
    pub values: Vec<String>,
    pub values_file: Option<PathBuf>,
    pub copy_without_render: Vec<String>,
    pub workspace: Option<PathBuf>,
    pub base_url: Option<String>,
}

/// Execute the render command: build the action input from CLI options and
/// configuration, then run the fetch:template action.
pub async fn render_template(options: RenderOptions, config: &Config) -> Result<()> {
    let workspace_root = resolve_workspace(options.workspace, config)?;
    info!("Workspace root: {}", workspace_root.display());

    let values = collect_values(&options.values, options.values_file.as_deref(), config).await?;
    info!("Collected {} template values", values.len());

    let mut input = serde_json::json!({
        "url": options.url,
        "targetPath": options.target,
        "values": Value::Object(values),
    });
    if !options.copy_without_render.is_empty() {
        input["copyWithoutRender"] = serde_json::json!(options.copy_without_render);
    }

    let registry = ActionRegistry::with_builtins(Box::new(LocalFetcher::new()));
    let context = ActionContext::new(workspace_root)
        .with_base_url(options.base_url.or_else(|| config.base_url.clone()));

    let output = registry
        .execute(fetch_template::ACTION_NAME, input, context)
        .await?;

    info!("Rendered template into {}", output.output_path.display());
    println!("{}", output.output_path.display());
    Ok(())
}

/// Execute the check command: parse-validate every file name and file
/// content under a local template tree without writing any output.
pub fn check_template(path: &Path) -> Result<()> {
    let engine = TemplateEngine::new()?;
    let mut checked = 0usize;

    for entry in WalkDir::new(path).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(path)
            .expect("walked entry is under its own root");

        if let Some(name) = entry.file_name().to_str() {
            engine
                .validate(name)
                .with_context(|| format!("Invalid template name: {}", relative.display()))?;
        }

        if entry.file_type().is_file() {
            match std::fs::read_to_string(entry.path()) {
                Ok(content) => {
                    engine
                        .validate(&content)
                        .with_context(|| format!("Invalid template: {}", relative.display()))?;
                    checked += 1;
                }
                Err(_) => {
                    // Binary files cannot carry template expressions
                    warn!("Skipping non-text file: {}", relative.display());
                }
            }
        }
    }

    info!("Template check passed: {} files validated", checked);
    println!("ok: {checked} files validated");
    Ok(())
}

fn resolve_workspace(workspace: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let root = match workspace.or_else(|| config.workspace_root.clone()) {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    std::fs::canonicalize(&root)
        .with_context(|| format!("Workspace root does not exist: {}", root.display()))
}

async fn collect_values(
    pairs: &[String],
    values_file: Option<&Path>,
    config: &Config,
) -> Result<Map<String, Value>> {
    let mut values: Map<String, Value> = config
        .values
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if let Some(path) = values_file {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read values file {}", path.display()))?;
        let parsed: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse values file {}", path.display()))?;
        match parsed {
            Value::Object(map) => values.extend(map),
            _ => anyhow::bail!("Values file must contain a JSON object"),
        }
    }

    // Command-line pairs take precedence over file and config values
    values.extend(super::Args::parse_values(pairs)?);

    Ok(values)
}
