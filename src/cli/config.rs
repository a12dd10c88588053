// ABOUTME: Configuration management for the imprint application
// ABOUTME: Handles loading settings and default values from an optional YAML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Workspace root all rendered output must stay inside; defaults to the
    /// current directory when unset here and on the command line
    #[serde(default)]
    pub workspace_root: Option<PathBuf>,

    /// Base for resolving relative template source locators
    #[serde(default)]
    pub base_url: Option<String>,

    /// Default template values, overridden by values given on the command line
    #[serde(default)]
    pub values: HashMap<String, serde_json::Value>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "full".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, or defaults when no file is given
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Merge values on top of the configured defaults
    pub fn merge_values(&mut self, values: HashMap<String, serde_json::Value>) {
        self.values.extend(values);
    }
}
