// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for imprint

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imprint")]
#[command(about = "A directory-tree templating engine for rendering project scaffolding")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template source tree into the workspace
    Render {
        #[arg(help = "Template source URL or local path")]
        url: String,

        #[arg(help = "Destination path, relative to the workspace root")]
        target: PathBuf,

        #[arg(
            short = 'V',
            long = "value",
            help = "Template values (key=value, value parsed as JSON when possible)"
        )]
        values: Vec<String>,

        #[arg(long, help = "JSON file with template values")]
        values_file: Option<PathBuf>,

        #[arg(
            long = "copy-without-render",
            help = "Glob pattern copied verbatim, repeatable"
        )]
        copy_without_render: Vec<String>,

        #[arg(short, long, help = "Workspace root (defaults to current directory)")]
        workspace: Option<PathBuf>,

        #[arg(long, help = "Base for resolving relative source locators")]
        base_url: Option<String>,
    },

    /// Validate template expressions across a local template tree
    Check {
        #[arg(help = "Path to the template tree to check")]
        path: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse values from key=value format. The value side is parsed as JSON
    /// when it is valid JSON, so `count=1234` arrives as a number and
    /// `items=["a","b"]` as a list; everything else stays a plain string.
    pub fn parse_values(pairs: &[String]) -> anyhow::Result<Map<String, Value>> {
        let mut values = Map::new();

        for pair in pairs {
            if let Some((key, raw)) = pair.split_once('=') {
                let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
                values.insert(key.to_string(), value);
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid value format '{}'. Expected 'key=value'",
                    pair
                ));
            }
        }

        Ok(values)
    }
}
