// ABOUTME: Main application orchestration for the imprint CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands::{self, RenderOptions};
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create an application from command line arguments, loading any
    /// configuration file they point at
    pub async fn from_args() -> Result<Self> {
        let args = Args::parse_args();
        let config = Config::load(args.config.as_deref()).await?;
        Ok(Self::new(config))
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting imprint v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        match args.command {
            Commands::Render {
                url,
                target,
                values,
                values_file,
                copy_without_render,
                workspace,
                base_url,
            } => {
                commands::render_template(
                    RenderOptions {
                        url,
                        target,
                        values,
                        values_file,
                        copy_without_render,
                        workspace,
                        base_url,
                    },
                    &self.config,
                )
                .await
            }
            Commands::Check { path } => commands::check_template(&path),
        }
    }
}
