//! Render command implementations.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use notion_api::NotionClient;
use notion_config::{CliSettings, Config, RenderConfig};
use notion_render::{CloseOrder, NotionRenderer, RenderOptions};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// What to render for the given ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Blocks,
    Title,
    Breadcrumb,
    Page,
}

/// Arguments shared by all render commands.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Notion page or block ID.
    id: String,

    /// Path to configuration file (default: auto-discover notion.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integration token (overrides config).
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Notion-Version header value (overrides config).
    #[arg(long)]
    notion_version: Option<String>,

    /// Abort on the first fetch error and dump unsupported blocks.
    #[arg(long)]
    debug: bool,

    /// Maximum block nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Close annotation tags in reverse order (well-formed nesting).
    #[arg(long)]
    nested_annotations: bool,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (log every API request).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute a render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, rendering fails in debug
    /// mode, or the output cannot be written.
    pub(crate) fn execute(self, target: Target) -> Result<(), CliError> {
        let output = Output::new();

        // Flags only override the config when given
        let cli_settings = CliSettings {
            token: self.token,
            version: self.notion_version,
            debug: self.debug.then_some(true),
            max_depth: self.max_depth,
            nested_annotations: self.nested_annotations.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let token = config.require_token()?;
        match &config.config_path {
            Some(path) => info!("Using config {}", path.display()),
            None => info!("No notion.toml found, using defaults"),
        }
        info!("Rendering {:?} for {}", target, self.id);

        let client = NotionClient::from_config(
            &config.notion.base_url,
            token,
            &config.notion.version,
            Duration::from_secs(config.notion.timeout_secs),
        );
        let renderer = NotionRenderer::new(client, render_options(&config.render));

        let html = match target {
            Target::Blocks => renderer.render_blocks(&self.id)?,
            Target::Title => renderer.render_title(&self.id)?,
            Target::Breadcrumb => renderer.render_breadcrumb(&self.id)?,
            Target::Page => renderer.render_page(&self.id)?,
        };

        if html.is_empty() && !config.render.debug {
            output.warning("Nothing was rendered. Run with --debug to see fetch errors.");
        }

        match self.output {
            Some(path) => {
                std::fs::write(&path, &html)?;
                output.success(&format!("Wrote {} bytes to {}", html.len(), path.display()));
            }
            None => output.html(&html)?,
        }

        Ok(())
    }
}

/// Map file configuration to renderer options.
fn render_options(config: &RenderConfig) -> RenderOptions {
    RenderOptions {
        debug: config.debug,
        max_depth: config.max_depth,
        page_href_prefix: config.page_href_prefix.clone(),
        close_order: if config.nested_annotations {
            CloseOrder::Nested
        } else {
            CloseOrder::Declared
        },
    }
}
