//! notion-html CLI - render Notion content to embeddable HTML.
//!
//! Provides commands for:
//! - `blocks`: Render the block tree below a page or block
//! - `title`: Render a page title
//! - `breadcrumb`: Render a page breadcrumb trail
//! - `page`: Render breadcrumb, title and body of a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, Target};
use output::Output;

/// notion-html - Render Notion content to embeddable HTML.
#[derive(Parser)]
#[command(name = "notion-html", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the block tree below a page or block.
    Blocks(RenderArgs),
    /// Render a page title as <h1>.
    Title(RenderArgs),
    /// Render a breadcrumb trail (parent page and current page).
    Breadcrumb(RenderArgs),
    /// Render breadcrumb, title and body of a page.
    Page(RenderArgs),
}

impl Commands {
    fn into_parts(self) -> (Target, RenderArgs) {
        match self {
            Self::Blocks(args) => (Target::Blocks, args),
            Self::Title(args) => (Target::Title, args),
            Self::Breadcrumb(args) => (Target::Breadcrumb, args),
            Self::Page(args) => (Target::Page, args),
        }
    }
}

/// `RUST_LOG` when set and valid, otherwise WARN.
fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();
    let (target, args) = cli.command.into_parts();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        default_filter()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = args.execute(target) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
