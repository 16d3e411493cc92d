//! HTML renderer for Notion block trees.
//!
//! This crate turns content fetched through a [`notion_api::ContentSource`]
//! into HTML fragments for embedding in a page.
//!
//! # Architecture
//!
//! - [`render_rich_text`]: one annotated text run (bold, italic, color, link)
//! - [`BlockRenderer`]: one block, split into [`Fragment::Open`] and
//!   [`Fragment::Close`] so container blocks can wrap their children
//! - [`NotionRenderer`]: entry points that fetch and walk the tree
//!   (`render_blocks`), and render page metadata (`render_title`,
//!   `render_breadcrumb`)
//!
//! All interpolated text and attribute values are HTML-escaped.
//!
//! # Example
//!
//! ```ignore
//! use notion_api::NotionClient;
//! use notion_render::{NotionRenderer, RenderOptions};
//!
//! let client = NotionClient::new("secret_xxx", "2022-06-28");
//! let renderer = NotionRenderer::new(client, RenderOptions::default());
//! let html = renderer.render_blocks("0c5d7d4e-...")?;
//! ```

mod block;
mod error;
mod options;
mod page;
mod renderer;
mod rich_text;
mod util;
mod walker;

pub use block::{BlockRenderer, Fragment};
pub use error::RenderError;
pub use options::{DEFAULT_MAX_DEPTH, FetchPolicy, RenderOptions};
pub use renderer::NotionRenderer;
pub use rich_text::{CloseOrder, render_rich_text, render_rich_texts};
pub use util::escape_html;
