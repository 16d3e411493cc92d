//! Notion REST API models and client.
//!
//! This crate provides:
//! - Typed models for the parts of the Notion API the renderer reads:
//!   [`Block`], [`RichText`], [`Page`] and the [`BlockList`] pagination envelope
//! - The [`ContentSource`] trait, the seam between rendering and transport
//! - [`NotionClient`], a sync `ureq` implementation of [`ContentSource`]
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use notion_api::{ContentSource, NotionClient};
//!
//! let client = NotionClient::new("secret_xxx", "2022-06-28");
//! let children = client.block_children("0c5d7d4e-...")?;
//! for block in children.blocks() {
//!     println!("{} {}", block.id, block.kind.type_name());
//! }
//! ```

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod types;

pub use client::NotionClient;
pub use error::NotionError;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::ContentSource;
pub use types::{
    Annotations, ApiErrorBody, Block, BlockKind, BlockList, ChildPageBlock, ExternalFile,
    FileObject, HostedFile, Page, Parent, PropertyValue, RichText, TableBlock, TableRowBlock,
    TextBlock,
};
