//! Notion page types.

use std::collections::HashMap;

use serde::Deserialize;

use super::rich_text::RichText;

/// Notion page metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Page properties keyed by property name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
    /// Containing object.
    #[serde(default)]
    pub parent: Parent,
    /// Public Notion URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// Value of a page property.
///
/// Only the `title` shape is decoded; other property types keep their
/// type tag and nothing else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyValue {
    /// Property type (`title`, `rich_text`, `number`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Title runs, present when `kind` is `title`.
    #[serde(default)]
    pub title: Vec<RichText>,
}

/// Reference to the object containing a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    /// Nested inside another page.
    PageId { page_id: String },
    /// Row of a database.
    DatabaseId { database_id: String },
    /// Nested inside a block.
    BlockId { block_id: String },
    /// Top-level workspace page.
    Workspace,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Page {
    /// Runs making up the displayed title.
    ///
    /// Regular pages name the title property `title`; database rows use the
    /// database's own column name, so any property of type `title` is
    /// accepted.
    #[must_use]
    pub fn title(&self) -> &[RichText] {
        self.properties
            .get("title")
            .filter(|p| p.kind == "title")
            .or_else(|| self.properties.values().find(|p| p.kind == "title"))
            .map(|p| p.title.as_slice())
            .unwrap_or_default()
    }

    /// Title as plain text.
    #[must_use]
    pub fn title_text(&self) -> String {
        self.title().iter().map(|t| t.plain_text.as_str()).collect()
    }

    /// ID of the parent page, when the parent is a page.
    #[must_use]
    pub fn parent_page_id(&self) -> Option<&str> {
        match &self.parent {
            Parent::PageId { page_id } => Some(page_id),
            _ => None,
        }
    }
}
