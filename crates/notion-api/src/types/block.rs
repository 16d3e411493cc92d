//! Notion block types.
//!
//! A block arrives as a JSON object whose `type` field names a sibling key
//! holding the type-specific payload:
//!
//! ```json
//! {"id": "…", "type": "heading_1", "has_children": false, "heading_1": {"rich_text": […]}}
//! ```
//!
//! [`Block`] decodes this into a closed [`BlockKind`] enum. Types without a
//! variant, and known types whose payload does not match the expected shape,
//! become [`BlockKind::Unsupported`] carrying the raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::rich_text::RichText;

/// A node of Notion content.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block ID.
    pub id: String,
    /// Whether the block has nested child blocks.
    pub has_children: bool,
    /// Type tag with its payload.
    pub kind: BlockKind,
}

/// Block type with its type-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// `heading_1`.
    Heading1(TextBlock),
    /// `heading_2`.
    Heading2(TextBlock),
    /// `heading_3`.
    Heading3(TextBlock),
    /// `paragraph`.
    Paragraph(TextBlock),
    /// `bulleted_list_item`, rendered as its own single-item list.
    BulletedListItem(TextBlock),
    /// `numbered_list_item`, rendered as its own single-item list.
    NumberedListItem(TextBlock),
    /// `table`; rows arrive as its children.
    Table(TableBlock),
    /// `table_row`, one rich-text list per cell.
    TableRow(TableRowBlock),
    /// `image`, hosted by Notion or external.
    Image(FileObject),
    /// `divider`.
    Divider,
    /// `child_page`, a link to a nested page.
    ChildPage(ChildPageBlock),
    /// Block without a renderer.
    Unsupported {
        /// Original `type` tag.
        block_type: String,
        /// Whole block as received.
        raw: Value,
    },
}

impl BlockKind {
    /// API type tag of this kind.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Heading1(_) => "heading_1",
            Self::Heading2(_) => "heading_2",
            Self::Heading3(_) => "heading_3",
            Self::Paragraph(_) => "paragraph",
            Self::BulletedListItem(_) => "bulleted_list_item",
            Self::NumberedListItem(_) => "numbered_list_item",
            Self::Table(_) => "table",
            Self::TableRow(_) => "table_row",
            Self::Image(_) => "image",
            Self::Divider => "divider",
            Self::ChildPage(_) => "child_page",
            Self::Unsupported { block_type, .. } => block_type,
        }
    }
}

/// Payload of text-bearing blocks (headings, paragraphs, list items).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextBlock {
    /// Text runs. API versions up to 2021-08-16 name this field `text`.
    #[serde(default, alias = "text")]
    pub rich_text: Vec<RichText>,
    /// Block color.
    #[serde(default)]
    pub color: Option<String>,
}

/// Payload of a `table` block. Rows are its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableBlock {
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

/// Payload of a `table_row` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableRowBlock {
    /// One sequence of runs per cell.
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

/// File reference used by media blocks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    /// File hosted outside Notion.
    External { external: ExternalFile },
    /// File uploaded to Notion.
    File { file: HostedFile },
}

impl FileObject {
    /// URL of the file, whichever kind it is.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::External { external } => &external.url,
            Self::File { file } => &file.url,
        }
    }
}

/// Externally hosted file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExternalFile {
    pub url: String,
}

/// Notion-hosted file with a temporary signed URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostedFile {
    pub url: String,
    /// When the signed URL stops working (ISO 8601).
    #[serde(default)]
    pub expiry_time: Option<String>,
}

/// Payload of a `child_page` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChildPageBlock {
    #[serde(default)]
    pub title: String,
}

impl Block {
    /// Decode a block from its JSON representation.
    ///
    /// Fails only when the value is not an object or has no string `id`;
    /// every other shape problem yields [`BlockKind::Unsupported`].
    ///
    /// # Errors
    ///
    /// Returns a message describing the missing field.
    pub fn from_value(raw: Value) -> Result<Self, String> {
        let Some(object) = raw.as_object() else {
            return Err("block must be a JSON object".to_owned());
        };
        let id = object
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| "block is missing string field `id`".to_owned())?
            .to_owned();
        let has_children = object
            .get("has_children")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let block_type = object
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let kind = match parse_kind(&block_type, &raw) {
            Ok(Some(kind)) => kind,
            Ok(None) => BlockKind::Unsupported { block_type, raw },
            Err(err) => {
                warn!("Malformed {} payload in block {}: {}", block_type, id, err);
                BlockKind::Unsupported { block_type, raw }
            }
        };

        Ok(Self {
            id,
            has_children,
            kind,
        })
    }
}

/// Decode the payload for a known type; `None` for unknown types.
fn parse_kind(block_type: &str, raw: &Value) -> Result<Option<BlockKind>, serde_json::Error> {
    let payload = || raw.get(block_type).cloned().unwrap_or(Value::Null);
    let text = || serde_json::from_value::<TextBlock>(payload());

    let kind = match block_type {
        "heading_1" => BlockKind::Heading1(text()?),
        "heading_2" => BlockKind::Heading2(text()?),
        "heading_3" => BlockKind::Heading3(text()?),
        "paragraph" => BlockKind::Paragraph(text()?),
        "bulleted_list_item" => BlockKind::BulletedListItem(text()?),
        "numbered_list_item" => BlockKind::NumberedListItem(text()?),
        "table" => BlockKind::Table(serde_json::from_value(payload())?),
        "table_row" => BlockKind::TableRow(serde_json::from_value(payload())?),
        "image" => BlockKind::Image(serde_json::from_value(payload())?),
        "divider" => BlockKind::Divider,
        "child_page" => BlockKind::ChildPage(serde_json::from_value(payload())?),
        _ => return Ok(None),
    };
    Ok(Some(kind))
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(serde::de::Error::custom)
    }
}
