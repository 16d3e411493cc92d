//! Rich text runs.

use serde::{Deserialize, Serialize};

/// Color value meaning "no color styling".
const DEFAULT_COLOR: &str = "default";

/// One inline span of annotated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RichText {
    /// Run type (`text`, `mention`, `equation`).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Text content without formatting.
    #[serde(default)]
    pub plain_text: String,
    /// Link target, if any.
    #[serde(default)]
    pub href: Option<String>,
    /// Formatting flags.
    #[serde(default)]
    pub annotations: Option<Annotations>,
}

impl RichText {
    /// Create an unannotated `text` run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_owned(),
            plain_text: text.into(),
            href: None,
            annotations: None,
        }
    }

    /// Attach annotations to this run.
    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Attach a link to this run.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Whether this is a plain `text` run (as opposed to a mention or equation).
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == "text"
    }

    /// Link target, ignoring empty strings.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }
}

/// Formatting flags of a rich text run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    /// Color name, `"default"` for none.
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: DEFAULT_COLOR.to_owned(),
        }
    }
}

impl Annotations {
    /// Non-default color, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        Some(self.color.as_str()).filter(|c| !c.is_empty() && *c != DEFAULT_COLOR)
    }
}
