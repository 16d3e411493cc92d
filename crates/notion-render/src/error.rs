//! Render error types.

use notion_api::NotionError;

/// Error that aborts a render in strict mode.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Fetching content from the API failed.
    #[error("failed to fetch {what} {id}: {source}")]
    Fetch {
        /// What was being fetched (`children of block`, `page`).
        what: &'static str,
        /// Block or page ID.
        id: String,
        /// Underlying API error.
        #[source]
        source: NotionError,
    },

    /// Block nesting went deeper than the configured limit.
    #[error("block {block_id} is nested deeper than {max_depth} levels")]
    DepthExceeded {
        /// Block whose children were not rendered.
        block_id: String,
        /// Configured limit.
        max_depth: usize,
    },

    /// A block appeared again below itself.
    #[error("block {block_id} was already rendered in this tree")]
    Cycle {
        /// Repeated block ID.
        block_id: String,
    },
}

impl RenderError {
    pub(crate) fn children(id: &str, source: NotionError) -> Self {
        Self::Fetch {
            what: "children of block",
            id: id.to_owned(),
            source,
        }
    }

    pub(crate) fn page(id: &str, source: NotionError) -> Self {
        Self::Fetch {
            what: "page",
            id: id.to_owned(),
            source,
        }
    }
}
