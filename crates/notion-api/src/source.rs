//! Content source abstraction.

use crate::error::NotionError;
use crate::types::{BlockList, Page};

/// Read access to Notion content.
///
/// Renderers depend on this trait rather than on [`crate::NotionClient`], so
/// rendering can be tested without network access.
pub trait ContentSource {
    /// Fetch the children of a block (or page) in document order.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the request fails or the response cannot be
    /// decoded.
    fn block_children(&self, block_id: &str) -> Result<BlockList, NotionError>;

    /// Fetch page metadata (title properties and parent reference).
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the request fails or the response cannot be
    /// decoded.
    fn page(&self, page_id: &str) -> Result<Page, NotionError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn block_children(&self, block_id: &str) -> Result<BlockList, NotionError> {
        (**self).block_children(block_id)
    }

    fn page(&self, page_id: &str) -> Result<Page, NotionError> {
        (**self).page(page_id)
    }
}
