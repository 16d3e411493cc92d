//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing renderers without network access.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use serde_json::{Value, json};

use crate::error::NotionError;
use crate::source::ContentSource;
use crate::types::{BlockList, Page};

/// Mock content source for testing.
///
/// Stores block children and pages as raw JSON, decoded on every fetch the
/// same way API responses are. Every call is recorded so tests can assert
/// which fetches happened.
///
/// # Example
///
/// ```ignore
/// use notion_api::{ContentSource, MockSource};
/// use serde_json::json;
///
/// let source = MockSource::new()
///     .with_blocks("root", vec![json!({"id": "d", "type": "divider"})])
///     .with_page("root", json!({"id": "root"}));
///
/// let children = source.block_children("root").unwrap();
/// assert_eq!(source.calls(), vec!["children:root"]);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    children: RwLock<HashMap<String, Value>>,
    pages: RwLock<HashMap<String, Value>>,
    failures: RwLock<HashSet<String>>,
    calls: RwLock<Vec<String>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw children response for a block.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_children(self, block_id: impl Into<String>, response: Value) -> Self {
        self.children
            .write()
            .unwrap()
            .insert(block_id.into(), response);
        self
    }

    /// Set the children of a block as a complete `results` list.
    #[must_use]
    pub fn with_blocks(self, block_id: impl Into<String>, blocks: Vec<Value>) -> Self {
        self.with_children(
            block_id,
            json!({"object": "list", "results": blocks, "next_cursor": null, "has_more": false}),
        )
    }

    /// Set the raw page response for a page.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page_id: impl Into<String>, page: Value) -> Self {
        self.pages.write().unwrap().insert(page_id.into(), page);
        self
    }

    /// Make every fetch of this ID fail with a server error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, id: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(id.into());
        self
    }

    /// Recorded calls, as `children:<id>` or `page:<id>`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.write().unwrap().push(call);
    }

    fn check_failure(&self, id: &str) -> Result<(), NotionError> {
        if self.failures.read().unwrap().contains(id) {
            return Err(NotionError::HttpResponse {
                status: 500,
                body: "mock failure".to_owned(),
            });
        }
        Ok(())
    }
}

fn not_found(id: &str) -> NotionError {
    NotionError::Api {
        status: 404,
        code: "object_not_found".to_owned(),
        message: format!("Could not find object with ID: {id}"),
    }
}

impl ContentSource for MockSource {
    fn block_children(&self, block_id: &str) -> Result<BlockList, NotionError> {
        self.record(format!("children:{block_id}"));
        self.check_failure(block_id)?;
        let response = self
            .children
            .read()
            .unwrap()
            .get(block_id)
            .cloned()
            .ok_or_else(|| not_found(block_id))?;
        Ok(serde_json::from_value(response)?)
    }

    fn page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.record(format!("page:{page_id}"));
        self.check_failure(page_id)?;
        let page = self
            .pages
            .read()
            .unwrap()
            .get(page_id)
            .cloned()
            .ok_or_else(|| not_found(page_id))?;
        Ok(serde_json::from_value(page)?)
    }
}
