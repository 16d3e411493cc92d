//! Page operations for Notion API.

use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::Page;

impl NotionClient {
    /// Get page metadata by ID.
    pub(crate) fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = self.api_url(&["pages", page_id]);

        info!("Getting page {}", page_id);

        self.get_json(&url, &[])
    }
}
