//! Block operations for Notion API.

use std::collections::HashSet;

use tracing::{debug, info};

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{Block, BlockList};

/// Maximum page size accepted by the children endpoint.
const PAGE_SIZE: &str = "100";

impl NotionClient {
    /// Get all children of a block, following pagination cursors.
    ///
    /// The returned list is complete: `has_more` is `false` and
    /// `next_cursor` is `None`.
    pub(crate) fn get_block_children(&self, block_id: &str) -> Result<BlockList, NotionError> {
        let url = self.api_url(&["blocks", block_id, "children"]);

        info!("Getting children of block {}", block_id);

        let results = collect_pages(|cursor| {
            let mut query = vec![("page_size", PAGE_SIZE)];
            if let Some(start) = cursor {
                query.push(("start_cursor", start));
            }
            self.get_json(&url, &query)
        })?;

        info!("Found {} children of block {}", results.len(), block_id);
        Ok(BlockList::new(results))
    }
}

/// Concatenate every page of a cursor-paginated listing.
///
/// `fetch` receives the cursor to start from (`None` for the first page).
/// A cursor returned twice is an error, so a server that never advances
/// cannot keep the loop running.
fn collect_pages<F>(mut fetch: F) -> Result<Vec<Block>, NotionError>
where
    F: FnMut(Option<&str>) -> Result<BlockList, NotionError>,
{
    let mut results = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = fetch(cursor.as_deref())?;
        results.extend(page.results.unwrap_or_default());

        match page.next_cursor {
            Some(next) if page.has_more => {
                if !seen.insert(next.clone()) {
                    return Err(NotionError::RepeatedCursor { cursor: next });
                }
                debug!("Following cursor {}", next);
                cursor = Some(next);
            }
            _ => return Ok(results),
        }
    }
}
