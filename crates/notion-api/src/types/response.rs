//! Response envelopes.

use serde::Deserialize;

use super::block::Block;

/// Paginated list of child blocks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockList {
    /// Blocks in document order. Absent means no children.
    #[serde(default)]
    pub results: Option<Vec<Block>>,
    /// Cursor for the next page of results.
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Whether more results are available after `next_cursor`.
    #[serde(default)]
    pub has_more: bool,
}

impl BlockList {
    /// Create a complete (single page) list.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            results: Some(blocks),
            next_cursor: None,
            has_more: false,
        }
    }

    /// Blocks in document order; empty when `results` is absent.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Whether the list holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks().is_empty()
    }
}

/// Error object returned by the Notion API with a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Always `"error"`.
    pub object: String,
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_results_is_empty() {
        let list: BlockList = serde_json::from_value(json!({"object": "list"})).unwrap();
        assert!(list.results.is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_null_results_is_empty() {
        let list: BlockList = serde_json::from_value(json!({"results": null})).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_pagination_fields() {
        let list: BlockList = serde_json::from_value(json!({
            "object": "list",
            "results": [{"id": "b1", "type": "divider", "divider": {}}],
            "next_cursor": "cursor-2",
            "has_more": true
        }))
        .unwrap();
        assert_eq!(list.blocks().len(), 1);
        assert_eq!(list.next_cursor.as_deref(), Some("cursor-2"));
        assert!(list.has_more);
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody = serde_json::from_value(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find block"
        }))
        .unwrap();
        assert_eq!(body.object, "error");
        assert_eq!(body.code, "object_not_found");
    }
}
