//! Error types for Notion API access.

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, body decoding, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error with a body that is not a Notion error object.
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Error object returned by the Notion API.
    #[error("Notion API error: {status} {code} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Machine-readable error code (e.g. `object_not_found`).
        code: String,
        /// Human-readable error message.
        message: String,
    },

    /// Paginated listing handed back a cursor it had already returned.
    #[error("Pagination cursor {cursor} repeated")]
    RepeatedCursor {
        /// Cursor seen twice.
        cursor: String,
    },

    /// JSON deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl NotionError {
    /// HTTP status code of the failed response, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::HttpRequest(_) | Self::RepeatedCursor { .. } | Self::Json(_) => None,
        }
    }
}
