//! Notion REST API client.
//!
//! Provides a sync HTTP client for the Notion public API with bearer token
//! authentication. Every request carries the same header set:
//! `Authorization`, `Accept`, `Notion-Version` and `Content-Type`.

mod blocks;
mod pages;

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::NotionError;
use crate::source::ContentSource;
use crate::types::{ApiErrorBody, BlockList, Page};

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Characters escaped in ID path segments. Notion IDs are hex with dashes.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    token: String,
    version: String,
}

impl NotionClient {
    /// Create a client for the public Notion API with the default timeout.
    ///
    /// # Arguments
    /// * `token` - Integration token
    /// * `version` - Value of the `Notion-Version` header (e.g. `2022-06-28`)
    #[must_use]
    pub fn new(token: &str, version: &str) -> Self {
        Self::from_config(
            DEFAULT_BASE_URL,
            token,
            version,
            Duration::from_secs(DEFAULT_TIMEOUT),
        )
    }

    /// Create client from config values.
    ///
    /// # Arguments
    /// * `base_url` - API base URL including the version path (`.../v1`)
    /// * `token` - Integration token
    /// * `version` - Value of the `Notion-Version` header
    /// * `timeout` - Global per-request timeout
    #[must_use]
    pub fn from_config(base_url: &str, token: &str, version: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
            version: version.to_owned(),
        }
    }

    /// Build an API URL from path segments, escaping each segment.
    fn api_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    /// Issue an authenticated GET and decode the JSON response.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NotionError> {
        debug!("GET {}", url);

        let mut request = self
            .agent
            .get(url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .header("Notion-Version", &self.version)
            .header("Content-Type", "application/json");
        for (key, value) in query {
            request = request.query(key, value);
        }
        let response = request.call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(response_error(status, error_body));
        }

        Ok(body_reader.read_json()?)
    }
}

/// Map a failed response to the most specific error.
fn response_error(status: u16, body: String) -> NotionError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api) if api.object == "error" => NotionError::Api {
            status,
            code: api.code,
            message: api.message,
        },
        _ => NotionError::HttpResponse { status, body },
    }
}

impl ContentSource for NotionClient {
    fn block_children(&self, block_id: &str) -> Result<BlockList, NotionError> {
        self.get_block_children(block_id)
    }

    fn page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.get_page(page_id)
    }
}
