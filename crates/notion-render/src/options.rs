//! Rendering options.

use tracing::warn;

use crate::error::RenderError;
use crate::rich_text::CloseOrder;

/// Default maximum nesting depth followed by the tree walker.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Options fixed at renderer construction.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Debug mode: fetch failures abort the render ([`FetchPolicy::Strict`])
    /// and unsupported blocks are dumped as `<pre>` diagnostics.
    pub debug: bool,
    /// Maximum nesting depth below the rendered block.
    pub max_depth: usize,
    /// Prefix for links to other pages; the page ID is appended.
    pub page_href_prefix: String,
    /// Annotation close order.
    pub close_order: CloseOrder,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            debug: false,
            max_depth: DEFAULT_MAX_DEPTH,
            page_href_prefix: "?page_id=".to_owned(),
            close_order: CloseOrder::Declared,
        }
    }
}

impl RenderOptions {
    /// Failure policy implied by the debug flag.
    #[must_use]
    pub fn fetch_policy(&self) -> FetchPolicy {
        if self.debug {
            FetchPolicy::Strict
        } else {
            FetchPolicy::Lenient
        }
    }
}

/// What to do when part of a render fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Abort the whole render with the error.
    Strict,
    /// Log the error and render the affected part as nothing.
    Lenient,
}

impl FetchPolicy {
    /// Apply the policy to a partial result.
    ///
    /// `Ok(None)` means the failure was suppressed and the caller should
    /// render nothing for this part.
    pub(crate) fn recover<T>(
        self,
        result: Result<T, RenderError>,
    ) -> Result<Option<T>, RenderError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) => match self {
                Self::Strict => Err(err),
                Self::Lenient => {
                    warn!("{}; rendering nothing in its place", err);
                    Ok(None)
                }
            },
        }
    }
}
