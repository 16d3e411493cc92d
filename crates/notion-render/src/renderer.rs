//! Entry points for rendering Notion content.

use notion_api::{ContentSource, Page};
use tracing::{info, warn};

use crate::block::BlockRenderer;
use crate::error::RenderError;
use crate::options::{FetchPolicy, RenderOptions};
use crate::page::{breadcrumb_html, title_html};
use crate::walker::TreeWalker;

/// Renders Notion pages and block trees fetched from a [`ContentSource`].
///
/// In debug mode every fetch failure is returned as [`RenderError`]. Otherwise
/// failures are logged and the affected part renders as an empty string, so
/// the `Result` only ever carries an error in debug mode.
pub struct NotionRenderer<S> {
    source: S,
    blocks: BlockRenderer,
}

impl<S: ContentSource> NotionRenderer<S> {
    /// Create a renderer over a content source.
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self {
            source,
            blocks: BlockRenderer::new(options),
        }
    }

    /// Content source used for fetching.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Rendering options.
    pub fn options(&self) -> &RenderOptions {
        self.blocks.options()
    }

    /// Renderer for individual blocks.
    pub fn block_renderer(&self) -> &BlockRenderer {
        &self.blocks
    }

    fn policy(&self) -> FetchPolicy {
        self.options().fetch_policy()
    }

    fn fetch_page(&self, page_id: &str) -> Result<Page, RenderError> {
        self.source
            .page(page_id)
            .map_err(|err| RenderError::page(page_id, err))
    }

    /// Render every descendant of a block (or page) in document order.
    ///
    /// # Errors
    ///
    /// In debug mode, returns the first fetch failure, or a depth/cycle guard
    /// violation.
    pub fn render_blocks(&self, block_id: &str) -> Result<String, RenderError> {
        info!("Rendering blocks of {}", block_id);
        TreeWalker::new(&self.source, &self.blocks).render(block_id)
    }

    /// Render the page title as an `<h1>`.
    ///
    /// # Errors
    ///
    /// In debug mode, returns the page fetch failure.
    pub fn render_title(&self, page_id: &str) -> Result<String, RenderError> {
        let Some(page) = self.policy().recover(self.fetch_page(page_id))? else {
            return Ok(String::new());
        };
        Ok(title_html(&page, self.options().close_order))
    }

    /// Render a breadcrumb trail for a page: its parent page (if any) and
    /// the page itself.
    ///
    /// When the parent cannot be fetched the whole breadcrumb is empty, in
    /// either mode; a partial trail is never rendered.
    ///
    /// # Errors
    ///
    /// In debug mode, returns the failure to fetch the page itself.
    pub fn render_breadcrumb(&self, page_id: &str) -> Result<String, RenderError> {
        let Some(current) = self.policy().recover(self.fetch_page(page_id))? else {
            return Ok(String::new());
        };
        Ok(self.breadcrumb(&current))
    }

    /// Breadcrumb for an already fetched page. Only the parent is fetched.
    fn breadcrumb(&self, current: &Page) -> String {
        let parent = match current.parent_page_id() {
            Some(parent_id) => match self.fetch_page(parent_id) {
                Ok(parent) => Some(parent),
                Err(err) => {
                    warn!("{}; omitting breadcrumb for page {}", err, current.id);
                    return String::new();
                }
            },
            None => None,
        };

        let options = self.options();
        breadcrumb_html(
            current,
            parent.as_ref(),
            &options.page_href_prefix,
            options.close_order,
        )
    }

    /// Render a whole page: breadcrumb, title, then body blocks.
    ///
    /// # Errors
    ///
    /// In debug mode, returns the first failure of any part.
    pub fn render_page(&self, page_id: &str) -> Result<String, RenderError> {
        let mut out = String::new();
        if let Some(page) = self.policy().recover(self.fetch_page(page_id))? {
            out.push_str(&self.breadcrumb(&page));
            out.push_str(&title_html(&page, self.options().close_order));
        }
        out.push_str(&self.render_blocks(page_id)?);
        Ok(out)
    }
}
