//! Block rendering.
//!
//! Every block renders to an opening fragment and a closing fragment. Only
//! container blocks (tables) have a non-empty closing fragment; everything
//! else is rendered whole by the opening fragment.

use notion_api::{Block, BlockKind, RichText, TableRowBlock, TextBlock};
use tracing::debug;

use crate::options::RenderOptions;
use crate::rich_text::write_rich_texts;
use crate::util::escape_html;

// Page icon shown before child page links (Notion's "empty page" glyph)
const SVG_PAGE: &str = r#"<svg viewBox="0 0 30 30" class="notion_pageEmpty" style="width: 19.8px; height: 19.8px; fill: rgba(55, 53, 47, 0.8); flex-shrink: 0; backface-visibility: hidden;"><g> <path d="M16,1H4v28h22V11L16,1z M23.172,11H16V3.828L23.172,11z M24,27H6V3h8v10h10V27z"></path> </g></svg>"#;

/// Which half of a block to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// Markup emitted before the block's children.
    Open,
    /// Markup emitted after the block's children.
    Close,
}

/// Renders individual blocks to HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct BlockRenderer {
    options: RenderOptions,
}

impl BlockRenderer {
    /// Create a block renderer.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Rendering options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one fragment of a block.
    #[must_use]
    pub fn render(&self, block: &Block, fragment: Fragment) -> String {
        let mut out = String::new();
        self.write(block, fragment, &mut out);
        out
    }

    /// Render the opening fragment (the whole block for non-containers).
    #[must_use]
    pub fn render_open(&self, block: &Block) -> String {
        self.render(block, Fragment::Open)
    }

    /// Render the closing fragment (empty for non-containers).
    #[must_use]
    pub fn render_close(&self, block: &Block) -> String {
        self.render(block, Fragment::Close)
    }

    pub(crate) fn write(&self, block: &Block, fragment: Fragment, out: &mut String) {
        match fragment {
            Fragment::Open => self.write_open(block, out),
            Fragment::Close => Self::write_close(block, out),
        }
    }

    fn write_open(&self, block: &Block, out: &mut String) {
        match &block.kind {
            BlockKind::Heading1(text) => self.heading(1, text, out),
            BlockKind::Heading2(text) => self.heading(2, text, out),
            BlockKind::Heading3(text) => self.heading(3, text, out),
            BlockKind::Paragraph(text) => {
                if text.rich_text.is_empty() {
                    out.push_str("<br/>");
                } else {
                    out.push_str(r#"<p class="notion_paragraph">"#);
                    self.runs(&text.rich_text, out);
                    out.push_str("</p>");
                }
            }
            BlockKind::BulletedListItem(text) => self.list_item("ul", text, out),
            BlockKind::NumberedListItem(text) => self.list_item("ol", text, out),
            BlockKind::Table(_) => out.push_str(r#"<table class="table notion_table">"#),
            BlockKind::TableRow(row) => Self::table_row(row, out),
            BlockKind::Image(source) => {
                out.push_str(&format!(
                    r#"<div class="notion_img"><img class="img-fluid" src="{}"></div>"#,
                    escape_html(source.url())
                ));
            }
            BlockKind::Divider => out.push_str("<hr>"),
            BlockKind::ChildPage(child) => {
                let id = escape_html(&block.id);
                out.push_str(&format!(
                    r#"<span class="notion_child_page">{SVG_PAGE}<a class="notion_link_child_page" data-id="{id}" href="{}{id}">{}</a></span>"#,
                    escape_html(&self.options.page_href_prefix),
                    escape_html(&child.title)
                ));
            }
            BlockKind::Unsupported { block_type, raw } => {
                debug!("No renderer for block {} of type {:?}", block.id, block_type);
                if self.options.debug {
                    let dump =
                        serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
                    out.push_str(r#"<pre class="notion_debug">"#);
                    out.push_str(&escape_html(&dump));
                    out.push_str("</pre>");
                }
            }
        }
    }

    fn write_close(block: &Block, out: &mut String) {
        if let BlockKind::Table(_) = block.kind {
            out.push_str("</table>");
        }
    }

    fn runs(&self, runs: &[RichText], out: &mut String) {
        write_rich_texts(runs, self.options.close_order, out);
    }

    fn heading(&self, level: u8, text: &TextBlock, out: &mut String) {
        out.push_str(&format!(r#"<h{level} class="notion_h{level}">"#));
        self.runs(&text.rich_text, out);
        out.push_str(&format!("</h{level}>"));
    }

    fn list_item(&self, tag: &str, text: &TextBlock, out: &mut String) {
        out.push_str(&format!(r#"<{tag} class="notion_list"><li>"#));
        self.runs(&text.rich_text, out);
        out.push_str(&format!("</li></{tag}>"));
    }

    /// Cells contain only the plain text of `text` runs, without annotations.
    fn table_row(row: &TableRowBlock, out: &mut String) {
        out.push_str("<tr>");
        for cell in &row.cells {
            out.push_str("<td>");
            for run in cell.iter().filter(|run| run.is_text()) {
                out.push_str(&escape_html(&run.plain_text));
            }
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
}
