//! Page title and breadcrumb markup.

use notion_api::Page;

use crate::rich_text::{CloseOrder, write_rich_texts};
use crate::util::escape_html;

/// `<h1>` with the page title.
pub(crate) fn title_html(page: &Page, order: CloseOrder) -> String {
    let mut out = String::from("<h1>");
    write_rich_texts(page.title(), order, &mut out);
    out.push_str("</h1>");
    out
}

/// Breadcrumb nav with an optional linked parent item before the active
/// current-page item.
pub(crate) fn breadcrumb_html(
    current: &Page,
    parent: Option<&Page>,
    href_prefix: &str,
    order: CloseOrder,
) -> String {
    let mut out = String::from(r#"<nav aria-label="breadcrumb"><ol class="breadcrumb">"#);

    if let Some(parent) = parent {
        out.push_str(&format!(
            r#"<li class="breadcrumb-item"><a href="{}{}">"#,
            escape_html(href_prefix),
            escape_html(&parent.id)
        ));
        write_rich_texts(parent.title(), order, &mut out);
        out.push_str("</a></li>");
    }

    out.push_str(r#"<li class="breadcrumb-item active" aria-current="page">"#);
    write_rich_texts(current.title(), order, &mut out);
    out.push_str("</li>");

    out.push_str("</ol></nav>");
    out
}
