//! Inline rich text rendering.
//!
//! A run is rendered as: annotation opening tags, optional `<a>`, escaped
//! text, optional `</a>`, annotation closing tags. Annotations open in a fixed
//! order: color, bold, italic, strikethrough, underline.

use notion_api::{Annotations, RichText};

use crate::util::escape_html;

/// Order in which annotation closing tags are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloseOrder {
    /// Same order as opening. Matches the markup produced by existing Notion
    /// embeds, but is not well-formed when bold is combined with a span.
    #[default]
    Declared,
    /// Reverse order of opening (well-formed nesting).
    Nested,
}

/// Render a single rich text run to HTML.
#[must_use]
pub fn render_rich_text(run: &RichText, order: CloseOrder) -> String {
    let mut out = String::new();
    write_rich_text(run, order, &mut out);
    out
}

/// Render a sequence of runs, concatenated in order.
#[must_use]
pub fn render_rich_texts(runs: &[RichText], order: CloseOrder) -> String {
    let mut out = String::new();
    write_rich_texts(runs, order, &mut out);
    out
}

pub(crate) fn write_rich_texts(runs: &[RichText], order: CloseOrder, out: &mut String) {
    for run in runs {
        write_rich_text(run, order, out);
    }
}

pub(crate) fn write_rich_text(run: &RichText, order: CloseOrder, out: &mut String) {
    let tags = run
        .annotations
        .as_ref()
        .map(annotation_tags)
        .unwrap_or_default();

    for (open, _) in &tags {
        out.push_str(open);
    }

    let link = run.link();
    if let Some(href) = link {
        out.push_str(&format!(r#"<a href="{}">"#, escape_html(href)));
    }
    out.push_str(&escape_html(&run.plain_text));
    if link.is_some() {
        out.push_str("</a>");
    }

    match order {
        CloseOrder::Declared => tags.iter().for_each(|(_, close)| out.push_str(close)),
        CloseOrder::Nested => tags.iter().rev().for_each(|(_, close)| out.push_str(close)),
    }
}

/// Opening and closing tag pairs for the active annotations, in declared order.
fn annotation_tags(annotations: &Annotations) -> Vec<(String, &'static str)> {
    let mut tags = Vec::new();
    if let Some(color) = annotations.color() {
        let color = escape_html(color);
        tags.push((
            format!(r#"<span class="notion_color {color}" style="color:{color};">"#),
            "</span>",
        ));
    }
    if annotations.bold {
        tags.push(("<strong>".to_owned(), "</strong>"));
    }
    if annotations.italic {
        tags.push((r#"<span style="font-style:italic;">"#.to_owned(), "</span>"));
    }
    if annotations.strikethrough {
        tags.push((
            r#"<span style="text-decoration:line-through;">"#.to_owned(),
            "</span>",
        ));
    }
    if annotations.underline {
        tags.push((
            r#"<span style="border-bottom: 0.05em solid">"#.to_owned(),
            "</span>",
        ));
    }
    tags
}
