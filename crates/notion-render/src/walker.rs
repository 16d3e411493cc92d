//! Recursive block tree rendering.

use std::collections::HashSet;

use notion_api::{Block, ContentSource};
use tracing::debug;

use crate::block::{BlockRenderer, Fragment};
use crate::error::RenderError;
use crate::options::FetchPolicy;

/// Walks the children of one block, fetching and rendering depth-first.
///
/// A walker lives for a single render call; the visited set is never shared.
pub(crate) struct TreeWalker<'a, S> {
    source: &'a S,
    blocks: &'a BlockRenderer,
    policy: FetchPolicy,
    visited: HashSet<String>,
}

impl<'a, S: ContentSource> TreeWalker<'a, S> {
    pub(crate) fn new(source: &'a S, blocks: &'a BlockRenderer) -> Self {
        Self {
            source,
            blocks,
            policy: blocks.options().fetch_policy(),
            visited: HashSet::new(),
        }
    }

    /// Render all descendants of `block_id` in document order.
    pub(crate) fn render(mut self, block_id: &str) -> Result<String, RenderError> {
        let mut out = String::new();
        self.walk(block_id, 0, &mut out)?;
        Ok(out)
    }

    fn walk(&mut self, block_id: &str, depth: usize, out: &mut String) -> Result<(), RenderError> {
        let fetched = self.fetch(block_id, depth);
        let Some(children) = self.policy.recover(fetched)? else {
            return Ok(());
        };
        if children.is_empty() {
            debug!("Block {} has no children", block_id);
            return Ok(());
        }

        for block in &children {
            self.blocks.write(block, Fragment::Open, out);
            if block.has_children {
                self.walk(&block.id, depth + 1, out)?;
            }
            self.blocks.write(block, Fragment::Close, out);
        }
        Ok(())
    }

    /// Check the guards, then fetch the children of a block.
    fn fetch(&mut self, block_id: &str, depth: usize) -> Result<Vec<Block>, RenderError> {
        let max_depth = self.blocks.options().max_depth;
        if depth >= max_depth {
            return Err(RenderError::DepthExceeded {
                block_id: block_id.to_owned(),
                max_depth,
            });
        }
        if !self.visited.insert(block_id.to_owned()) {
            return Err(RenderError::Cycle {
                block_id: block_id.to_owned(),
            });
        }

        let list = self
            .source
            .block_children(block_id)
            .map_err(|err| RenderError::children(block_id, err))?;
        Ok(list.results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use notion_api::MockSource;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn paragraph(id: &str, text: &str) -> Value {
        json!({
            "id": id,
            "type": "paragraph",
            "has_children": false,
            "paragraph": {"rich_text": [{"type": "text", "plain_text": text}]}
        })
    }

    fn bullet(id: &str, text: &str, has_children: bool) -> Value {
        json!({
            "id": id,
            "type": "bulleted_list_item",
            "has_children": has_children,
            "bulleted_list_item": {"rich_text": [{"type": "text", "plain_text": text}]}
        })
    }

    fn render(
        source: &MockSource,
        options: RenderOptions,
        id: &str,
    ) -> Result<String, RenderError> {
        let blocks = BlockRenderer::new(options);
        TreeWalker::new(source, &blocks).render(id)
    }

    fn strict() -> RenderOptions {
        RenderOptions {
            debug: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_flat_children_in_order() {
        let source = MockSource::new().with_blocks(
            "root",
            vec![
                paragraph("a", "first"),
                json!({"id": "d", "type": "divider"}),
                paragraph("b", "second"),
            ],
        );

        let html = render(&source, RenderOptions::default(), "root").unwrap();

        assert_eq!(
            html,
            r#"<p class="notion_paragraph">first</p><hr><p class="notion_paragraph">second</p>"#
        );
        assert_eq!(source.calls(), vec!["children:root"]);
    }

    #[test]
    fn test_empty_results_short_circuit() {
        let source = MockSource::new().with_blocks("root", vec![]);
        assert_eq!(render(&source, strict(), "root").unwrap(), "");
        assert_eq!(source.calls(), vec!["children:root"]);
    }

    #[test]
    fn test_absent_results_short_circuit() {
        let source = MockSource::new().with_children("root", json!({"object": "list"}));
        assert_eq!(render(&source, strict(), "root").unwrap(), "");
        assert_eq!(source.calls(), vec!["children:root"]);
    }

    #[test]
    fn test_nested_children_between_open_and_close() {
        let source = MockSource::new()
            .with_blocks(
                "root",
                vec![
                    json!({"id": "t", "type": "table", "has_children": true, "table": {"table_width": 2}}),
                    paragraph("after", "end"),
                ],
            )
            .with_blocks(
                "t",
                vec![json!({
                    "id": "r1",
                    "type": "table_row",
                    "table_row": {"cells": [
                        [{"type": "text", "plain_text": "A"}],
                        [{"type": "text", "plain_text": "B"}]
                    ]}
                })],
            );

        let html = render(&source, strict(), "root").unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<table class="table notion_table"><tr><td>A</td><td>B</td></tr></table>"#,
                r#"<p class="notion_paragraph">end</p>"#
            )
        );
        assert_eq!(source.calls(), vec!["children:root", "children:t"]);
    }

    #[test]
    fn test_table_without_children_is_closed() {
        let source = MockSource::new().with_blocks(
            "root",
            vec![json!({"id": "t", "type": "table", "has_children": false, "table": {}})],
        );
        assert_eq!(
            render(&source, strict(), "root").unwrap(),
            r#"<table class="table notion_table"></table>"#
        );
    }

    #[test]
    fn test_nested_list_items_render_once() {
        let source = MockSource::new()
            .with_blocks("root", vec![bullet("l1", "parent", true)])
            .with_blocks("l1", vec![bullet("l2", "child", false)]);

        let html = render(&source, strict(), "root").unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<ul class="notion_list"><li>parent</li></ul>"#,
                r#"<ul class="notion_list"><li>child</li></ul>"#
            )
        );
    }

    #[test]
    fn test_leaf_blocks_are_not_fetched() {
        let source = MockSource::new().with_blocks("root", vec![bullet("leaf", "x", false)]);
        render(&source, strict(), "root").unwrap();
        assert_eq!(source.calls(), vec!["children:root"]);
    }

    #[test]
    fn test_lenient_failure_renders_empty_subtree() {
        let source = MockSource::new()
            .with_blocks(
                "root",
                vec![bullet("broken", "before", true), paragraph("p", "after")],
            )
            .with_failure("broken");

        let html = render(&source, RenderOptions::default(), "root").unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<ul class="notion_list"><li>before</li></ul>"#,
                r#"<p class="notion_paragraph">after</p>"#
            )
        );
    }

    #[test]
    fn test_lenient_root_failure_is_empty() {
        let source = MockSource::new().with_failure("root");
        assert_eq!(render(&source, RenderOptions::default(), "root").unwrap(), "");
    }

    #[test]
    fn test_strict_failure_aborts() {
        let source = MockSource::new()
            .with_blocks("root", vec![bullet("broken", "x", true)])
            .with_failure("broken");

        let err = render(&source, strict(), "root").unwrap_err();

        assert!(matches!(err, RenderError::Fetch { ref id, .. } if id == "broken"));
    }

    #[test]
    fn test_depth_limit() {
        let source = MockSource::new()
            .with_blocks("root", vec![bullet("l1", "one", true)])
            .with_blocks("l1", vec![bullet("l2", "two", true)])
            .with_blocks("l2", vec![bullet("l3", "three", false)]);

        let options = RenderOptions {
            max_depth: 2,
            ..Default::default()
        };
        let html = render(&source, options, "root").unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="notion_list"><li>one</li></ul>"#,
                r#"<ul class="notion_list"><li>two</li></ul>"#
            )
        );
        assert_eq!(source.calls(), vec!["children:root", "children:l1"]);

        let options = RenderOptions {
            max_depth: 2,
            ..strict()
        };
        let err = render(&source, options, "root").unwrap_err();
        assert!(matches!(
            err,
            RenderError::DepthExceeded { ref block_id, max_depth: 2 } if block_id == "l2"
        ));
    }

    #[test]
    fn test_cycle_is_detected() {
        let source = MockSource::new()
            .with_blocks("root", vec![bullet("a", "a", true)])
            .with_blocks("a", vec![bullet("root", "back", true)]);

        let err = render(&source, strict(), "root").unwrap_err();
        assert!(matches!(err, RenderError::Cycle { ref block_id } if block_id == "root"));

        let html = render(&source, RenderOptions::default(), "root").unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<ul class="notion_list"><li>a</li></ul>"#,
                r#"<ul class="notion_list"><li>back</li></ul>"#
            )
        );
    }

    #[test]
    fn test_unsupported_blocks_in_tree() {
        let callout = json!({"id": "c", "type": "callout", "callout": {"rich_text": []}});
        let source = MockSource::new().with_blocks("root", vec![callout, paragraph("p", "x")]);

        let html = render(&source, RenderOptions::default(), "root").unwrap();
        assert_eq!(html, r#"<p class="notion_paragraph">x</p>"#);

        let html = render(&source, strict(), "root").unwrap();
        assert!(html.starts_with(r#"<pre class="notion_debug">"#));
        assert!(html.ends_with(r#"<p class="notion_paragraph">x</p>"#));
    }
}
