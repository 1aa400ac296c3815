//! Convert an editor node tree to rendered blocks
//!
//! This module walks the document once, threading inherited marks down the
//! recursion and the numbering state across it, and dispatches each node to
//! the rule for its kind. Titled sections are routed to `sections` first.

use std::borrow::Cow;

use contract_core::{Block, BlockKind, Style};

use crate::marks::Marks;
use crate::node::{Node, NodeKind};
use crate::numbering::NumberingState;
use crate::sections::{self, SectionKind};
use crate::service::RenderOptions;

/// Render the top-level nodes of a document.
///
/// The document is a sequence whose first element holds the top-level nodes
/// as its children. Anything else renders as an empty forest.
pub fn convert(document: &[Node], options: &RenderOptions) -> Vec<Block> {
    let Some(root) = document.first() else {
        return Vec::new();
    };

    let mut walker = Walker::new(options);
    tracing::debug!(top_level = root.children().count(), "Rendering document");

    let blocks = walker.render_children(root.children(), Marks::NONE, 0);

    tracing::debug!(
        blocks = blocks.len(),
        numbered = walker.numbering.numbered(),
        lettered = walker.numbering.lettered(),
        "Rendered document"
    );
    blocks
}

/// State of a single render pass
pub(crate) struct Walker<'a> {
    numbering: NumberingState,
    options: &'a RenderOptions,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self {
            numbering: NumberingState::new(),
            options,
        }
    }

    /// Render a sequence of sibling nodes under the same parent marks
    pub(crate) fn render_children<'n>(
        &mut self,
        children: impl IntoIterator<Item = &'n Node>,
        marks: Marks,
        depth: usize,
    ) -> Vec<Block> {
        let mut out = Vec::new();
        for child in children {
            self.render_node(child, marks, depth + 1, &mut out);
        }
        out
    }

    /// Render one node, appending zero or more blocks to `out`
    pub(crate) fn render_node(
        &mut self,
        node: &Node,
        parent: Marks,
        depth: usize,
        out: &mut Vec<Block>,
    ) {
        if depth > self.options.max_depth {
            tracing::warn!(
                depth,
                max_depth = self.options.max_depth,
                "Dropping subtree nested beyond the depth limit"
            );
            return;
        }

        let marks = parent.derive(node);

        match SectionKind::of(node) {
            Some(SectionKind::Parties) => {
                return sections::render_parties(self, node, marks, depth, out)
            }
            Some(SectionKind::AgreementToProvideServices) => {
                return sections::render_agreement(node, out)
            }
            None => {}
        }

        match &node.kind {
            NodeKind::Mention => {
                let children = self.render_children(node.children(), marks, depth);
                let style = Style::default().with_highlight(node.color.as_deref());
                out.push(Block::span_of(children, style));
            }

            NodeKind::Clause => {
                let label = self.numbering.enter_clause(node.title.as_deref());
                tracing::trace!(title = ?node.title, %label, "Numbered clause");
                let children = self.render_children(node.children(), marks, depth);
                out.push(Block::clause(label, children));
            }

            NodeKind::Paragraph | NodeKind::Block => self.render_container(node, marks, depth, out),

            NodeKind::Heading1 => {
                let children = self.render_children(node.children(), marks, depth);
                out.push(Block::new(BlockKind::Heading1, children));
            }

            NodeKind::Heading4 => self.render_heading4(node, marks, depth, out),

            NodeKind::UnorderedList => {
                let children = self.render_children(node.children(), marks, depth);
                out.push(Block::new(BlockKind::UnorderedList, children));
            }

            NodeKind::ListItem => {
                let children = self.render_children(node.children(), marks, depth);
                out.push(Block::new(BlockKind::ListItem, children));
            }

            NodeKind::ListItemContent => {
                let children = self.render_children(node.children(), marks, depth);
                out.push(Block::span_of(children, Style::default()));
            }

            // No layout rule of their own; rendered only if they carry text
            NodeKind::Text | NodeKind::Untyped | NodeKind::OrderedList | NodeKind::Unknown(_) => {
                render_text(node, marks, out)
            }
        }
    }

    /// Heading whose first child is the title and the rest a plain description
    fn render_heading4(&mut self, node: &Node, marks: Marks, depth: usize, out: &mut Vec<Block>) {
        let mut children = node.children();
        let mut content = Vec::new();

        if let Some(first) = children.next() {
            self.render_node(first, marks, depth + 1, &mut content);
        }

        let rest: Vec<&Node> = children.collect();
        if !rest.is_empty() {
            let description = self.render_children(rest, Marks::NONE, depth);
            content.push(Block::span_of(description, Style::default()));
        }

        out.push(Block::new(BlockKind::Heading4, content));
    }

    /// Paragraph or generic block; a div when it holds block-level children
    fn render_container(&mut self, node: &Node, marks: Marks, depth: usize, out: &mut Vec<Block>) {
        let children = flatten_nested_paragraphs(node);
        let kind = container_kind(&children);

        let mut content = Vec::new();
        for child in &children {
            self.render_node(child, marks, depth + 1, &mut content);
        }

        out.push(Block::new(kind, content));
    }
}

/// Collapse text-carrying paragraphs nested directly in a paragraph or block
/// into plain text leaves. The editor sometimes nests them one level too deep.
pub(crate) fn flatten_nested_paragraphs(node: &Node) -> Vec<Cow<'_, Node>> {
    node.children()
        .map(|child| match (&child.kind, child.text_payload()) {
            (NodeKind::Paragraph, Some(text)) => Cow::Owned(Node::text(text)),
            _ => Cow::Borrowed(child),
        })
        .collect()
}

/// Div if any child brings its own layout, paragraph otherwise
pub(crate) fn container_kind(children: &[Cow<'_, Node>]) -> BlockKind {
    if children.iter().any(|c| c.kind.is_block_level()) {
        BlockKind::Div
    } else {
        BlockKind::Paragraph
    }
}

/// Text leaf: one span per line with a break between lines
fn render_text(node: &Node, marks: Marks, out: &mut Vec<Block>) {
    let Some(text) = node.text_payload() else {
        if let NodeKind::Unknown(kind) = &node.kind {
            tracing::trace!(kind = %kind, "Skipping node without a rendering rule");
        }
        return;
    };

    let style = marks.style();
    if !text.contains('\n') {
        out.push(Block::span(text, style));
        return;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    for (i, line) in lines.into_iter().enumerate() {
        out.push(Block::span(line.trim(), style.clone()));
        if i < last {
            out.push(Block::line_break());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_core::{blocks_text, Label};

    fn render(nodes: Vec<Node>) -> Vec<Block> {
        let mut root = Node::element("block");
        for node in nodes {
            root.add_child(node);
        }
        convert(&[root], &RenderOptions::default())
    }

    fn p(children: Vec<Node>) -> Node {
        let mut node = Node::element("p");
        for child in children {
            node.add_child(child);
        }
        node
    }

    #[test]
    fn test_empty_document() {
        assert!(convert(&[], &RenderOptions::default()).is_empty());
        assert!(convert(&[Node::text("no children")], &RenderOptions::default()).is_empty());
    }

    #[test]
    fn test_text_splits_on_newlines() {
        let blocks = render(vec![Node::text("A\n  B \nC")]);
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            [
                BlockKind::Span,
                BlockKind::LineBreak,
                BlockKind::Span,
                BlockKind::LineBreak,
                BlockKind::Span
            ]
        );
        assert_eq!(blocks[2].text.as_deref(), Some("B"));
        assert_eq!(blocks_text(&blocks), "A\nB\nC");
    }

    #[test]
    fn test_single_line_text_is_not_trimmed() {
        let blocks = render(vec![Node::text(" padded ")]);
        assert_eq!(blocks, vec![Block::span(" padded ", Style::default())]);
    }

    #[test]
    fn test_marks_are_inherited() {
        let blocks = render(vec![p(vec![Node::element("lic")
            .with_child(Node::text("deep"))])
        .bold()]);
        let span = &blocks[0].children[0].children[0];
        assert_eq!(span.text.as_deref(), Some("deep"));
        assert!(span.style.bold);
        assert!(!span.style.underline);
    }

    #[test]
    fn test_text_leaf_own_flags_apply() {
        let blocks = render(vec![p(vec![Node::text("u").underline()])]);
        assert!(blocks[0].children[0].style.underline);
    }

    #[test]
    fn test_mention_carries_color() {
        let blocks = render(vec![Node::mention("#ff0", "Acme")]);
        assert_eq!(blocks[0].kind, BlockKind::Span);
        assert_eq!(blocks[0].style.highlight.as_deref(), Some("#ff0"));
        assert_eq!(blocks[0].text_content(), "Acme");
    }

    #[test]
    fn test_paragraph_vs_div() {
        let inline = render(vec![p(vec![Node::text("a"), Node::mention("red", "b")])]);
        assert_eq!(inline[0].kind, BlockKind::Paragraph);

        for kind in ["h1", "h4", "ul", "ol", "clause"] {
            let blocks = render(vec![p(vec![Node::text("a"), Node::element(kind)])]);
            assert_eq!(blocks[0].kind, BlockKind::Div, "child kind {}", kind);
        }
    }

    #[test]
    fn test_nested_paragraph_is_flattened() {
        let mut nested = Node::element("p").bold();
        nested.text = Some("inner".to_string());
        let blocks = render(vec![p(vec![nested])]);

        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(
            blocks[0].children,
            vec![Block::span("inner", Style::default())]
        );
    }

    #[test]
    fn test_heading4_description_drops_marks() {
        let heading = Node::element("h4")
            .with_child(Node::text("Title"))
            .with_child(Node::text(" - description"))
            .bold()
            .underline();
        let blocks = render(vec![heading]);
        let h4 = &blocks[0];

        assert_eq!(h4.kind, BlockKind::Heading4);
        assert!(h4.children[0].style.bold);
        assert!(h4.children[0].style.underline);

        let description = &h4.children[1];
        assert_eq!(description.kind, BlockKind::Span);
        assert!(description.style.is_plain());
        assert!(description.children[0].style.is_plain());
        assert_eq!(description.text_content(), " - description");
    }

    #[test]
    fn test_heading4_without_children() {
        let blocks = render(vec![Node::element("h4")]);
        assert_eq!(blocks, vec![Block::new(BlockKind::Heading4, vec![])]);
    }

    #[test]
    fn test_lists() {
        let list = Node::element("ul").with_child(
            Node::element("li").with_child(Node::element("lic").with_child(Node::text("item"))),
        );
        let blocks = render(vec![list]);
        assert_eq!(blocks[0].kind, BlockKind::UnorderedList);
        assert_eq!(blocks[0].children[0].kind, BlockKind::ListItem);
        assert_eq!(blocks[0].children[0].children[0].kind, BlockKind::Span);
        assert_eq!(blocks[0].text_content(), "item");
    }

    #[test]
    fn test_unknown_kind_without_text_is_omitted() {
        let blocks = render(vec![Node::element("table"), Node::text("")]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_unknown_kind_with_text_renders_as_text() {
        let mut node = Node::element("table");
        node.text = Some("cell".to_string());
        assert_eq!(render(vec![node]), vec![Block::span("cell", Style::default())]);
    }

    #[test]
    fn test_clause_numbering_across_nesting() {
        let blocks = render(vec![
            Node::clause("Scope"),
            Node::clause("Definitions").with_child(Node::clause("Service Definition")),
            Node::clause("Another definition"),
            Node::clause("Term"),
        ]);
        let labels: Vec<_> = blocks.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            [
                Some(Label::Number(1)),
                Some(Label::Number(2)),
                Some(Label::Letter(2)),
                Some(Label::Number(3))
            ]
        );
        assert_eq!(blocks[1].children[0].label, Some(Label::Letter(1)));
        assert_eq!(blocks[1].children[0].kind, BlockKind::LetteredClause);
    }

    #[test]
    fn test_depth_limit_drops_deep_subtrees() {
        let mut node = Node::text("bottom");
        for _ in 0..10 {
            node = Node::element("lic").with_child(node);
        }
        let mut root = Node::element("block");
        root.add_child(node);

        let options = RenderOptions {
            max_depth: 4,
            ..Default::default()
        };
        let blocks = convert(&[root.clone()], &options);
        assert_eq!(blocks_text(&blocks), "");

        let blocks = convert(&[root], &RenderOptions::default());
        assert_eq!(blocks_text(&blocks), "bottom");
    }
}
