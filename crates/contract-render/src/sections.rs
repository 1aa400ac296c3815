//! Titled contract sections with their own layout.
//!
//! Sections are recognised by their human-readable titles. All title matching
//! lives in [`SectionKind::of`] and [`classify_clause`] so that a future
//! explicit section tag from the editor only has to change these two places.

use once_cell::sync::Lazy;
use regex::Regex;

use contract_core::{Block, BlockKind, Style};

use crate::convert::{container_kind, flatten_nested_paragraphs, Walker};
use crate::marks::Marks;
use crate::node::{Node, NodeKind};

/// A double-quoted party label such as `"Provider"`
static QUOTED_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

const PARTIES_TITLE: &str = "Parties";
const AGREEMENT_TITLE: &str = "agreement to provide services";
const DEFINITIONS_TITLE: &str = "definitions";
const DEFINITION_MARKER: &str = "definition";

/// Sections that replace the default dispatch for their whole subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Block titled exactly "Parties"
    Parties,
    /// Paragraph or block titled "Agreement to Provide Services", any case
    AgreementToProvideServices,
}

impl SectionKind {
    pub fn of(node: &Node) -> Option<Self> {
        let title = node.title.as_deref()?;
        match node.kind {
            NodeKind::Block if title == PARTIES_TITLE => Some(SectionKind::Parties),
            NodeKind::Paragraph | NodeKind::Block if title.to_lowercase() == AGREEMENT_TITLE => {
                Some(SectionKind::AgreementToProvideServices)
            }
            _ => None,
        }
    }
}

/// How a clause title affects numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseRole {
    /// Titled "Definitions": opens the lettered definitions sequence
    DefinitionsHeading,
    /// Title mentions "definition"
    Definition,
    Regular,
}

pub fn classify_clause(title: Option<&str>) -> ClauseRole {
    let Some(title) = title.map(str::to_lowercase) else {
        return ClauseRole::Regular;
    };

    if title == DEFINITIONS_TITLE {
        ClauseRole::DefinitionsHeading
    } else if title.contains(DEFINITION_MARKER) {
        ClauseRole::Definition
    } else {
        ClauseRole::Regular
    }
}

/// Children of the parties paragraph, split into its three runs
#[derive(Debug, Default)]
struct PartiesSplit<'n> {
    mentions: Vec<&'n Node>,
    labels: Vec<&'n Node>,
    rest: Vec<&'n Node>,
}

impl<'n> PartiesSplit<'n> {
    /// Collect mentions and quoted labels until the first child that is
    /// neither; that child and everything after it is the rest.
    fn scan(children: impl Iterator<Item = &'n Node>) -> Self {
        let mut split = Self::default();
        let mut collecting = true;

        for child in children {
            if collecting && child.kind == NodeKind::Mention {
                split.mentions.push(child);
            } else if collecting
                && child
                    .text
                    .as_deref()
                    .is_some_and(|t| QUOTED_LABEL.is_match(t))
            {
                split.labels.push(child);
            } else {
                collecting = false;
                split.rest.push(child);
            }
        }

        split
    }
}

/// Text between the quotes of a label node
fn label_text(label: &Node) -> &str {
    let text = label.text.as_deref().unwrap_or("");
    QUOTED_LABEL
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str())
}

/// Render the "Parties" block as one numbered line per party followed by the
/// remaining paragraph content. Renders nothing without a paragraph child.
pub(crate) fn render_parties(
    walker: &mut Walker<'_>,
    node: &Node,
    marks: Marks,
    depth: usize,
    out: &mut Vec<Block>,
) {
    let Some(paragraph) = node.children().find(|c| c.kind == NodeKind::Paragraph) else {
        tracing::debug!("Parties block has no paragraph, skipping");
        return;
    };

    let split = PartiesSplit::scan(paragraph.children());
    if split.labels.len() < split.mentions.len() {
        tracing::debug!(
            mentions = split.mentions.len(),
            labels = split.labels.len(),
            "Parties block is missing labels"
        );
    }

    let mut content = Vec::with_capacity(split.mentions.len() + split.rest.len());
    for (i, mention) in split.mentions.iter().enumerate() {
        let label = split.labels.get(i).map_or("", |l| label_text(l));
        let party = Style::default().with_highlight(mention.color.as_deref());

        content.push(Block::new(
            BlockKind::Paragraph,
            vec![
                Block::span(format!("{}. ", i + 1), Style::default()),
                Block::span(mention.mention_label(), party),
                Block::span(" (", Style::default()),
                Block::span(label, Style::new(true, false)),
                Block::span(")", Style::default()),
            ],
        ));
    }

    for child in split.rest {
        walker.render_node(child, marks, depth + 1, &mut content);
    }

    out.push(Block::new(BlockKind::Div, content));
}

/// Render the "Agreement to Provide Services" section. Direct children become
/// spans styled by their own flags only; grandchildren are not walked.
pub(crate) fn render_agreement(node: &Node, out: &mut Vec<Block>) {
    let children = flatten_nested_paragraphs(node);
    let kind = container_kind(&children);

    let spans = children
        .iter()
        .map(|child| {
            let style = Style::new(child.bold, child.underline);
            match child.kind {
                NodeKind::Mention => Block::span(
                    child.mention_label(),
                    style.with_highlight(child.color.as_deref()),
                ),
                _ => Block::span(child.text.as_deref().unwrap_or(""), style),
            }
        })
        .collect();

    out.push(Block::new(kind, spans));
}
