//! HTML serialization
//!
//! Converts rendered blocks into the markup the contract preview uses.

use crate::ast::{Block, BlockKind, Label, Style};
use crate::options::{LetterStyle, Options};

/// Serialize a forest of blocks to an HTML string
pub fn serialize(blocks: &[Block], options: &Options) -> String {
    let mut output = String::with_capacity(4096);
    serialize_blocks(blocks, options, &mut output);
    output
}

/// Serialize siblings, dropping containers with nothing visible in them.
/// Inline blocks are kept so whitespace-only spans still separate words.
fn serialize_blocks(blocks: &[Block], options: &Options, out: &mut String) {
    for block in blocks {
        if block.kind.is_inline() || !block.is_blank() {
            serialize_block(block, options, out);
        }
    }
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block.kind {
        BlockKind::LineBreak => out.push_str("<br>"),

        BlockKind::Span => {
            open_tag("span", &block.style, options, out);
            if let Some(text) = &block.text {
                escape_into(text, out);
            }
            serialize_children(block, options, out);
            out.push_str("</span>");
        }

        BlockKind::NumberedClause | BlockKind::LetteredClause => {
            serialize_clause(block, options, out)
        }

        kind => {
            let tag = container_tag(kind);
            open_tag(tag, &block.style, options, out);
            serialize_children(block, options, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn serialize_children(block: &Block, options: &Options, out: &mut String) {
    serialize_blocks(&block.children, options, out);
}

fn serialize_clause(block: &Block, options: &Options, out: &mut String) {
    let class = &options.clause_class;

    out.push_str("<div class=\"");
    out.push_str(class);
    out.push_str("\"><div class=\"");
    out.push_str(class);
    out.push_str("-number\">");
    if let Some(label) = block.label {
        out.push_str(&format_label(label, options));
    }
    out.push_str("</div><div class=\"");
    out.push_str(class);
    out.push_str("-body\">");
    serialize_children(block, options, out);
    out.push_str("</div></div>");
}

/// Format a clause label the way the preview prints it
pub fn format_label(label: Label, options: &Options) -> String {
    match (label, options.letter_style) {
        (Label::Number(_), _) | (Label::Letter(_), LetterStyle::Dotted) => format!("{}.", label),
        (Label::Letter(_), LetterStyle::Parenthesized) => format!("({})", label),
    }
}

fn container_tag(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Heading1 => "h1",
        BlockKind::Heading4 => "h4",
        BlockKind::Paragraph => "p",
        BlockKind::UnorderedList => "ul",
        BlockKind::ListItem => "li",
        BlockKind::Span => "span",
        BlockKind::Div
        | BlockKind::NumberedClause
        | BlockKind::LetteredClause
        | BlockKind::LineBreak => "div",
    }
}

fn open_tag(tag: &str, style: &Style, options: &Options, out: &mut String) {
    out.push('<');
    out.push_str(tag);

    let mut classes = Vec::new();
    if style.bold {
        classes.push(options.bold_class.as_str());
    }
    if style.underline {
        classes.push(options.underline_class.as_str());
    }
    if !classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(&classes.join(" "), out);
        out.push('"');
    }

    if let Some(color) = &style.highlight {
        out.push_str(" style=\"background-color: ");
        escape_into(color, out);
        out.push('"');
    }

    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
