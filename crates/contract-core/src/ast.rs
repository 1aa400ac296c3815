//! Rendered block tree
//!
//! This module defines the output nodes produced by the renderer. A sink
//! (the HTML serializer here, or any UI layer) walks these blocks in order.

use std::fmt;

use serde::Serialize;

/// The layout kind of a rendered block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    /// Top-level heading
    Heading1,
    /// Sub-heading with a title and an unemphasized description
    Heading4,
    /// Paragraph holding inline content only
    Paragraph,
    /// Generic container for content that includes block-level children
    Div,
    /// Bulleted list
    UnorderedList,
    /// Item of a list
    ListItem,
    /// Inline run of text, optionally highlighted
    Span,
    /// Clause carrying a decimal label
    NumberedClause,
    /// Definition clause carrying an alphabetic label
    LetteredClause,
    /// Hard line break
    LineBreak,
}

impl BlockKind {
    /// Whether blocks of this kind sit inline with their siblings
    pub fn is_inline(self) -> bool {
        matches!(self, BlockKind::Span | BlockKind::LineBreak)
    }
}

/// Clause label, either a number or a letter ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Label {
    Number(u32),
    /// 1-based ordinal; 1 is `a`
    Letter(u32),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Letter(n) => f.write_str(&letters(*n)),
        }
    }
}

/// Spell a 1-based ordinal as `a..z`, then `aa, ab, ...`
fn letters(mut n: u32) -> String {
    if n == 0 {
        return String::new();
    }

    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Discrete style attributes carried by every block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub bold: bool,
    pub underline: bool,
    /// Background color for highlighted fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl Style {
    pub fn new(bold: bool, underline: bool) -> Self {
        Self {
            bold,
            underline,
            highlight: None,
        }
    }

    pub fn with_highlight(mut self, color: Option<&str>) -> Self {
        self.highlight = color.map(str::to_string);
        self
    }

    pub fn is_plain(&self) -> bool {
        !self.bold && !self.underline && self.highlight.is_none()
    }
}

/// A rendered block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Style::is_plain")]
    pub style: Style,
    /// Literal text, only set on spans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl Block {
    /// Create a container block of the given kind
    pub fn new(kind: BlockKind, children: Vec<Block>) -> Self {
        Self {
            kind,
            label: None,
            style: Style::default(),
            text: None,
            children,
        }
    }

    /// Create a text span
    pub fn span(text: impl Into<String>, style: Style) -> Self {
        Self {
            kind: BlockKind::Span,
            label: None,
            style,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Create a span wrapping other inline blocks
    pub fn span_of(children: Vec<Block>, style: Style) -> Self {
        Self {
            style,
            ..Self::new(BlockKind::Span, children)
        }
    }

    pub fn line_break() -> Self {
        Self::new(BlockKind::LineBreak, Vec::new())
    }

    /// Create a clause; letter labels produce a lettered clause
    pub fn clause(label: Label, children: Vec<Block>) -> Self {
        let kind = match label {
            Label::Number(_) => BlockKind::NumberedClause,
            Label::Letter(_) => BlockKind::LetteredClause,
        };
        Self {
            label: Some(label),
            ..Self::new(kind, children)
        }
    }

    /// Concatenated text of this block and its descendants, breaks as `\n`
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.kind == BlockKind::LineBreak {
            out.push('\n');
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Check if this block renders nothing visible
    pub fn is_blank(&self) -> bool {
        match self.kind {
            BlockKind::LineBreak => false,
            BlockKind::NumberedClause | BlockKind::LetteredClause => false,
            _ => {
                self.text.as_deref().map_or(true, |t| t.trim().is_empty())
                    && self.children.iter().all(|c| c.is_blank())
            }
        }
    }
}

/// Text content of a forest of blocks
pub fn blocks_text(blocks: &[Block]) -> String {
    blocks.iter().map(|b| b.text_content()).collect()
}
