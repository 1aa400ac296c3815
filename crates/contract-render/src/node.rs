//! Editor document node structure.
//!
//! This module provides the node tree emitted by the contract editor. Nodes
//! arrive as loosely shaped JSON objects; deserialization here is lenient so
//! that the renderer only ever sees well-typed values. Fields with the wrong
//! JSON type are treated as absent, and non-object children are dropped.

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;
use serde_json::Value;

/// Node kinds understood by the renderer.
///
/// The editor writes short tag names (`p`, `h1`, `lic`, ...); the long forms
/// are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Highlighted inline field, e.g. a party name
    Mention,
    /// Numbered or lettered contract section
    Clause,
    Paragraph,
    /// Generic container, possibly a titled section
    Block,
    Heading1,
    Heading4,
    UnorderedList,
    OrderedList,
    ListItem,
    ListItemContent,
    /// Explicitly typed text leaf
    Text,
    /// No `type` field; a plain text leaf when `text` is present
    #[default]
    Untyped,
    /// A `type` the renderer has no rule for
    Unknown(String),
}

impl NodeKind {
    /// Classify a raw `type` string
    pub fn parse(kind: &str) -> Self {
        match kind {
            "mention" => NodeKind::Mention,
            "clause" => NodeKind::Clause,
            "p" | "paragraph" => NodeKind::Paragraph,
            "block" => NodeKind::Block,
            "h1" | "heading-1" => NodeKind::Heading1,
            "h4" | "heading-4" => NodeKind::Heading4,
            "ul" | "unordered-list" => NodeKind::UnorderedList,
            "ol" | "ordered-list" => NodeKind::OrderedList,
            "li" | "list-item" => NodeKind::ListItem,
            "lic" | "list-item-content" => NodeKind::ListItemContent,
            "text" => NodeKind::Text,
            other => NodeKind::Unknown(other.to_string()),
        }
    }

    /// Kinds that bring their own layout container
    pub fn is_block_level(&self) -> bool {
        matches!(
            self,
            NodeKind::Heading1
                | NodeKind::Heading4
                | NodeKind::UnorderedList
                | NodeKind::OrderedList
                | NodeKind::Clause
        )
    }
}

impl From<Option<&str>> for NodeKind {
    fn from(value: Option<&str>) -> Self {
        value.map_or(NodeKind::Untyped, NodeKind::parse)
    }
}

/// A node of the editor document tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default, deserialize_with = "node_kind")]
    pub kind: NodeKind,

    /// Text payload of leaf nodes; may contain `\n` hard breaks
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,

    /// Section title of clauses and blocks
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// Display color of mentions
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "lenient_flag")]
    pub bold: bool,

    #[serde(default, deserialize_with = "lenient_flag")]
    pub underline: bool,

    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    /// Create a node of the given editor type with an empty child list
    pub fn element(kind: &str) -> Self {
        Self {
            kind: NodeKind::parse(kind),
            children: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Create an untyped text leaf
    pub fn text(content: &str) -> Self {
        Self {
            text: Some(content.to_string()),
            ..Default::default()
        }
    }

    /// Create a mention whose label is a single text child
    pub fn mention(color: &str, label: &str) -> Self {
        let mut node = Self::element("mention");
        node.color = Some(color.to_string());
        node.add_child(Node::text(label));
        node
    }

    /// Create a titled clause
    pub fn clause(title: &str) -> Self {
        Self::element("clause").with_title(title)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        if let Some(ref mut children) = self.children {
            children.push(child);
        } else {
            self.children = Some(vec![child]);
        }
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Non-empty text payload, if any
    pub fn text_payload(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Visible label of a mention: the text of its first child
    pub fn mention_label(&self) -> &str {
        self.children()
            .next()
            .and_then(|c| c.text.as_deref())
            .unwrap_or("")
    }

}

/// Accepts any JSON value; values of the wrong shape become `Other`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.into_option())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, bool>(deserializer)?.unwrap_or(false))
}

fn node_kind<'de, D>(deserializer: D) -> Result<NodeKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient(deserializer)?;
    Ok(NodeKind::from(raw.as_deref()))
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Option<Vec<Node>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = lenient(deserializer)?;
    Ok(raw.map(|children| children.into_iter().filter_map(node_from_value).collect()))
}

/// Only JSON objects are nodes; a derived struct would also accept an array
/// and fill its fields by position.
fn node_from_value(value: Value) -> Option<Node> {
    if !value.is_object() {
        return None;
    }
    Node::deserialize(value).ok()
}

/// Deserialize a list of nodes, skipping entries that are not node objects
pub(crate) fn nodes_from_value<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_children(deserializer)?.unwrap_or_default())
}
