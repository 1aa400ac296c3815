//! JSON document loading.
//!
//! The editor exports a document as a JSON array whose first element holds
//! the top-level nodes in its `children`.

use crate::node::{nodes_from_value, Node};
use crate::Result;

/// Parse an editor JSON document into its root node sequence.
///
/// Only JSON syntax errors are reported. A top level that is not an array
/// yields an empty document, and array entries that are not objects are
/// skipped.
///
/// # Example
///
/// ```rust
/// use contract_render::{parse_document, ContractRenderer};
///
/// let document = parse_document(r#"[{"children":[{"type":"h1","children":[{"text":"Agreement"}]}]}]"#).unwrap();
///
/// let blocks = ContractRenderer::new().render(&document);
/// assert_eq!(blocks[0].text_content(), "Agreement");
/// ```
pub fn parse_document(json: &str) -> Result<Vec<Node>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let nodes = nodes_from_value(&mut deserializer)?;
    deserializer.end()?;

    tracing::debug!(roots = nodes.len(), "Parsed document");
    Ok(nodes)
}
