//! ContractRenderer - the main entry point for rendering editor documents.

use contract_core::Block;

use crate::config::MAX_RENDER_DEPTH;
use crate::convert::convert;
use crate::json::parse_document;
use crate::node::Node;
use crate::Result;

// Re-export serialization options from core
pub use contract_core::{LetterStyle, Options as HtmlOptions};

/// Options for ContractRenderer
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Nesting depth past which subtrees are dropped
    pub max_depth: usize,

    /// Options used by `render_html`
    pub html: HtmlOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_RENDER_DEPTH,
            html: HtmlOptions::default(),
        }
    }
}

/// The main service for rendering contract documents.
///
/// Every call starts a fresh render pass with its own numbering, so one
/// renderer can be reused and shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ContractRenderer {
    options: RenderOptions,
}

impl ContractRenderer {
    /// Create a ContractRenderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ContractRenderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document into blocks
    pub fn render(&self, document: &[Node]) -> Vec<Block> {
        convert(document, &self.options)
    }

    /// Render a document to HTML
    pub fn render_html(&self, document: &[Node]) -> String {
        let blocks = self.render(document);
        contract_core::serialize(&blocks, &self.options.html)
    }

    /// Parse an editor JSON document and render it into blocks
    pub fn render_json(&self, json: &str) -> Result<Vec<Block>> {
        let document = parse_document(json)?;
        Ok(self.render(&document))
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}
