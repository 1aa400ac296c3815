//! # contract-render
//!
//! Render contract documents from the contract editor into numbered,
//! styled blocks.
//!
//! ## Design
//!
//! The renderer walks the editor's node tree once per call and produces a
//! [`contract_core::Block`] forest:
//!
//! - **Numbering**: clauses are numbered `1, 2, 3, ...`; after the
//!   "Definitions" clause, definition clauses are lettered `a, b, c, ...`
//! - **Marks**: bold and underline flow from a node to all its descendants
//! - **Sections**: the "Parties" and "Agreement to Provide Services"
//!   sections get their own layout
//!
//! Malformed input never fails a render; missing structure renders as
//! nothing.
//!
//! ## Example
//!
//! ```rust
//! use contract_render::{ContractRenderer, Node};
//!
//! let renderer = ContractRenderer::new();
//!
//! let root = Node::element("block")
//!     .with_child(Node::clause("Scope").with_child(Node::text("The Provider shall...")));
//!
//! let blocks = renderer.render(&[root]);
//! assert_eq!(blocks[0].label.map(|l| l.to_string()), Some("1".to_string()));
//! ```

pub mod config;
mod convert;
mod json;
pub mod marks;
pub mod node;
pub mod numbering;
pub mod sections;
mod service;

pub use convert::convert;
pub use json::parse_document;
pub use marks::{derive_marks, Marks};
pub use node::{Node, NodeKind};
pub use numbering::NumberingState;
pub use sections::{classify_clause, ClauseRole, SectionKind};
pub use service::{ContractRenderer, HtmlOptions, LetterStyle, RenderOptions};

/// Error type for render operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
