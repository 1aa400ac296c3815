//! contract-core - Rendered contract blocks and serialization
//!
//! This crate provides the output data structures of the contract renderer
//! and an HTML serializer for them. It is used by `contract-render`, which
//! produces the blocks, and by any sink that paints them.
//!
//! # Architecture
//!
//! ```text
//! Editor JSON ──contract-render──▶ ┌──────────────┐
//!                                  │ Block forest │ ──▶ HTML / UI sink
//!                                  └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use contract_core::{serialize, Block, BlockKind, Label, Options, Style};
//!
//! let blocks = vec![Block::clause(
//!     Label::Number(1),
//!     vec![Block::new(
//!         BlockKind::Paragraph,
//!         vec![Block::span("The Provider agrees...", Style::default())],
//!     )],
//! )];
//!
//! let html = serialize(&blocks, &Options::default());
//! assert!(html.contains("clause-number"));
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{blocks_text, Block, BlockKind, Label, Style};
pub use options::{LetterStyle, Options};
pub use serialize::{format_label, serialize};
