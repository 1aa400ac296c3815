//! Configuration constants for the contract renderer

/// Maximum nesting depth the tree walker descends into.
///
/// Editor documents are shallow (a clause rarely nests deeper than a
/// handful of levels), so anything past this is treated as malformed input
/// and the deeper subtree is dropped instead of exhausting the stack.
pub const MAX_RENDER_DEPTH: usize = 256;
