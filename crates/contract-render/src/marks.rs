//! Inherited text formatting.

use contract_core::Style;

use crate::node::Node;

/// Formatting flags threaded down the recursion.
///
/// A flag set by an ancestor stays set for every descendant on that path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marks {
    pub bold: bool,
    pub underline: bool,
}

impl Marks {
    /// No inherited formatting
    pub const NONE: Marks = Marks {
        bold: false,
        underline: false,
    };

    /// Marks for `node` given the marks of its parent
    pub fn derive(self, node: &Node) -> Marks {
        derive_marks(self, node)
    }

    pub fn style(self) -> Style {
        Style::new(self.bold, self.underline)
    }
}

/// Union of the parent's marks with the flags `node` declares itself
pub fn derive_marks(parent: Marks, node: &Node) -> Marks {
    Marks {
        bold: parent.bold || node.bold,
        underline: parent.underline || node.underline,
    }
}
