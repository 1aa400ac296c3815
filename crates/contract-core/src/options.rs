//! Configuration options for HTML serialization

/// How lettered clause labels are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterStyle {
    /// `(a)`, `(b)`, ...
    #[default]
    Parenthesized,
    /// `a.`, `b.`, ... like numbered clauses
    Dotted,
}

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Format of lettered clause labels
    pub letter_style: LetterStyle,

    /// Class added to bold spans
    pub bold_class: String,

    /// Class added to underlined spans
    pub underline_class: String,

    /// Class of the clause wrapper; number and body use `-number`/`-body` suffixes
    pub clause_class: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            letter_style: LetterStyle::Parenthesized,
            bold_class: "bold".to_string(),
            underline_class: "underline".to_string(),
            clause_class: "clause".to_string(),
        }
    }
}
