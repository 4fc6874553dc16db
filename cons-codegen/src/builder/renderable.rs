//! Fragments let comment and header nodes describe their lines without
//! holding a [`CodeBuilder`].
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// One piece of generated text, indented by the builder it is emitted into.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// Fragments emitted one level deeper than the surrounding code.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// A node that knows its own lines.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}
