//! Comment blocks in the syntaxes used by the target languages.

use super::{CodeFragment, Renderable};

/// Comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/*` ... ` */` with ` * ` line prefixes.
    Block,
    /// `/**` ... ` */` documentation block; a single line stays on one line.
    Doc,
    /// `///` line comments.
    TripleSlash,
    /// `//` line comments.
    DoubleSlash,
    /// `#` line comments.
    Hash,
    /// Python `"""` docstring; a single line stays on one line.
    DocString,
}

/// A comment rendered in a given [`CommentStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    style: CommentStyle,
    lines: Vec<String>,
}

impl Comment {
    pub fn new(style: CommentStyle, lines: Vec<String>) -> Self {
        Self { style, lines }
    }

    pub fn single(style: CommentStyle, text: impl Into<String>) -> Self {
        Self::new(style, vec![text.into()])
    }

    fn prefixed(prefix: &str, line: &str) -> String {
        if line.is_empty() {
            prefix.trim_end().to_string()
        } else {
            format!("{}{}", prefix, line)
        }
    }
}

impl Renderable for Comment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let lines = &self.lines;
        let prefixed = |prefix: &str| {
            lines
                .iter()
                .map(|line| CodeFragment::line(Self::prefixed(prefix, line)))
                .collect::<Vec<_>>()
        };

        match self.style {
            CommentStyle::Doc | CommentStyle::DocString if lines.len() == 1 => {
                let (open, close) = match self.style {
                    CommentStyle::Doc => ("/** ", " */"),
                    _ => ("\"\"\"", "\"\"\""),
                };
                vec![CodeFragment::line(format!("{}{}{}", open, lines[0], close))]
            }
            CommentStyle::Block | CommentStyle::Doc => {
                let open = if self.style == CommentStyle::Doc {
                    "/**"
                } else {
                    "/*"
                };
                let mut fragments = vec![CodeFragment::line(open)];
                fragments.extend(prefixed(" * "));
                fragments.push(CodeFragment::line(" */"));
                fragments
            }
            CommentStyle::DocString => {
                let mut fragments = vec![CodeFragment::line("\"\"\"")];
                fragments.extend(lines.iter().map(|line| CodeFragment::line(line.as_str())));
                fragments.push(CodeFragment::line("\"\"\""));
                fragments
            }
            CommentStyle::TripleSlash => prefixed("/// "),
            CommentStyle::DoubleSlash => prefixed("// "),
            CommentStyle::Hash => prefixed("# "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(comment: Comment) -> String {
        let mut b = CodeBuilder::default();
        b.emit(&comment);
        b.build()
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_block() {
        let out = render(Comment::new(CommentStyle::Block, lines(&["Users", "", "Source: user.xml"])));
        assert_eq!(out, "/*\n * Users\n *\n * Source: user.xml\n */\n");
    }

    #[test]
    fn test_doc_single_and_multi() {
        assert_eq!(
            render(Comment::single(CommentStyle::Doc, "激活")),
            "/** 激活 */\n"
        );
        assert_eq!(
            render(Comment::new(CommentStyle::Doc, lines(&["a", "b"]))),
            "/**\n * a\n * b\n */\n"
        );
    }

    #[test]
    fn test_docstring() {
        assert_eq!(
            render(Comment::single(CommentStyle::DocString, "账号状态")),
            "\"\"\"账号状态\"\"\"\n"
        );
        assert_eq!(
            render(Comment::new(CommentStyle::DocString, lines(&["a", "", "b"]))),
            "\"\"\"\na\n\nb\n\"\"\"\n"
        );
    }

    #[test]
    fn test_line_comments() {
        assert_eq!(
            render(Comment::new(CommentStyle::TripleSlash, lines(&["a", ""]))),
            "/// a\n///\n"
        );
        assert_eq!(render(Comment::single(CommentStyle::DoubleSlash, "x")), "// x\n");
        assert_eq!(render(Comment::single(CommentStyle::Hash, "x")), "# x\n");
    }
}
