//! Code builder utility for generating properly indented code.

use cons_coder_manifest::Target;

use super::{CodeFragment, Indent, Renderable};

/// Mutable builder for indented source text.
///
/// # Example
///
/// ```
/// use cons_coder_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new(Default::default());
/// builder.push_block("object Status {", "}", |b| {
///     b.push_line("const val ACTIVE: Int = 1");
/// });
///
/// assert_eq!(builder.build(), "object Status {\n    const val ACTIVE: Int = 1\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a builder using the target's conventional indentation.
    pub fn for_target(target: Target) -> Self {
        Self::new(Indent::for_target(target))
    }

    /// Add a line with current indentation. An empty line gets no indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self.push_blank();
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add each line of `text` with current indentation.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(line);
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body written by `f`, then `close`.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_indent();
        f(self);
        self.push_dedent();
        self.push_line(close)
    }

    /// Add `header` and the indented body written by `f`, without a closing line.
    pub fn push_suite<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header);
        self.push_indent();
        f(self);
        self.push_dedent()
    }

    /// Add items separated by a blank line.
    pub fn push_separated<T, I, F>(&mut self, items: I, mut f: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.push_blank();
            }
            f(self, item);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
