use std::path::PathBuf;

use cons_coder_core::ModelError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the source content and filename together so parse and validation
/// errors can point at the offending text.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from an XML error.
    pub fn xml_error(&self, source: roxmltree::Error) -> Box<Error> {
        let pos = source.pos();
        let span = offset_of(&self.src, pos.row as usize, pos.col as usize).map(SourceSpan::from);
        Box::new(Error::Xml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a YAML error.
    pub fn yaml_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source
            .location()
            .map(|location| SourceSpan::from(location.index()));
        Box::new(Error::Yaml {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a TOML config error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a model error pointing at `span`.
    pub fn model_error(&self, source: ModelError, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Model {
            src: self.named_source(),
            span,
            message: source.to_string(),
            source,
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based row/column position.
fn offset_of(src: &str, row: usize, col: usize) -> Option<usize> {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(row.checked_sub(1)?)
        .map(str::len)
        .sum();
    let line = src.get(line_start..)?;
    let column: usize = line
        .chars()
        .take(col.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    Some(line_start + column)
}

/// Find the first occurrence of `name` followed by one of `suffixes`.
pub(crate) fn find_name_span(src: &str, name: &str, suffixes: &[&str]) -> Option<SourceSpan> {
    for suffix in suffixes {
        let pattern = format!("{}{}", name, suffix);
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos, name.len())));
        }
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(cons::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse XML")]
    #[diagnostic(
        code(cons::xml_error),
        help("constants are declared as <group label=\"...\"><name type=\"int\" value=\"1\"/></group>")
    )]
    Xml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: roxmltree::Error,
    },

    #[error("failed to parse YAML")]
    #[diagnostic(
        code(cons::yaml_error),
        help("expected a 'groups' mapping of group name to its 'constants'")
    )]
    Yaml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse cons-coder.toml")]
    #[diagnostic(code(cons::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(
        code(cons::invalid_group),
        help("every group needs at least one constant, and its constants need unique names and one shared type")
    )]
    Model {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        message: String,
        source: ModelError,
    },

    #[error("{message}")]
    #[diagnostic(code(cons::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unsupported input file '{path}'")]
    #[diagnostic(
        code(cons::unsupported_format),
        help("constant definitions must end in .xml, .yaml or .yml")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid input pattern '{pattern}'")]
    #[diagnostic(code(cons::pattern_error))]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "<a>\n  <b/>\n</a>";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(6));
        assert_eq!(offset_of(src, 0, 1), None);
    }

    #[test]
    fn test_find_name_span_prefers_suffix() {
        let src = "label: status\ngroups:\n  status:\n";
        let span = find_name_span(src, "status", &[":"]).unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_model_error_keeps_message() {
        let ctx = SourceContext::new("<constants/>", "user.xml");
        let err = ctx.model_error(
            ModelError::EmptyGroup {
                group: "status".to_string(),
            },
            None,
        );
        assert_eq!(err.to_string(), "group 'status' has no constants");
    }
}
