//! Provenance header placed at the top of every generated file.

use cons_coder_core::{ConstantsFile, format_timestamp};
use cons_coder_manifest::Target;

use crate::{
    RenderConfig,
    builder::{Comment, CommentStyle},
};

/// Name written to the generator line of every header.
pub const GENERATOR_NAME: &str = "cons-coder";

/// Header text lines, rendered as a comment by the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    lines: Vec<String>,
}

impl FileHeader {
    /// Header for the output of one source file.
    pub fn for_file(file: &ConstantsFile, config: &RenderConfig) -> Self {
        let mut lines = Self::preamble(config);
        lines.push(if file.label.is_empty() {
            file.file_name.clone()
        } else {
            file.label.clone()
        });
        lines.push(String::new());
        lines.push(format!("Source: {}", file.source_name()));
        lines.push(format!(
            "Last modified: {}",
            format_timestamp(&file.last_modified)
        ));
        lines.extend(Self::generator_lines(config));
        Self { lines }
    }

    /// Header for a package index over several source files.
    pub fn for_index(files: &[ConstantsFile], config: &RenderConfig) -> Self {
        let mut lines = Self::preamble(config);
        lines.push("Package index".to_string());
        lines.push(String::new());
        let sources: Vec<String> = files.iter().map(ConstantsFile::source_name).collect();
        lines.push(format!("Sources: {}", sources.join(", ")));
        lines.extend(Self::generator_lines(config));
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render with the target's header comment syntax.
    pub fn to_comment(&self, target: Target) -> Comment {
        let style = match target {
            Target::Python => CommentStyle::DocString,
            _ => CommentStyle::Block,
        };
        Comment::new(style, self.lines.clone())
    }

    fn preamble(config: &RenderConfig) -> Vec<String> {
        match &config.header_comment {
            Some(text) => {
                let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
                lines.push(String::new());
                lines
            }
            None => Vec::new(),
        }
    }

    fn generator_lines(config: &RenderConfig) -> [String; 2] {
        [
            format!("Generated at: {}", format_timestamp(&config.generated_at)),
            format!("Generator: {} v{}", GENERATOR_NAME, config.tool_version),
        ]
    }
}
