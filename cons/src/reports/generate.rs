//! Generate command report data structures.

use std::path::PathBuf;

use cons_coder_manifest::{Flavor, Target};

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub target: Target,
    pub flavor: Flavor,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Number of source files that were rendered.
    pub sources: usize,
    /// Files written or previewed.
    pub result: GenerationResult,
    /// Files that failed to render or write.
    pub failures: Vec<FileFailure>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    /// Files created or overwritten.
    pub written: Vec<PathBuf>,
    /// Files that already held the generated content.
    pub unchanged: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

/// A file that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Source or output file the failure belongs to.
    pub file: String,
    /// Error message including its causes.
    pub message: String,
}

impl FileFailure {
    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Build a failure from an error and its chain of sources.
    pub fn from_error(file: impl Into<String>, err: &dyn std::error::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::new(file, message)
    }
}

impl GenerateReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Target", &format!("{} ({})", self.target, self.flavor));
        out.key_value("Sources", &self.sources.to_string());
        out.key_value("Output", &self.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section(&format!("Written ({})", written.written.len()));
            for path in &written.written {
                out.added_item(&path.display().to_string());
            }
        }

        if !written.unchanged.is_empty() {
            out.newline();
            out.section(&format!("Unchanged ({})", written.unchanged.len()));
            for path in &written.unchanged {
                out.list_item(&path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }

    fn render_failures(&self, out: &mut dyn Output) {
        if self.failures.is_empty() {
            return;
        }
        out.newline();
        for failure in &self.failures {
            out.error(&format!("{}: {}", failure.file, failure.message));
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
        self.render_failures(out);
    }
}

#[cfg(test)]
mod tests {
    use cons_coder_core::ModelError;

    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            target: Target::TypeScript,
            flavor: Flavor::Class,
            output_dir: PathBuf::from("gen"),
            sources: 2,
            result,
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            written: vec![PathBuf::from("gen/user.ts"), PathBuf::from("gen/index.ts")],
            unchanged: vec![PathBuf::from("gen/order.ts")],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Target: typescript (class)",
                "Sources: 2",
                "Output: gen",
                "",
                "Written (2):",
                "  + gen/user.ts",
                "  + gen/index.ts",
                "",
                "Unchanged (1):",
                "  - gen/order.ts",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "gen/user.ts".into(),
                content: "export const A = 1;".into(),
            }],
        }));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── gen/user.ts ──",
                "export const A = 1;",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_render_failures() {
        let mut report = report(GenerationResult::Written(WrittenResult::default()));
        report.failures.push(FileFailure::new("user.xml", "boom"));

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(report.has_failures());
        assert!(out.text().ends_with("\nerror: user.xml: boom"));
    }

    #[test]
    fn test_failure_includes_sources() {
        let err = cons_coder_codegen::language::RenderError::InvalidGroup {
            group: "status".into(),
            source: ModelError::EmptyGroup {
                group: "status".into(),
            },
        };
        let failure = FileFailure::from_error("user.xml", &err);
        assert_eq!(
            failure.message,
            "group 'status' cannot be rendered: group 'status' has no constants"
        );
    }
}
