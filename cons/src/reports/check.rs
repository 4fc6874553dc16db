//! Check command report data structures.

use std::path::PathBuf;

use cons_coder_core::ScalarType;

use super::{
    generate::FileFailure,
    output::{Output, Report},
};

/// Report data from definition validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Directory holding the definitions.
    pub input_dir: PathBuf,
    /// Files that loaded successfully.
    pub files: Vec<FileSummary>,
    /// Number of files that failed to load.
    pub failed_sources: usize,
    /// Problems found while rendering in memory.
    pub errors: Vec<FileFailure>,
}

/// Summary of one loaded definition file.
#[derive(Debug)]
pub struct FileSummary {
    /// Source file name, e.g. `user.xml`.
    pub source: String,
    pub label: String,
    pub groups: Vec<GroupSummary>,
}

/// Summary of one constant group.
#[derive(Debug)]
pub struct GroupSummary {
    pub name: String,
    pub label: String,
    pub value_type: ScalarType,
    pub constants: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.failed_sources == 0 && self.errors.is_empty()
    }

    fn render_file(out: &mut dyn Output, file: &FileSummary) {
        out.section(&format!("{} ({})", file.source, file.label));
        for group in &file.groups {
            out.key_value_indented(
                &group.name,
                &format!(
                    "{} {} constant{} - {}",
                    group.constants,
                    group.value_type,
                    if group.constants == 1 { "" } else { "s" },
                    group.label
                ),
            );
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(&format!("{}: {}", error.file, error.message));
        }

        if self.failed_sources > 0 {
            out.warning(&format!(
                "{} file{} could not be loaded",
                self.failed_sources,
                if self.failed_sources == 1 { "" } else { "s" }
            ));
        }

        if !self.is_valid() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.input_dir.display()));
            out.newline();
        }

        for file in &self.files {
            Self::render_file(out, file);
        }
    }
}
