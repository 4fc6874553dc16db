//! Per-run render settings.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use cons_coder_core::Version;
use cons_coder_manifest::{Flavor, Target};

/// Settings shared by every file rendered in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub target: Target,
    pub output_dir: PathBuf,
    /// Package or namespace for targets that declare one.
    pub package: String,
    pub flavor: Flavor,
    /// Extra text placed at the top of every header.
    pub header_comment: Option<String>,
    pub tool_version: Version,
    /// Generation time written to every header of the run.
    pub generated_at: NaiveDateTime,
}

impl RenderConfig {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            output_dir: PathBuf::from("."),
            package: target.default_package().unwrap_or_default().to_string(),
            flavor: Flavor::default(),
            header_comment: None,
            tool_version: Version::current(),
            generated_at: Local::now().naive_local(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_header_comment(mut self, header_comment: Option<String>) -> Self {
        self.header_comment = header_comment.filter(|text| !text.trim().is_empty());
        self
    }

    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_tool_version(mut self, tool_version: Version) -> Self {
        self.tool_version = tool_version;
        self
    }

    pub fn is_class(&self) -> bool {
        self.flavor == Flavor::Class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new(Target::Java);
        assert_eq!(config.package, "com.example.constants");
        assert_eq!(config.flavor, Flavor::Class);
        assert!(config.header_comment.is_none());
        assert_eq!(config.tool_version, Version::current());

        assert_eq!(RenderConfig::new(Target::Python).package, "");
        assert_eq!(RenderConfig::new(Target::Go).package, "cons");
    }

    #[test]
    fn test_blank_header_comment_is_dropped() {
        let config = RenderConfig::new(Target::Go).with_header_comment(Some("  ".into()));
        assert!(config.header_comment.is_none());

        let config = RenderConfig::new(Target::Go).with_header_comment(Some("Do not edit.".into()));
        assert_eq!(config.header_comment.as_deref(), Some("Do not edit."));
    }
}
