//! Targets command report data structures.

use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

use super::output::{Output, Report};
use crate::language::TargetSupport;

/// Raw name shown with each target's member spelling.
const SAMPLE_NAME: &str = "pay_channel";

/// Supported targets and their output conventions.
#[derive(Debug)]
pub struct TargetsReport {
    pub targets: Vec<TargetInfo>,
}

#[derive(Debug)]
pub struct TargetInfo {
    pub name: &'static str,
    pub extension: &'static str,
    pub int_type: &'static str,
    pub string_type: &'static str,
    /// `SAMPLE_NAME` as a member identifier.
    pub sample_member: String,
    /// Index file emitted in class flavor.
    pub index_file: Option<&'static str>,
    pub default_package: Option<&'static str>,
}

impl From<Target> for TargetInfo {
    fn from(target: Target) -> Self {
        Self {
            name: target.as_str(),
            extension: target.extension(),
            int_type: TargetSupport::map_type(ScalarType::Int, target),
            string_type: TargetSupport::map_type(ScalarType::String, target),
            sample_member: TargetSupport::map_name(SAMPLE_NAME, target),
            index_file: target.index_file(),
            default_package: target.default_package(),
        }
    }
}

impl TargetsReport {
    pub fn all() -> Self {
        Self {
            targets: Target::ALL.into_iter().map(TargetInfo::from).collect(),
        }
    }
}

impl Report for TargetsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Targets");
        for info in &self.targets {
            let mut details = vec![
                format!(".{}", info.extension),
                format!("{}/{}", info.int_type, info.string_type),
                format!("{} -> {}", SAMPLE_NAME, info.sample_member),
            ];
            if let Some(index) = info.index_file {
                details.push(format!("index {}", index));
            }
            if let Some(package) = info.default_package {
                details.push(format!("package {}", package));
            }
            out.key_value_indented(&format!("{:<10}", info.name), &details.join(", "));
        }
    }
}
