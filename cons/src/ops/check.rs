//! Check operation - definition validation.

use std::path::Path;

use cons_coder_codegen::{RenderConfig, language::RenderError};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Flavor, Target};
use tracing::debug;

use super::{LoadedInputs, generate::OutputClaims};
use crate::{
    language::TargetSupport,
    reports::{CheckReport, FileFailure, FileSummary, GroupSummary},
};

/// Execute the check operation.
///
/// Summarizes the loaded definitions and renders them in memory for every
/// requested target and flavor, including the package index, to surface
/// identifier, shared name and output path collisions.
pub fn check(
    inputs: &LoadedInputs,
    input_dir: &Path,
    targets: &[Target],
    flavors: &[Flavor],
) -> CheckReport {
    let mut errors = Vec::new();
    let mut files = Vec::new();

    for file in &inputs.files {
        match summarize(file) {
            Ok(summary) => files.push(summary),
            Err(failure) => errors.push(failure),
        }
    }

    for &target in targets {
        let renderer = TargetSupport::renderer(target);
        for &flavor in flavors {
            let config = RenderConfig::new(target).with_flavor(flavor);
            let mut fail = |file: &str, e: RenderError| {
                debug!(file, %target, %flavor, "render check failed");
                let failure = FileFailure::from_error(file, &e);
                errors.push(FileFailure::new(
                    failure.file,
                    format!("{} ({}): {}", target, flavor, failure.message),
                ));
            };

            let mut claims = OutputClaims::default();
            let mut rendered = Vec::new();
            for file in &inputs.files {
                let source = file.source_name();
                let result = renderer.render(file, &config).and_then(|units| {
                    let names = renderer.shared_names(file, &config)?;
                    claims.claim(&source, &units, &names)
                });
                match result {
                    Ok(()) => rendered.push(file.clone()),
                    Err(e) => fail(&source, e),
                }
            }

            let index = renderer.render_index(&rendered, &config).and_then(|index| {
                match index {
                    Some(index) => {
                        claims.claim("package index", std::slice::from_ref(&index), &[])
                    }
                    None => Ok(()),
                }
            });
            if let Err(e) = index {
                fail(target.index_file().unwrap_or("index"), e);
            }
        }
    }

    CheckReport {
        input_dir: input_dir.to_path_buf(),
        files,
        failed_sources: inputs.failures.len(),
        errors,
    }
}

fn summarize(file: &ConstantsFile) -> Result<FileSummary, FileFailure> {
    let groups = file
        .groups
        .iter()
        .map(|group| {
            let value_type = group
                .value_type()
                .map_err(|e| FileFailure::from_error(file.source_name(), &e))?;
            Ok(GroupSummary {
                name: group.name.clone(),
                label: group.display_label().to_string(),
                value_type,
                constants: group.len(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FileSummary {
        source: file.source_name(),
        label: if file.label.is_empty() {
            file.file_name.clone()
        } else {
            file.label.clone()
        },
        groups,
    })
}
