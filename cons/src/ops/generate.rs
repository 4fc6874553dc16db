//! Generate operation - render every loaded file for one target.

use std::{collections::HashMap, path::PathBuf};

use cons_coder_codegen::{
    RenderConfig,
    language::{RenderError, RenderedFile, Renderer},
};
use cons_coder_core::{ConstantsFile, File, WriteResult};
use tracing::{debug, warn};

use crate::reports::{
    FileFailure, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Whether rendered files go to disk or to a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Write,
    DryRun,
}

/// Output paths and shared top-level names already taken in one run, with
/// the source that took them.
#[derive(Debug, Default)]
pub(crate) struct OutputClaims {
    paths: HashMap<PathBuf, String>,
    names: HashMap<String, String>,
}

impl OutputClaims {
    /// Claim every path of `units` and every shared name for `owner`, or
    /// nothing if one of them is already taken.
    pub(crate) fn claim(
        &mut self,
        owner: &str,
        units: &[RenderedFile],
        names: &[(String, String)],
    ) -> Result<(), RenderError> {
        let taken = units
            .iter()
            .find_map(|unit| self.paths.get(&unit.path).map(|first| (unit, first)));
        if let Some((unit, first)) = taken {
            return Err(RenderError::OutputCollision {
                path: unit.path.display().to_string(),
                first: first.clone(),
                second: owner.to_string(),
            });
        }

        let mut pending: HashMap<&str, &str> = HashMap::new();
        for (name, ident) in names {
            let first = self
                .names
                .get(ident)
                .map(String::as_str)
                .or_else(|| pending.get(ident.as_str()).copied());
            if let Some(first) = first {
                return Err(RenderError::IdentifierCollision {
                    scope: "top-level".to_string(),
                    first: first.to_string(),
                    second: name.clone(),
                    ident: ident.clone(),
                });
            }
            pending.insert(ident.as_str(), name.as_str());
        }

        for unit in units {
            self.paths.insert(unit.path.clone(), owner.to_string());
        }
        for (ident, name) in pending {
            self.names.insert(ident.to_string(), name.to_string());
        }
        Ok(())
    }
}

/// Execute the generate operation.
///
/// A file that fails to render, or whose output path or shared top-level
/// names another file already took, is recorded and the run continues. The index covers only the
/// files that rendered. Write failures are recorded per file.
pub fn generate(
    files: &[ConstantsFile],
    renderer: &dyn Renderer,
    config: &RenderConfig,
    mode: WriteMode,
) -> GenerateReport {
    let mut failures = Vec::new();
    let mut units: Vec<RenderedFile> = Vec::new();
    let mut rendered_sources = Vec::new();
    let mut claims = OutputClaims::default();

    for file in files {
        let source = file.source_name();
        let rendered = renderer.render(file, config).and_then(|rendered| {
            let names = renderer.shared_names(file, config)?;
            claims.claim(&source, &rendered, &names).map(|()| rendered)
        });
        match rendered {
            Ok(rendered) => {
                debug!(%source, units = rendered.len(), "rendered");
                units.extend(rendered);
                rendered_sources.push(file.clone());
            }
            Err(e) => {
                warn!(%source, error = %e, "render failed");
                failures.push(FileFailure::from_error(source, &e));
            }
        }
    }

    let index_name = config.target.index_file().unwrap_or("index");
    let index = renderer
        .render_index(&rendered_sources, config)
        .and_then(|index| match index {
            Some(index) => claims
                .claim("package index", std::slice::from_ref(&index), &[])
                .map(|()| Some(index)),
            None => Ok(None),
        });
    match index {
        Ok(Some(index)) => units.push(index),
        Ok(None) => {}
        Err(e) => {
            warn!(index = index_name, error = %e, "index failed");
            failures.push(FileFailure::from_error(index_name, &e));
        }
    }

    let result = match mode {
        WriteMode::DryRun => GenerationResult::Preview(PreviewResult {
            files: units
                .into_iter()
                .map(|unit| PreviewFile {
                    path: config.output_dir.join(&unit.path).display().to_string(),
                    content: unit.content,
                })
                .collect(),
        }),
        WriteMode::Write => {
            let mut written = WrittenResult::default();
            for unit in units {
                let path = config.output_dir.join(&unit.path);
                match File::new(&path, unit.content).write() {
                    Ok(WriteResult::Written) => written.written.push(path),
                    Ok(WriteResult::Unchanged) => written.unchanged.push(path),
                    Err(e) => {
                        warn!(path = %path.display(), "write failed");
                        failures.push(FileFailure::from_error(
                            path.display().to_string(),
                            &*e,
                        ));
                    }
                }
            }
            GenerationResult::Written(written)
        }
    };

    GenerateReport {
        target: config.target,
        flavor: config.flavor,
        output_dir: config.output_dir.clone(),
        sources: rendered_sources.len(),
        result,
        failures,
    }
}
