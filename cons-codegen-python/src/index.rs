//! `__init__.py` package index.

use cons_coder_codegen::{
    RenderConfig,
    builder::CodeBuilder,
    group::check_unique,
    header::{FileHeader, GENERATOR_NAME},
    language::{RenderError, RenderedFile},
};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::Target;

use crate::PY_NAMING;

pub(crate) fn render(
    files: &[ConstantsFile],
    config: &RenderConfig,
) -> Result<RenderedFile, RenderError> {
    // Group-less files define no class to import
    let modules: Vec<(String, Vec<(String, String)>)> = files
        .iter()
        .filter(|file| !file.groups.is_empty())
        .map(|file| {
            let classes = file
                .groups
                .iter()
                .map(|group| {
                    let owner = format!("{}.{}", file.file_name, group.name);
                    (owner, PY_NAMING.type_name(&group.name))
                })
                .collect();
            (PY_NAMING.file_stem(&file.file_name), classes)
        })
        .collect();

    check_unique(
        "package index",
        modules
            .iter()
            .flat_map(|(_, classes)| classes.iter())
            .map(|(owner, class)| (owner.as_str(), class.as_str())),
    )?;

    let mut out = CodeBuilder::for_target(Target::Python);
    out.emit(&FileHeader::for_index(files, config).to_comment(Target::Python));
    out.push_blank();

    for (module, classes) in &modules {
        let names: Vec<&str> = classes.iter().map(|(_, class)| class.as_str()).collect();
        out.push_line(&format!("from .{} import {}", module, names.join(", ")));
    }

    out.push_blank();
    out.push_block("__all__ = [", "]", |b| {
        for (_, class) in modules.iter().flat_map(|(_, classes)| classes.iter()) {
            b.push_line(&format!("\"{}\",", class));
        }
    });
    out.push_blank();
    out.push_line(&format!("__version__ = \"{}\"", config.tool_version));
    out.push_line(&format!("__generator__ = \"{}\"", GENERATOR_NAME));

    Ok(RenderedFile::new(
        Target::Python.index_file().unwrap_or("__init__.py"),
        out.build(),
    ))
}
