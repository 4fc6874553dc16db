//! `index.js` package index.

use cons_coder_codegen::{
    RenderConfig,
    builder::CodeBuilder,
    group::check_unique,
    header::FileHeader,
    language::{RenderError, RenderedFile},
};
use cons_coder_core::{ConstantsFile, sanitize_identifier, to_camel_case};
use cons_coder_manifest::Target;

use crate::JS_NAMING;

/// Local binding for a required module (e.g., "user_status" -> "userStatus").
fn module_binding(stem: &str) -> String {
    JS_NAMING.safe_name(&sanitize_identifier(&to_camel_case(stem)))
}

pub(crate) fn render(
    files: &[ConstantsFile],
    config: &RenderConfig,
) -> Result<RenderedFile, RenderError> {
    let modules: Vec<(&ConstantsFile, String, String)> = files
        .iter()
        .filter(|file| !file.groups.is_empty())
        .map(|file| {
            let stem = JS_NAMING.file_stem(&file.file_name);
            let binding = module_binding(&stem);
            (file, stem, binding)
        })
        .collect();

    check_unique(
        "package index binding",
        modules
            .iter()
            .map(|(file, _, binding)| (file.file_name.as_str(), binding.as_str())),
    )?;

    let mut exports = Vec::new();
    for (file, _, binding) in &modules {
        for group in &file.groups {
            let owner = format!("{}.{}", file.file_name, group.name);
            exports.push((owner, JS_NAMING.type_name(&group.name), binding.as_str()));
        }
    }
    check_unique(
        "package index",
        exports
            .iter()
            .map(|(owner, class, _)| (owner.as_str(), class.as_str())),
    )?;

    let mut out = CodeBuilder::for_target(Target::JavaScript);
    out.emit(&FileHeader::for_index(files, config).to_comment(Target::JavaScript));
    out.push_blank();
    out.push_line("'use strict';");
    out.push_blank();

    for (_, stem, binding) in &modules {
        out.push_line(&format!("const {} = require('./{}');", binding, stem));
    }

    out.push_blank();
    out.push_block("module.exports = {", "};", |b| {
        for (_, class, binding) in &exports {
            b.push_line(&format!("{}: {}.{},", class, binding, class));
        }
    });

    Ok(RenderedFile::new(
        Target::JavaScript.index_file().unwrap_or("index.js"),
        out.build(),
    ))
}
