//! `index.ts` barrel.

use cons_coder_codegen::{
    RenderConfig,
    builder::CodeBuilder,
    group::check_unique,
    header::FileHeader,
    language::{RenderError, RenderedFile},
};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::Target;

use crate::{TS_NAMING, renderer::alias_names};

pub(crate) fn render(
    files: &[ConstantsFile],
    config: &RenderConfig,
) -> Result<RenderedFile, RenderError> {
    let modules: Vec<(&ConstantsFile, Vec<String>)> = files
        .iter()
        .filter(|file| !file.groups.is_empty())
        .map(|file| {
            let classes = file
                .groups
                .iter()
                .map(|group| TS_NAMING.type_name(&group.name))
                .collect();
            (file, classes)
        })
        .collect();

    // Classes and their `Key`/`Value` aliases share one export namespace
    let mut exported = Vec::new();
    for (file, classes) in &modules {
        for (group, class) in file.groups.iter().zip(classes) {
            let owner = format!("{}.{}", file.file_name, group.name);
            exported.push((owner.clone(), class.clone()));
            for alias in alias_names(class) {
                exported.push((owner.clone(), alias));
            }
        }
    }
    check_unique(
        "package index",
        exported
            .iter()
            .map(|(owner, name)| (owner.as_str(), name.as_str())),
    )?;

    let mut out = CodeBuilder::for_target(Target::TypeScript);
    out.emit(&FileHeader::for_index(files, config).to_comment(Target::TypeScript));
    out.push_blank();

    for (file, classes) in &modules {
        let module = format!("'./{}'", TS_NAMING.file_stem(&file.file_name));
        let aliases: Vec<String> = classes.iter().flat_map(|name| alias_names(name)).collect();

        out.push_line(&format!(
            "export {{ {} }} from {};",
            classes.join(", "),
            module
        ));
        out.push_line(&format!(
            "export type {{ {} }} from {};",
            aliases.join(", "),
            module
        ));
    }

    Ok(RenderedFile::new(
        Target::TypeScript.index_file().unwrap_or("index.ts"),
        out.build(),
    ))
}
