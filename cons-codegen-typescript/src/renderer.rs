//! TypeScript module rendering.

use cons_coder_codegen::{
    RenderConfig,
    accessor::{Accessor, ClassTemplate, class_views, emit_accessors},
    builder::{CodeBuilder, Comment, CommentStyle},
    group::{FlatGroup, GroupView},
    header::FileHeader,
    language::{
        LiteralStyle, NamingConvention, RenderError, RenderedFile, Renderer, TypeMapper,
    },
};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Flavor, Target};

use crate::{TS_NAMING, TypeScriptTypeMapper, index};

/// Renders one `.ts` module per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

/// Names of the type aliases emitted after a group class.
pub(crate) fn alias_names(type_name: &str) -> [String; 2] {
    [format!("{}Value", type_name), format!("{}Key", type_name)]
}

impl TypeScriptRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    fn render_group(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let name = &group.type_name;
        let [value_alias, key_alias] = alias_names(name);

        out.emit(&Comment::single(CommentStyle::Doc, group.label()));
        out.push_block(&format!("export class {} {{", name), "}", |b| {
            for entry in &group.entries {
                b.emit(&Comment::single(CommentStyle::Doc, entry.label()));
                b.push_line(&format!(
                    "public static readonly {} = {};",
                    entry.ident, entry.literal
                ));
            }
            b.push_blank();
            b.push_block("private constructor() {", "}", |b| {
                b.push_line(&format!(
                    "throw new Error('{} cannot be instantiated');",
                    name
                ));
            });
            b.push_blank();
            emit_accessors(self, group, b);
        });
        out.push_blank();
        out.push_line(&format!(
            "export type {} = ReturnType<typeof {}.getAllKeys>[number];",
            key_alias, name
        ));
        out.push_line(&format!(
            "export type {} = (typeof {})[{}];",
            value_alias, name, key_alias
        ));
    }

    fn render_flat(&self, file: &ConstantsFile, out: &mut CodeBuilder) -> Result<(), RenderError> {
        let groups = FlatGroup::for_file(file, &TS_NAMING, self.style())?;

        out.push_separated(&groups, |b, group| {
            b.push_line(&format!("// {}", group.group.display_label()));
            for constant in &group.constants {
                b.push_line(&format!(
                    "export const {} = {}; // {}",
                    constant.ident,
                    constant.literal,
                    constant.label()
                ));
            }
        });
        Ok(())
    }

    /// `new Map<T, string>([...])` keyed by class members.
    fn push_value_map<'e>(
        out: &mut CodeBuilder,
        header: &str,
        class: &str,
        items: impl Iterator<Item = (&'e str, String)>,
    ) {
        out.push_block(header, "]);", |b| {
            for (ident, text) in items {
                b.push_line(&format!("[{}.{}, {}],", class, ident, text));
            }
        });
    }
}

impl ClassTemplate for TypeScriptRenderer {
    fn accessor_name(&self, accessor: Accessor) -> &'static str {
        match accessor {
            Accessor::Values => "getAllValues",
            Accessor::Keys => "getAllKeys",
            Accessor::KeyValuePairs => "getKeyValuePairs",
            Accessor::Format => "formatValue",
            Accessor::IsValid => "isValid",
            Accessor::FromString => "fromString",
            Accessor::Description => "getDescription",
        }
    }

    fn render_accessor(&self, accessor: Accessor, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = TypeScriptTypeMapper.map_type(group.value_type);
        let style = self.style();
        let name = &group.type_name;
        let [value_alias, _] = alias_names(name);

        match accessor {
            Accessor::Values => {
                out.push_block(
                    &format!("public static getAllValues(): {}[] {{", ty),
                    "}",
                    |b| {
                        let values: Vec<String> =
                            group.idents().map(|i| format!("{}.{}", name, i)).collect();
                        b.push_line(&format!("return [{}];", values.join(", ")));
                    },
                );
            }
            Accessor::Keys => {
                out.push_block("public static getAllKeys() {", "}", |b| {
                    let keys: Vec<String> =
                        group.entries.iter().map(|e| style.quote(&e.key)).collect();
                    b.push_line(&format!("return [{}] as const;", keys.join(", ")));
                });
            }
            Accessor::KeyValuePairs => {
                out.push_block(
                    &format!(
                        "public static getKeyValuePairs(): Record<string, {}> {{",
                        ty
                    ),
                    "}",
                    |b| {
                        b.push_block("return {", "};", |b| {
                            for entry in &group.entries {
                                b.push_line(&format!("{}: {}.{},", entry.key, name, entry.ident));
                            }
                        });
                    },
                );
            }
            Accessor::Format => {
                out.push_block(
                    &format!("public static formatValue(value: {}): string {{", ty),
                    "}",
                    |b| {
                        Self::push_value_map(
                            b,
                            &format!("const labels = new Map<{}, string>([", ty),
                            name,
                            group
                                .entries
                                .iter()
                                .map(|e| (e.ident.as_str(), style.quote(e.label()))),
                        );
                        b.push_line("return labels.get(value) ?? `Unknown(${value})`;");
                    },
                );
            }
            Accessor::IsValid => {
                out.push_block(
                    &format!(
                        "public static isValid(value: unknown): value is {} {{",
                        value_alias
                    ),
                    "}",
                    |b| {
                        b.push_line(&format!(
                            "return ({}.getAllValues() as unknown[]).includes(value);",
                            name
                        ));
                    },
                );
            }
            Accessor::FromString => {
                out.push_block(
                    &format!(
                        "public static fromString(key: string): {} | undefined {{",
                        ty
                    ),
                    "}",
                    |b| {
                        b.push_line(&format!("const pairs = {}.getKeyValuePairs();", name));
                        b.push_line(
                            "return Object.prototype.hasOwnProperty.call(pairs, key) ? pairs[key] : undefined;",
                        );
                    },
                );
            }
            Accessor::Description => {
                out.push_block(
                    &format!("public static getDescription(value: {}): string {{", ty),
                    "}",
                    |b| {
                        Self::push_value_map(
                            b,
                            &format!("const descriptions = new Map<{}, string>([", ty),
                            name,
                            group
                                .entries
                                .iter()
                                .map(|e| (e.ident.as_str(), style.quote(e.description()))),
                        );
                        b.push_line(
                            "return descriptions.get(value) ?? `Unknown constant value: ${value}`;",
                        );
                    },
                );
            }
        }
    }
}

impl Renderer for TypeScriptRenderer {
    fn target(&self) -> Target {
        Target::TypeScript
    }

    fn naming(&self) -> NamingConvention {
        TS_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &TypeScriptTypeMapper
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let mut out = CodeBuilder::for_target(Target::TypeScript);
        out.emit(&FileHeader::for_file(file, config).to_comment(Target::TypeScript));
        out.push_blank();

        match config.flavor {
            Flavor::Class => {
                let views = class_views(self, file, &TS_NAMING, self.style())?;
                out.push_separated(&views, |b, view| self.render_group(view, b));
            }
            Flavor::Constants => self.render_flat(file, &mut out)?,
        }

        Ok(vec![RenderedFile::new(
            self.output_file_name(file),
            out.build(),
        )])
    }

    fn render_index(
        &self,
        files: &[ConstantsFile],
        config: &RenderConfig,
    ) -> Result<Option<RenderedFile>, RenderError> {
        if config.flavor != Flavor::Class || files.is_empty() {
            return Ok(None);
        }
        index::render(files, config).map(Some)
    }
}
