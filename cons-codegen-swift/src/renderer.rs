//! Swift file rendering.

use cons_coder_codegen::{
    RenderConfig,
    accessor::{Accessor, ClassTemplate, class_views, emit_accessors},
    builder::{CodeBuilder, Comment, CommentStyle},
    group::{FlatGroup, GroupView, Locale, top_level_names},
    header::FileHeader,
    language::{
        LiteralStyle, NamingConvention, RenderError, RenderedFile, Renderer, TypeMapper,
    },
};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Flavor, Target};

use crate::{SWIFT_NAMING, SwiftTypeMapper};

/// Renders one `.swift` file per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftRenderer;

impl SwiftRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    fn render_group(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = SwiftTypeMapper.map_type(group.value_type);

        out.emit(&Comment::single(CommentStyle::TripleSlash, group.label()));
        out.push_block(&format!("public enum {} {{", group.type_name), "}", |b| {
            for entry in &group.entries {
                b.emit(&Comment::single(CommentStyle::TripleSlash, entry.label()));
                b.push_line(&format!(
                    "public static let {}: {} = {}",
                    entry.ident, ty, entry.literal
                ));
            }
            b.push_blank();
            emit_accessors(self, group, b);
        });
    }

    fn render_flat(&self, file: &ConstantsFile, out: &mut CodeBuilder) -> Result<(), RenderError> {
        let groups = FlatGroup::for_file(file, &SWIFT_NAMING, self.style())?;

        out.push_separated(&groups, |b, group| {
            let ty = SwiftTypeMapper.map_type(group.value_type);
            b.push_line(&format!("// {}", group.group.display_label()));
            for constant in &group.constants {
                b.push_line(&format!(
                    "public let {}: {} = {} // {}",
                    constant.ident,
                    ty,
                    constant.literal,
                    constant.label()
                ));
            }
        });
        Ok(())
    }
}

impl ClassTemplate for SwiftRenderer {
    fn accessor_name(&self, accessor: Accessor) -> &'static str {
        match accessor {
            Accessor::Values => "getAllValues",
            Accessor::Keys => "getAllKeys",
            Accessor::KeyValuePairs => "getKeyValuePairs",
            Accessor::Format => "format",
            Accessor::IsValid => "isValid",
            Accessor::FromString => "fromString",
            Accessor::Description => "getDescription",
        }
    }

    fn render_accessor(&self, accessor: Accessor, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = SwiftTypeMapper.map_type(group.value_type);
        let style = self.style();
        // Qualified so members never clash with parameter names
        let member = |ident: &str| format!("{}.{}", group.type_name, ident);

        match accessor {
            Accessor::Values => {
                out.push_block(
                    &format!("public static func getAllValues() -> [{}] {{", ty),
                    "}",
                    |b| {
                        let values: Vec<String> = group.idents().map(member).collect();
                        b.push_line(&format!("return [{}]", values.join(", ")));
                    },
                );
            }
            Accessor::Keys => {
                out.push_block("public static func getAllKeys() -> [String] {", "}", |b| {
                    let keys: Vec<String> =
                        group.entries.iter().map(|e| style.quote(&e.key)).collect();
                    b.push_line(&format!("return [{}]", keys.join(", ")));
                });
            }
            Accessor::KeyValuePairs => {
                out.push_block(
                    &format!("public static func getKeyValuePairs() -> [String: {}] {{", ty),
                    "}",
                    |b| {
                        b.push_block("return [", "]", |b| {
                            for entry in &group.entries {
                                b.push_line(&format!(
                                    "{}: {},",
                                    style.quote(&entry.key),
                                    member(&entry.ident)
                                ));
                            }
                        });
                    },
                );
            }
            Accessor::Format => {
                out.push_block(
                    &format!(
                        "public static func format(_ value: {}, lang: String = \"zh\") -> String {{",
                        ty
                    ),
                    "}",
                    |b| {
                        b.push_block("let labels: [String: [String: String]] = [", "]", |b| {
                            for locale in Locale::ALL {
                                b.push_block(&format!("{}: [", style.quote(locale.code())), "],", |b| {
                                    for entry in &group.entries {
                                        b.push_line(&format!(
                                            "{}: {},",
                                            style.quote(&entry.key),
                                            style.quote(&entry.label_in(locale))
                                        ));
                                    }
                                });
                            }
                        });
                        b.push_line(
                            "guard let key = getKeyValuePairs().first(where: { $0.value == value })?.key,",
                        );
                        b.push_line("      let label = labels[lang]?[key] ?? labels[\"zh\"]?[key] else {");
                        b.push_indent();
                        b.push_line("return \"Unknown(\\(value))\"");
                        b.push_dedent();
                        b.push_line("}");
                        b.push_line("return label");
                    },
                );
            }
            Accessor::IsValid => {
                out.push_block(
                    &format!("public static func isValid(_ value: {}) -> Bool {{", ty),
                    "}",
                    |b| {
                        b.push_line("return getAllValues().contains(value)");
                    },
                );
            }
            Accessor::FromString => {
                out.push_block(
                    &format!("public static func fromString(_ key: String) -> {}? {{", ty),
                    "}",
                    |b| {
                        b.push_line("return getKeyValuePairs()[key]");
                    },
                );
            }
            Accessor::Description => {
                out.push_block(
                    &format!("public static func getDescription(_ value: {}) -> String {{", ty),
                    "}",
                    |b| {
                        b.push_line("switch value {");
                        for entry in &group.entries {
                            b.push_line(&format!("case {}:", member(&entry.ident)));
                            b.push_indent();
                            b.push_line(&format!("return {}", style.quote(entry.description())));
                            b.push_dedent();
                        }
                        b.push_line("default:");
                        b.push_indent();
                        b.push_line("return \"Unknown constant value: \\(value)\"");
                        b.push_dedent();
                        b.push_line("}");
                    },
                );
            }
        }
    }
}

impl Renderer for SwiftRenderer {
    fn target(&self) -> Target {
        Target::Swift
    }

    fn naming(&self) -> NamingConvention {
        SWIFT_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &SwiftTypeMapper
    }

    fn shared_names(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<(String, String)>, RenderError> {
        top_level_names(file, &SWIFT_NAMING, self.style(), config.flavor)
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let mut out = CodeBuilder::for_target(Target::Swift);
        out.push_line("import Foundation");
        out.push_blank();
        out.emit(&FileHeader::for_file(file, config).to_comment(Target::Swift));
        out.push_blank();

        match config.flavor {
            Flavor::Class => {
                let views = class_views(self, file, &SWIFT_NAMING, self.style())?;
                out.push_separated(&views, |b, view| self.render_group(view, b));
            }
            Flavor::Constants => self.render_flat(file, &mut out)?,
        }

        Ok(vec![RenderedFile::new(
            self.output_file_name(file),
            out.build(),
        )])
    }
}
