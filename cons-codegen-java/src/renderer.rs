//! Java file rendering.

use cons_coder_codegen::{
    RenderConfig,
    accessor::{Accessor, ClassTemplate, class_views, emit_accessors},
    builder::{CodeBuilder, Comment, CommentStyle},
    group::{FlatGroup, GroupView, Locale},
    header::FileHeader,
    language::{
        LiteralStyle, NamingConvention, RenderError, RenderedFile, Renderer, TypeMapper,
    },
};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Flavor, Target};

use crate::{JAVA_NAMING, JavaTypeMapper};

/// Declarations placed inside the outer class.
enum Body<'a> {
    Classes(Vec<GroupView<'a>>),
    Flat(Vec<FlatGroup<'a>>),
}

/// Renders one `.java` file per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer;

impl JavaRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    fn push_private_constructor(out: &mut CodeBuilder, class_name: &str) {
        out.push_block(&format!("private {}() {{", class_name), "}", |b| {
            b.push_line(&format!(
                "throw new AssertionError(\"{} cannot be instantiated\");",
                class_name
            ));
        });
    }

    fn render_group(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = JavaTypeMapper.map_type(group.value_type);

        out.emit(&Comment::single(CommentStyle::Doc, group.label()));
        out.push_block(
            &format!("public static final class {} {{", group.type_name),
            "}",
            |b| {
                for entry in &group.entries {
                    b.emit(&Comment::single(CommentStyle::Doc, entry.label()));
                    b.push_line(&format!(
                        "public static final {} {} = {};",
                        ty, entry.ident, entry.literal
                    ));
                }
                b.push_blank();
                Self::push_private_constructor(b, &group.type_name);
                b.push_blank();
                emit_accessors(self, group, b);
            },
        );
    }

    fn render_flat(groups: &[FlatGroup<'_>], out: &mut CodeBuilder) {
        out.push_separated(groups, |b, group| {
            let ty = JavaTypeMapper.map_type(group.value_type);
            b.push_line(&format!("// {}", group.group.display_label()));
            for constant in &group.constants {
                b.push_line(&format!(
                    "public static final {} {} = {}; // {}",
                    ty,
                    constant.ident,
                    constant.literal,
                    constant.label()
                ));
            }
        });
    }

    /// `if (Objects.equals(value, X)) { return ...; }` per entry.
    fn push_value_switch<'e>(
        out: &mut CodeBuilder,
        cases: impl Iterator<Item = (&'e str, String)>,
    ) {
        for (ident, result) in cases {
            out.push_block(&format!("if (Objects.equals(value, {})) {{", ident), "}", |b| {
                b.push_line(&format!("return {};", result));
            });
        }
    }
}

impl ClassTemplate for JavaRenderer {
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
        let ty = JavaTypeMapper.map_type(group.value_type);
        let boxed = JavaTypeMapper.map_boxed_type(group.value_type);
        let style = self.style();

        match accessor {
            Accessor::Values => {
                out.push_block(
                    &format!("public static List<{}> getAllValues() {{", boxed),
                    "}",
                    |b| {
                        let values: Vec<&str> = group.idents().collect();
                        b.push_line(&format!("return Arrays.asList({});", values.join(", ")));
                    },
                );
            }
            Accessor::Keys => {
                out.push_block("public static List<String> getAllKeys() {", "}", |b| {
                    let keys: Vec<String> =
                        group.entries.iter().map(|e| style.quote(&e.key)).collect();
                    b.push_line(&format!("return Arrays.asList({});", keys.join(", ")));
                });
            }
            Accessor::KeyValuePairs => {
                out.push_block(
                    &format!("public static Map<String, {}> getKeyValuePairs() {{", boxed),
                    "}",
                    |b| {
                        b.push_line(&format!(
                            "Map<String, {}> pairs = new LinkedHashMap<>();",
                            boxed
                        ));
                        for entry in &group.entries {
                            b.push_line(&format!(
                                "pairs.put({}, {});",
                                style.quote(&entry.key),
                                entry.ident
                            ));
                        }
                        b.push_line("return Collections.unmodifiableMap(pairs);");
                    },
                );
            }
            Accessor::Format => {
                out.push_block(
                    &format!("public static String format({} value) {{", ty),
                    "}",
                    |b| {
                        b.push_line("return format(value, \"zh\");");
                    },
                );
                out.push_blank();
                out.push_block(
                    &format!("public static String format({} value, String lang) {{", ty),
                    "}",
                    |b| {
                        b.push_line("boolean english = \"en\".equals(lang);");
                        Self::push_value_switch(
                            b,
                            group.entries.iter().map(|e| {
                                let result = format!(
                                    "english ? {} : {}",
                                    style.quote(&e.label_in(Locale::En)),
                                    style.quote(&e.label_in(Locale::Zh))
                                );
                                (e.ident.as_str(), result)
                            }),
                        );
                        b.push_line("return \"Unknown(\" + value + \")\";");
                    },
                );
            }
            Accessor::IsValid => {
                out.push_block(
                    &format!("public static boolean isValid({} value) {{", ty),
                    "}",
                    |b| {
                        b.push_line("return getAllValues().contains(value);");
                    },
                );
            }
            Accessor::FromString => {
                out.push_block(
                    &format!("public static Optional<{}> fromString(String key) {{", boxed),
                    "}",
                    |b| {
                        b.push_line("return Optional.ofNullable(getKeyValuePairs().get(key));");
                    },
                );
            }
            Accessor::Description => {
                out.push_block(
                    &format!("public static String getDescription({} value) {{", ty),
                    "}",
                    |b| {
                        Self::push_value_switch(
                            b,
                            group
                                .entries
                                .iter()
                                .map(|e| (e.ident.as_str(), style.quote(e.description()))),
                        );
                        b.push_line("return \"Unknown constant value: \" + value;");
                    },
                );
            }
        }
    }
}

impl Renderer for JavaRenderer {
    fn target(&self) -> Target {
        Target::Java
    }

    fn naming(&self) -> NamingConvention {
        JAVA_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &JavaTypeMapper
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let outer = JAVA_NAMING.file_stem(&file.file_name);
        let body = match config.flavor {
            Flavor::Class => {
                let mut views = class_views(self, file, &JAVA_NAMING, self.style())?;
                // A member class may not share the name of its enclosing class
                for view in views.iter_mut().filter(|v| v.type_name == outer) {
                    view.type_name.push_str("Group");
                }
                Body::Classes(views)
            }
            Flavor::Constants => {
                Body::Flat(FlatGroup::for_file(file, &JAVA_NAMING, self.style())?)
            }
        };

        let mut out = CodeBuilder::for_target(Target::Java);
        if !config.package.is_empty() {
            out.push_line(&format!("package {};", config.package));
            out.push_blank();
        }
        if matches!(body, Body::Classes(_)) {
            out.push_line("import java.util.*;");
            out.push_blank();
        }

        out.emit(&FileHeader::for_file(file, config).to_comment(Target::Java));
        out.push_block(&format!("public final class {} {{", outer), "}", |b| {
            b.push_blank();
            Self::push_private_constructor(b, &outer);
            b.push_blank();
            match &body {
                Body::Classes(views) => {
                    b.push_separated(views, |b, view| self.render_group(view, b));
                }
                Body::Flat(groups) => Self::render_flat(groups, b),
            }
        });

        Ok(vec![RenderedFile::new(
            self.output_file_name(file),
            out.build(),
        )])
    }
}
