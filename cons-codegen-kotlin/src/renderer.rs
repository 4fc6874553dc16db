//! Kotlin file rendering.

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
use cons_coder_core::{ConstantsFile, ScalarType};
use cons_coder_manifest::{Flavor, Target};

use crate::{KOTLIN_NAMING, KotlinTypeMapper};

/// Renders one `.kt` file per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinRenderer;

impl KotlinRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    /// `const` only applies to primitives and strings.
    fn declaration(ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Unknown => "val",
            _ => "const val",
        }
    }

    fn render_group(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = KotlinTypeMapper.map_type(group.value_type);
        let declaration = Self::declaration(group.value_type);

        out.emit(&Comment::single(CommentStyle::Doc, group.label()));
        out.push_block(&format!("object {} {{", group.type_name), "}", |b| {
            for entry in &group.entries {
                b.emit(&Comment::single(CommentStyle::Doc, entry.label()));
                b.push_line(&format!(
                    "{} {}: {} = {}",
                    declaration, entry.ident, ty, entry.literal
                ));
            }
            b.push_blank();
            emit_accessors(self, group, b);
        });
    }

    fn render_flat(&self, file: &ConstantsFile, out: &mut CodeBuilder) -> Result<(), RenderError> {
        let groups = FlatGroup::for_file(file, &KOTLIN_NAMING, self.style())?;

        out.push_separated(&groups, |b, group| {
            let ty = KotlinTypeMapper.map_type(group.value_type);
            let declaration = Self::declaration(group.value_type);
            b.push_line(&format!("// {}", group.group.display_label()));
            for constant in &group.constants {
                b.push_line(&format!(
                    "{} {}: {} = {} // {}",
                    declaration,
                    constant.ident,
                    ty,
                    constant.literal,
                    constant.label()
                ));
            }
        });
        Ok(())
    }

    /// `mapOf(...)` from key to label for one locale.
    fn push_label_map(&self, group: &GroupView<'_>, locale: Locale, out: &mut CodeBuilder) {
        let style = self.style();
        for entry in &group.entries {
            out.push_line(&format!(
                "{} to {},",
                style.quote(&entry.key),
                style.quote(&entry.label_in(locale))
            ));
        }
    }
}

impl ClassTemplate for KotlinRenderer {
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
        let ty = KotlinTypeMapper.map_type(group.value_type);
        let style = self.style();

        match accessor {
            Accessor::Values => {
                let values: Vec<&str> = group.idents().collect();
                out.push_line(&format!(
                    "fun getAllValues(): List<{}> = listOf({})",
                    ty,
                    values.join(", ")
                ));
            }
            Accessor::Keys => {
                let keys: Vec<String> = group.entries.iter().map(|e| style.quote(&e.key)).collect();
                out.push_line(&format!(
                    "fun getAllKeys(): List<String> = listOf({})",
                    keys.join(", ")
                ));
            }
            Accessor::KeyValuePairs => {
                out.push_block(
                    &format!("fun getKeyValuePairs(): Map<String, {}> = linkedMapOf(", ty),
                    ")",
                    |b| {
                        for entry in &group.entries {
                            b.push_line(&format!("{} to {},", style.quote(&entry.key), entry.ident));
                        }
                    },
                );
            }
            Accessor::Format => {
                out.push_block(
                    &format!("fun format(value: {}, lang: String = \"zh\"): String {{", ty),
                    "}",
                    |b| {
                        b.push_line("val key = getKeyValuePairs().entries.firstOrNull { it.value == value }?.key");
                        b.push_indent();
                        b.push_line("?: return \"Unknown($value)\"");
                        b.push_dedent();
                        b.push_block("val labels = when (lang) {", "}", |b| {
                            for locale in [Locale::En, Locale::Ja] {
                                b.push_block(
                                    &format!("{} -> mapOf(", style.quote(locale.code())),
                                    ")",
                                    |b| self.push_label_map(group, locale, b),
                                );
                            }
                            b.push_block("else -> mapOf(", ")", |b| {
                                self.push_label_map(group, Locale::Zh, b)
                            });
                        });
                        b.push_line("return labels[key] ?: \"Unknown($value)\"");
                    },
                );
            }
            Accessor::IsValid => {
                out.push_line(&format!(
                    "fun isValid(value: {}): Boolean = value in getAllValues()",
                    ty
                ));
            }
            Accessor::FromString => {
                out.push_line(&format!(
                    "fun fromString(key: String): {}? = getKeyValuePairs()[key]",
                    ty
                ));
            }
            Accessor::Description => {
                out.push_block(
                    &format!("fun getDescription(value: {}): String = when (value) {{", ty),
                    "}",
                    |b| {
                        for entry in &group.entries {
                            b.push_line(&format!(
                                "{} -> {}",
                                entry.ident,
                                style.quote(entry.description())
                            ));
                        }
                        b.push_line("else -> \"Unknown constant value: $value\"");
                    },
                );
            }
        }
    }
}

impl Renderer for KotlinRenderer {
    fn target(&self) -> Target {
        Target::Kotlin
    }

    fn naming(&self) -> NamingConvention {
        KOTLIN_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &KotlinTypeMapper
    }

    fn shared_names(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<(String, String)>, RenderError> {
        top_level_names(file, &KOTLIN_NAMING, self.style(), config.flavor)
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let mut out = CodeBuilder::for_target(Target::Kotlin);
        if !config.package.is_empty() {
            out.push_line(&format!("package {}", config.package));
            out.push_blank();
        }
        out.emit(&FileHeader::for_file(file, config).to_comment(Target::Kotlin));
        out.push_blank();

        match config.flavor {
            Flavor::Class => {
                let views = class_views(self, file, &KOTLIN_NAMING, self.style())?;
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
