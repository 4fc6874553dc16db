//! JavaScript module rendering.

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

use crate::{JS_NAMING, JavaScriptTypeMapper, index};

/// Renders one CommonJS `.js` module per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptRenderer;

impl JavaScriptRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    fn render_group(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let name = &group.type_name;

        out.emit(&Comment::single(CommentStyle::Doc, group.label()));
        out.push_block(&format!("class {} {{", name), "}", |b| {
            for entry in &group.entries {
                b.emit(&Comment::single(CommentStyle::Doc, entry.label()));
                b.push_line(&format!("static {} = {};", entry.ident, entry.literal));
            }
            b.push_blank();
            b.push_block("constructor() {", "}", |b| {
                b.push_line(&format!(
                    "throw new Error('{} cannot be instantiated');",
                    name
                ));
            });
            b.push_blank();
            emit_accessors(self, group, b);
        });
    }

    fn render_flat(groups: &[FlatGroup<'_>], out: &mut CodeBuilder) {
        out.push_separated(groups, |b, group| {
            b.push_line(&format!("// {}", group.group.display_label()));
            for constant in &group.constants {
                b.push_line(&format!(
                    "const {} = {}; // {}",
                    constant.ident,
                    constant.literal,
                    constant.label()
                ));
            }
        });
    }

    fn push_exports<'n>(out: &mut CodeBuilder, names: impl Iterator<Item = &'n str>) {
        out.push_block("module.exports = {", "};", |b| {
            for name in names {
                b.push_line(&format!("{},", name));
            }
        });
    }

    fn push_jsdoc(out: &mut CodeBuilder, tags: Vec<String>) {
        out.emit(&Comment::new(CommentStyle::Doc, tags));
    }

    /// `new Map([...])` keyed by class members.
    fn push_value_map<'e>(
        out: &mut CodeBuilder,
        header: &str,
        close: &str,
        class: &str,
        items: impl Iterator<Item = (&'e str, String)>,
    ) {
        out.push_block(header, close, |b| {
            for (ident, text) in items {
                b.push_line(&format!("[{}.{}, {}],", class, ident, text));
            }
        });
    }
}

impl ClassTemplate for JavaScriptRenderer {
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
        let ty = JavaScriptTypeMapper.map_type(group.value_type);
        let style = self.style();
        let name = &group.type_name;

        match accessor {
            Accessor::Values => {
                Self::push_jsdoc(out, vec![format!("@returns {{{}[]}}", ty)]);
                out.push_block("static getAllValues() {", "}", |b| {
                    let values: Vec<String> =
                        group.idents().map(|i| format!("{}.{}", name, i)).collect();
                    b.push_line(&format!("return [{}];", values.join(", ")));
                });
            }
            Accessor::Keys => {
                Self::push_jsdoc(out, vec!["@returns {string[]}".to_string()]);
                out.push_block("static getAllKeys() {", "}", |b| {
                    let keys: Vec<String> =
                        group.entries.iter().map(|e| style.quote(&e.key)).collect();
                    b.push_line(&format!("return [{}];", keys.join(", ")));
                });
            }
            Accessor::KeyValuePairs => {
                Self::push_jsdoc(out, vec![format!("@returns {{Object<string, {}>}}", ty)]);
                out.push_block("static getKeyValuePairs() {", "}", |b| {
                    b.push_block("return {", "};", |b| {
                        for entry in &group.entries {
                            b.push_line(&format!("{}: {}.{},", entry.key, name, entry.ident));
                        }
                    });
                });
            }
            Accessor::Format => {
                Self::push_jsdoc(
                    out,
                    vec![
                        format!("@param {{{}}} value", ty),
                        "@param {string} [lang='zh']".to_string(),
                        "@returns {string}".to_string(),
                    ],
                );
                out.push_block("static formatValue(value, lang = 'zh') {", "}", |b| {
                    b.push_block("const labels = {", "};", |b| {
                        for locale in Locale::ALL {
                            Self::push_value_map(
                                b,
                                &format!("{}: new Map([", locale.code()),
                                "]),",
                                name,
                                group
                                    .entries
                                    .iter()
                                    .map(|e| (e.ident.as_str(), style.quote(&e.label_in(locale)))),
                            );
                        }
                    });
                    b.push_line("const table = labels[lang] || labels.zh;");
                    b.push_line("const label = table.get(value);");
                    b.push_line("return label === undefined ? `Unknown(${value})` : label;");
                });
            }
            Accessor::IsValid => {
                Self::push_jsdoc(
                    out,
                    vec!["@param {*} value".to_string(), "@returns {boolean}".to_string()],
                );
                out.push_block("static isValid(value) {", "}", |b| {
                    b.push_line(&format!("return {}.getAllValues().includes(value);", name));
                });
            }
            Accessor::FromString => {
                Self::push_jsdoc(
                    out,
                    vec![
                        "@param {string} key".to_string(),
                        format!("@returns {{{}|undefined}}", ty),
                    ],
                );
                out.push_block("static fromString(key) {", "}", |b| {
                    b.push_line(&format!("const pairs = {}.getKeyValuePairs();", name));
                    b.push_line(
                        "return Object.prototype.hasOwnProperty.call(pairs, key) ? pairs[key] : undefined;",
                    );
                });
            }
            Accessor::Description => {
                Self::push_jsdoc(
                    out,
                    vec![
                        format!("@param {{{}}} value", ty),
                        "@returns {string}".to_string(),
                    ],
                );
                out.push_block("static getDescription(value) {", "}", |b| {
                    Self::push_value_map(
                        b,
                        "const descriptions = new Map([",
                        "]);",
                        name,
                        group
                            .entries
                            .iter()
                            .map(|e| (e.ident.as_str(), style.quote(e.description()))),
                    );
                    b.push_line("const description = descriptions.get(value);");
                    b.push_line(
                        "return description === undefined ? `Unknown constant value: ${value}` : description;",
                    );
                });
            }
        }
    }
}

impl Renderer for JavaScriptRenderer {
    fn target(&self) -> Target {
        Target::JavaScript
    }

    fn naming(&self) -> NamingConvention {
        JS_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &JavaScriptTypeMapper
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let mut out = CodeBuilder::for_target(Target::JavaScript);
        out.emit(&FileHeader::for_file(file, config).to_comment(Target::JavaScript));
        out.push_blank();
        out.push_line("'use strict';");
        out.push_blank();

        match config.flavor {
            Flavor::Class => {
                let views = class_views(self, file, &JS_NAMING, self.style())?;
                out.push_separated(&views, |b, view| self.render_group(view, b));
                out.push_blank();
                Self::push_exports(&mut out, views.iter().map(|v| v.type_name.as_str()));
            }
            Flavor::Constants => {
                let groups = FlatGroup::for_file(file, &JS_NAMING, self.style())?;
                Self::render_flat(&groups, &mut out);
                out.push_blank();
                Self::push_exports(
                    &mut out,
                    groups
                        .iter()
                        .flat_map(|g| g.constants.iter().map(|c| c.ident.as_str())),
                );
            }
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
