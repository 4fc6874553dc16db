//! Python module rendering.

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

use crate::{PY_NAMING, PythonTypeMapper, index};

/// Labels emitted by `format_value`. Unknown languages fall back to English.
const LOCALES: [Locale; 2] = [Locale::Zh, Locale::En];

/// Renders one `.py` module per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonRenderer;

impl PythonRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    fn value_type(&self, group: &GroupView<'_>) -> &'static str {
        PythonTypeMapper.map_type(group.value_type)
    }

    fn render_classes(
        &self,
        file: &ConstantsFile,
        out: &mut CodeBuilder,
    ) -> Result<(), RenderError> {
        let views = class_views(self, file, &PY_NAMING, self.style())?;

        out.push_line("from typing import Any, Dict, List, Optional");
        for view in &views {
            out.push_blank().push_blank();
            self.render_class(view, out);
        }
        Ok(())
    }

    fn render_class(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        out.push_suite(&format!("class {}:", group.type_name), |b| {
            b.emit(&Comment::single(CommentStyle::DocString, group.label()));
            b.push_blank();
            for entry in &group.entries {
                b.push_line(&format!(
                    "{} = {}  # {}",
                    entry.ident,
                    entry.literal,
                    entry.label()
                ));
            }
            b.push_blank();
            b.push_suite(
                &format!(
                    "def __new__(cls, *args: Any, **kwargs: Any) -> \"{}\":",
                    group.type_name
                ),
                |b| {
                    b.push_line(&format!(
                        "raise TypeError(\"{} is a constants namespace and cannot be instantiated\")",
                        group.type_name
                    ));
                },
            );
            b.push_blank();
            emit_accessors(self, group, b);
        });
    }

    fn render_flat(&self, file: &ConstantsFile, out: &mut CodeBuilder) -> Result<(), RenderError> {
        let groups = FlatGroup::for_file(file, &PY_NAMING, self.style())?;

        out.push_separated(&groups, |b, group| {
            b.push_line(&format!("# {}", group.group.display_label()));
            for constant in &group.constants {
                b.push_line(&format!(
                    "{} = {}  # {}",
                    constant.ident,
                    constant.literal,
                    constant.label()
                ));
            }
        });
        Ok(())
    }

    /// Write a `name: Dict[...] = {` literal keyed by class attributes.
    fn push_value_dict<'e>(
        &self,
        out: &mut CodeBuilder,
        header: &str,
        items: impl Iterator<Item = (&'e str, String)>,
    ) {
        out.push_block(header, "}", |b| {
            for (ident, text) in items {
                b.push_line(&format!("cls.{}: {},", ident, self.style().quote(&text)));
            }
        });
    }
}

impl ClassTemplate for PythonRenderer {
    fn accessor_name(&self, accessor: Accessor) -> &'static str {
        match accessor {
            Accessor::Values => "get_all_values",
            Accessor::Keys => "get_all_keys",
            Accessor::KeyValuePairs => "get_key_value_pairs",
            Accessor::Format => "format_value",
            Accessor::IsValid => "is_valid",
            Accessor::FromString => "from_string",
            Accessor::Description => "get_description",
        }
    }

    fn render_accessor(&self, accessor: Accessor, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = self.value_type(group);
        let style = self.style();
        out.push_line("@classmethod");

        match accessor {
            Accessor::Values => {
                out.push_suite(&format!("def get_all_values(cls) -> List[{}]:", ty), |b| {
                    let values: Vec<String> =
                        group.idents().map(|ident| format!("cls.{}", ident)).collect();
                    b.push_line(&format!("return [{}]", values.join(", ")));
                });
            }
            Accessor::Keys => {
                out.push_suite("def get_all_keys(cls) -> List[str]:", |b| {
                    let keys: Vec<String> =
                        group.entries.iter().map(|e| style.quote(&e.key)).collect();
                    b.push_line(&format!("return [{}]", keys.join(", ")));
                });
            }
            Accessor::KeyValuePairs => {
                out.push_suite(
                    &format!("def get_key_value_pairs(cls) -> Dict[str, {}]:", ty),
                    |b| {
                        b.push_block("return {", "}", |b| {
                            for entry in &group.entries {
                                b.push_line(&format!(
                                    "{}: cls.{},",
                                    style.quote(&entry.key),
                                    entry.ident
                                ));
                            }
                        });
                    },
                );
            }
            Accessor::Format => {
                out.push_suite(
                    &format!(
                        "def format_value(cls, value: {}, lang: str = \"zh\") -> str:",
                        ty
                    ),
                    |b| {
                        b.push_block(
                            &format!("labels: Dict[str, Dict[{}, str]] = {{", ty),
                            "}",
                            |b| {
                                for locale in LOCALES {
                                    let header = format!("{}: {{", style.quote(locale.code()));
                                    b.push_block(&header, "},", |b| {
                                        for entry in &group.entries {
                                            b.push_line(&format!(
                                                "cls.{}: {},",
                                                entry.ident,
                                                style.quote(&entry.label_in(locale))
                                            ));
                                        }
                                    });
                                }
                            },
                        );
                        b.push_line("table = labels.get(lang, labels[\"en\"])");
                        b.push_line("return table.get(value, f\"Unknown({value})\")");
                    },
                );
            }
            Accessor::IsValid => {
                out.push_suite("def is_valid(cls, value: Any) -> bool:", |b| {
                    b.push_line("return value in cls.get_all_values()");
                });
            }
            Accessor::FromString => {
                out.push_suite(
                    &format!("def from_string(cls, name: str) -> Optional[{}]:", ty),
                    |b| {
                        b.push_line("return cls.get_key_value_pairs().get(name)");
                    },
                );
            }
            Accessor::Description => {
                out.push_suite(
                    &format!("def get_description(cls, value: {}) -> str:", ty),
                    |b| {
                        self.push_value_dict(
                            b,
                            &format!("descriptions: Dict[{}, str] = {{", ty),
                            group
                                .entries
                                .iter()
                                .map(|e| (e.ident.as_str(), e.description().to_string())),
                        );
                        b.push_line(
                            "return descriptions.get(value, f\"Unknown constant value: {value}\")",
                        );
                    },
                );
            }
        }
    }
}

impl Renderer for PythonRenderer {
    fn target(&self) -> Target {
        Target::Python
    }

    fn naming(&self) -> NamingConvention {
        PY_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &PythonTypeMapper
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let mut out = CodeBuilder::for_target(Target::Python);
        out.emit(&FileHeader::for_file(file, config).to_comment(Target::Python));
        out.push_blank();

        match config.flavor {
            Flavor::Class => self.render_classes(file, &mut out)?,
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
