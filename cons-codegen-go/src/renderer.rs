//! Go file rendering.

use cons_coder_codegen::{
    RenderConfig,
    accessor::{Accessor, ClassTemplate, class_views, emit_accessors},
    builder::CodeBuilder,
    group::{FlatGroup, GroupView, top_level_names},
    header::FileHeader,
    language::{
        LiteralStyle, NamingConvention, RenderError, RenderedFile, Renderer, TypeMapper,
    },
};
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Flavor, Target};

use crate::{GO_NAMING, GoTypeMapper, struct_name};

/// Renders one `.go` file per source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl GoRenderer {
    fn style(&self) -> LiteralStyle {
        self.literal_style()
    }

    /// Last segment of a dotted package path, e.g. `com.acme.cons` -> `cons`.
    fn package_name(config: &RenderConfig) -> &str {
        let package = config.package.rsplit(['.', '/']).next().unwrap_or_default();
        if package.is_empty() { "cons" } else { package }
    }

    fn render_group(&self, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = GoTypeMapper.map_type(group.value_type);
        let receiver = struct_name(&group.group.name);
        let width = group.idents().map(|i| i.chars().count()).max().unwrap_or(0);

        out.push_line(&format!("// {} {}", receiver, group.label()));
        out.push_block(&format!("type {} struct {{", receiver), "}", |b| {
            for ident in group.idents() {
                b.push_line(&format!("{:<width$} {}", ident, ty, width = width));
            }
        });
        out.push_blank();

        out.push_line(&format!("// {} {}", group.type_name, group.label()));
        out.push_block(
            &format!("var {} = {}{{", group.type_name, receiver),
            "}",
            |b| {
                for entry in &group.entries {
                    let key = format!("{}:", entry.ident);
                    b.push_line(&format!(
                        "{:<width$} {}, // {}",
                        key,
                        entry.literal,
                        entry.label(),
                        width = width + 1
                    ));
                }
            },
        );
        out.push_blank();
        emit_accessors(self, group, out);
    }

    fn render_flat(&self, file: &ConstantsFile, out: &mut CodeBuilder) -> Result<(), RenderError> {
        let groups = FlatGroup::for_file(file, &GO_NAMING, self.style())?;

        out.push_separated(&groups, |b, group| {
            let width = group
                .constants
                .iter()
                .map(|c| c.ident.chars().count())
                .max()
                .unwrap_or(0);
            b.push_line(&format!("// {}", group.group.display_label()));
            b.push_block("const (", ")", |b| {
                for constant in &group.constants {
                    b.push_line(&format!(
                        "{:<width$} = {} // {}",
                        constant.ident,
                        constant.literal,
                        constant.label(),
                        width = width
                    ));
                }
            });
        });
        Ok(())
    }

    fn method(&self, group: &GroupView<'_>, doc: &str, signature: &str) -> (String, String) {
        let receiver = struct_name(&group.group.name);
        (
            format!("// {}", doc),
            format!("func (s {}) {} {{", receiver, signature),
        )
    }
}

impl ClassTemplate for GoRenderer {
    fn supports(&self, accessor: Accessor) -> bool {
        accessor != Accessor::Description
    }

    fn accessor_name(&self, accessor: Accessor) -> &'static str {
        match accessor {
            Accessor::Values => "AllValues",
            Accessor::Keys => "AllKeys",
            Accessor::KeyValuePairs => "KeyValuePairs",
            Accessor::Format => "Format",
            Accessor::IsValid => "IsValid",
            Accessor::FromString => "FromString",
            Accessor::Description => "Description",
        }
    }

    fn render_accessor(&self, accessor: Accessor, group: &GroupView<'_>, out: &mut CodeBuilder) {
        let ty = GoTypeMapper.map_type(group.value_type);
        let style = self.style();
        let name = &group.type_name;

        let (doc, header) = match accessor {
            Accessor::Values => self.method(
                group,
                &format!("AllValues returns every {} value.", name),
                &format!("AllValues() []{}", ty),
            ),
            Accessor::Keys => self.method(
                group,
                &format!("AllKeys returns every {} key.", name),
                "AllKeys() []string",
            ),
            Accessor::KeyValuePairs => self.method(
                group,
                &format!("KeyValuePairs maps every {} key to its value.", name),
                &format!("KeyValuePairs() map[string]{}", ty),
            ),
            Accessor::Format => self.method(
                group,
                &format!("Format returns the label of a {} value.", name),
                &format!("Format(value {}) string", ty),
            ),
            Accessor::IsValid => self.method(
                group,
                &format!("IsValid reports whether value is a {} value.", name),
                &format!("IsValid(value {}) bool", ty),
            ),
            Accessor::FromString => self.method(
                group,
                &format!("FromString looks up a {} value by key.", name),
                &format!("FromString(key string) ({}, bool)", ty),
            ),
            Accessor::Description => return,
        };

        out.push_line(&doc);
        out.push_block(&header, "}", |b| match accessor {
            Accessor::Values => {
                let values: Vec<String> = group.idents().map(|i| format!("s.{}", i)).collect();
                b.push_line(&format!("return []{}{{{}}}", ty, values.join(", ")));
            }
            Accessor::Keys => {
                let keys: Vec<String> = group.entries.iter().map(|e| style.quote(&e.key)).collect();
                b.push_line(&format!("return []string{{{}}}", keys.join(", ")));
            }
            Accessor::KeyValuePairs => {
                let width = group
                    .entries
                    .iter()
                    .map(|e| e.key.chars().count() + 3)
                    .max()
                    .unwrap_or(0);
                b.push_block(&format!("return map[string]{}{{", ty), "}", |b| {
                    for entry in &group.entries {
                        let key = format!("{}:", style.quote(&entry.key));
                        b.push_line(&format!("{:<width$} s.{},", key, entry.ident, width = width));
                    }
                });
            }
            Accessor::Format => {
                // gofmt keeps `case` at the `switch` indentation
                b.push_line("switch value {");
                for entry in &group.entries {
                    b.push_line(&format!("case s.{}:", entry.ident));
                    b.push_indent();
                    b.push_line(&format!("return {}", style.quote(entry.label())));
                    b.push_dedent();
                }
                b.push_line("}");
                b.push_line("return fmt.Sprintf(\"Unknown(%v)\", value)");
            }
            Accessor::IsValid => {
                b.push_block("for _, v := range s.AllValues() {", "}", |b| {
                    b.push_block("if v == value {", "}", |b| {
                        b.push_line("return true");
                    });
                });
                b.push_line("return false");
            }
            Accessor::FromString => {
                b.push_line("value, ok := s.KeyValuePairs()[key]");
                b.push_line("return value, ok");
            }
            Accessor::Description => {}
        });
    }
}

impl Renderer for GoRenderer {
    fn target(&self) -> Target {
        Target::Go
    }

    fn naming(&self) -> NamingConvention {
        GO_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &GoTypeMapper
    }

    fn shared_names(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<(String, String)>, RenderError> {
        let mut names = top_level_names(file, &GO_NAMING, self.style(), config.flavor)?;
        if config.flavor == Flavor::Class {
            let structs: Vec<_> = file
                .groups
                .iter()
                .map(|group| {
                    (
                        format!("{}.{}", file.file_name, group.name),
                        struct_name(&group.name),
                    )
                })
                .collect();
            names.extend(structs);
        }
        Ok(names)
    }

    fn render(
        &self,
        file: &ConstantsFile,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedFile>, RenderError> {
        let mut out = CodeBuilder::for_target(Target::Go);
        out.emit(&FileHeader::for_file(file, config).to_comment(Target::Go));
        out.push_blank();
        out.push_line(&format!("package {}", Self::package_name(config)));
        out.push_blank();

        match config.flavor {
            Flavor::Class => {
                let views = class_views(self, file, &GO_NAMING, self.style())?;
                out.push_line("import \"fmt\"");
                for view in &views {
                    out.push_blank();
                    self.render_group(view, &mut out);
                }
            }
            Flavor::Constants => self.render_flat(file, &mut out)?,
        }

        Ok(vec![RenderedFile::new(
            self.output_file_name(file),
            out.build(),
        )])
    }
}
