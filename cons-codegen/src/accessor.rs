//! The fixed accessor repertoire of rich-class output.

use cons_coder_core::ConstantsFile;

use crate::{
    builder::CodeBuilder,
    group::GroupView,
    language::{LiteralStyle, NamingConvention, RenderError},
};

/// Accessors a rich-class group may expose, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Every value of the group.
    Values,
    /// Every member identifier as a string.
    Keys,
    /// Identifier to value map.
    KeyValuePairs,
    /// Human-readable label of a value.
    Format,
    /// Membership test against [`Accessor::Values`].
    IsValid,
    /// Lookup of a value by identifier.
    FromString,
    /// Long description of a value.
    Description,
}

impl Accessor {
    pub const ALL: [Accessor; 7] = [
        Accessor::Values,
        Accessor::Keys,
        Accessor::KeyValuePairs,
        Accessor::Format,
        Accessor::IsValid,
        Accessor::FromString,
        Accessor::Description,
    ];
}

/// Per-target rendering of the accessor repertoire.
pub trait ClassTemplate {
    /// Whether the target emits this accessor at all.
    fn supports(&self, _accessor: Accessor) -> bool {
        true
    }

    /// Identifier the accessor is declared under, e.g. `getAllValues`.
    fn accessor_name(&self, accessor: Accessor) -> &'static str;

    /// Write one accessor of `group` at the current indentation.
    fn render_accessor(&self, accessor: Accessor, group: &GroupView<'_>, out: &mut CodeBuilder);
}

/// Reject a group whose member identifiers shadow one of its accessors.
pub fn check_accessor_names(
    template: &(impl ClassTemplate + ?Sized),
    group: &GroupView<'_>,
) -> Result<(), RenderError> {
    let accessors = Accessor::ALL
        .into_iter()
        .filter(|accessor| template.supports(*accessor));
    for accessor in accessors {
        let name = template.accessor_name(accessor);
        if let Some(entry) = group.entries.iter().find(|e| e.ident == name) {
            return Err(RenderError::AccessorCollision {
                group: group.name().to_string(),
                constant: entry.constant.name.clone(),
                ident: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Rich-class views of every group in `file`, checked against the
/// template's accessor names.
pub fn class_views<'a>(
    template: &(impl ClassTemplate + ?Sized),
    file: &'a ConstantsFile,
    naming: &NamingConvention,
    style: LiteralStyle,
) -> Result<Vec<GroupView<'a>>, RenderError> {
    let views = GroupView::for_file(file, naming, style)?;
    for view in &views {
        check_accessor_names(template, view)?;
    }
    Ok(views)
}

/// Emit every supported accessor, separated by blank lines.
pub fn emit_accessors(
    template: &(impl ClassTemplate + ?Sized),
    group: &GroupView<'_>,
    out: &mut CodeBuilder,
) {
    let accessors = Accessor::ALL
        .into_iter()
        .filter(|accessor| template.supports(*accessor));
    out.push_separated(accessors, |b, accessor| {
        template.render_accessor(accessor, group, b)
    });
}

#[cfg(test)]
mod tests {
    use cons_coder_core::{Constant, ConstantGroup, ScalarType, to_pascal_case, to_upper_snake};

    use super::*;
    use crate::testing::{fixed_timestamp, status_group};

    const NAMING: NamingConvention = NamingConvention {
        group_to_type: to_pascal_case,
        constant_to_member: to_pascal_case,
        file_to_stem: str::to_string,
        reserved_words: &[],
        escape_reserved: |name: &str| name.to_string(),
    };

    struct Recording;

    impl ClassTemplate for Recording {
        fn supports(&self, accessor: Accessor) -> bool {
            accessor != Accessor::Description
        }

        fn accessor_name(&self, accessor: Accessor) -> &'static str {
            match accessor {
                Accessor::Values => "Values",
                Accessor::Keys => "Keys",
                Accessor::KeyValuePairs => "Pairs",
                Accessor::Format => "Format",
                Accessor::IsValid => "IsValid",
                Accessor::FromString => "FromString",
                Accessor::Description => "Description",
            }
        }

        fn render_accessor(&self, accessor: Accessor, group: &GroupView<'_>, out: &mut CodeBuilder) {
            out.push_line(&format!("{}.{:?}", group.type_name, accessor));
        }
    }

    #[test]
    fn test_emit_accessors_in_order() {
        let naming = NamingConvention {
            group_to_type: to_pascal_case,
            constant_to_member: to_upper_snake,
            file_to_stem: str::to_string,
            reserved_words: &[],
            escape_reserved: |name: &str| name.to_string(),
        };
        let group = status_group();
        let view = GroupView::new(&group, &naming, LiteralStyle::DOUBLE).unwrap();

        let mut out = CodeBuilder::default();
        emit_accessors(&Recording, &view, &mut out);

        assert_eq!(
            out.build(),
            "Status.Values\n\nStatus.Keys\n\nStatus.KeyValuePairs\n\nStatus.Format\n\n\
             Status.IsValid\n\nStatus.FromString\n"
        );
    }

    fn mode_file(names: &[&str]) -> ConstantsFile {
        let constants = names
            .iter()
            .enumerate()
            .map(|(i, name)| Constant::new(*name, ScalarType::Int, i.to_string()))
            .collect();
        let group = ConstantGroup::new("mode", "", constants).unwrap();
        ConstantsFile::new("modes", "modes.xml", "", vec![group], fixed_timestamp()).unwrap()
    }

    #[test]
    fn test_member_shadowing_accessor_is_rejected() {
        let file = mode_file(&["light", "is_valid"]);
        let err = class_views(&Recording, &file, &NAMING, LiteralStyle::DOUBLE).unwrap_err();

        assert_eq!(
            err,
            RenderError::AccessorCollision {
                group: "mode".into(),
                constant: "is_valid".into(),
                ident: "IsValid".into(),
            }
        );
    }

    #[test]
    fn test_unsupported_accessor_name_is_free() {
        let file = mode_file(&["description", "format_x"]);
        let views = class_views(&Recording, &file, &NAMING, LiteralStyle::DOUBLE).unwrap();
        assert_eq!(views[0].idents().collect::<Vec<_>>(), ["Description", "FormatX"]);
    }
}
