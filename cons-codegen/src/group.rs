//! Target-neutral views over constant groups.
//!
//! A [`GroupView`] resolves every name and literal of a group for one
//! target so the renderers only decide layout. [`FlatGroup`] does the same
//! for the minimal flavor, where each constant becomes a top-level
//! `GROUP_CONSTANT` declaration.

use std::collections::HashMap;

use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType, to_title_words};
use cons_coder_manifest::Flavor;

use crate::language::{LiteralStyle, NamingConvention, RenderError};

/// Languages of the label tables emitted by `format` accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Zh,
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Zh, Locale::En, Locale::Ja];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }
}

/// One constant with its target spelling resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub constant: &'a Constant,
    /// Mapped identifier before reserved-word escaping, used as the lookup key.
    pub key: String,
    /// Identifier as written in code.
    pub ident: String,
    /// Value literal in target syntax.
    pub literal: String,
}

impl Entry<'_> {
    pub fn label(&self) -> &str {
        self.constant.display_label()
    }

    pub fn description(&self) -> &str {
        self.constant.display_description()
    }

    pub fn english_label(&self) -> String {
        to_title_words(&self.constant.name)
    }

    /// Label shown for `locale`. Japanese reuses the source label.
    pub fn label_in(&self, locale: Locale) -> String {
        match locale {
            Locale::Zh | Locale::Ja => self.label().to_string(),
            Locale::En => self.english_label(),
        }
    }
}

/// A group with type name, value type and sorted entries resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView<'a> {
    pub group: &'a ConstantGroup,
    pub type_name: String,
    pub value_type: ScalarType,
    /// Entries sorted by key.
    pub entries: Vec<Entry<'a>>,
}

impl<'a> GroupView<'a> {
    pub fn new(
        group: &'a ConstantGroup,
        naming: &NamingConvention,
        style: LiteralStyle,
    ) -> Result<Self, RenderError> {
        let value_type = group
            .value_type()
            .map_err(|source| RenderError::invalid_group(&group.name, source))?;

        let mut entries: Vec<Entry<'a>> = group
            .constants
            .iter()
            .map(|constant| Entry {
                constant,
                key: naming.member_key(&constant.name),
                ident: naming.member_name(&constant.name),
                literal: style.format_value(&constant.value, value_type),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        check_unique(
            &format!("group '{}'", group.name),
            entries.iter().map(|e| (e.constant.name.as_str(), e.key.as_str())),
        )?;

        Ok(Self {
            group,
            type_name: naming.type_name(&group.name),
            value_type,
            entries,
        })
    }

    /// Views for every group of a file, in declaration order.
    pub fn for_file(
        file: &'a ConstantsFile,
        naming: &NamingConvention,
        style: LiteralStyle,
    ) -> Result<Vec<Self>, RenderError> {
        let views = file
            .groups
            .iter()
            .map(|group| Self::new(group, naming, style))
            .collect::<Result<Vec<_>, _>>()?;

        check_unique(
            &format!("file '{}'", file.file_name),
            views
                .iter()
                .map(|v| (v.group.name.as_str(), v.type_name.as_str())),
        )?;
        Ok(views)
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn label(&self) -> &str {
        self.group.display_label()
    }

    /// Value literals in entry order.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.literal.as_str())
    }

    /// Identifiers in entry order.
    pub fn idents(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.ident.as_str())
    }
}

/// A minimal-flavor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatConstant<'a> {
    pub constant: &'a Constant,
    /// `GROUP_CONSTANT` identifier.
    pub ident: String,
    pub literal: String,
}

impl FlatConstant<'_> {
    pub fn label(&self) -> &str {
        self.constant.display_label()
    }
}

/// The minimal-flavor declarations of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatGroup<'a> {
    pub group: &'a ConstantGroup,
    pub value_type: ScalarType,
    /// Declarations sorted by identifier.
    pub constants: Vec<FlatConstant<'a>>,
}

impl<'a> FlatGroup<'a> {
    pub fn new(
        group: &'a ConstantGroup,
        naming: &NamingConvention,
        style: LiteralStyle,
    ) -> Result<Self, RenderError> {
        let value_type = group
            .value_type()
            .map_err(|source| RenderError::invalid_group(&group.name, source))?;
        Ok(Self {
            group,
            value_type,
            constants: flat_constants(group, naming, style)?,
        })
    }

    /// Flat groups of a file. Identifiers must be unique across the file.
    pub fn for_file(
        file: &'a ConstantsFile,
        naming: &NamingConvention,
        style: LiteralStyle,
    ) -> Result<Vec<Self>, RenderError> {
        let groups = file
            .groups
            .iter()
            .map(|group| Self::new(group, naming, style))
            .collect::<Result<Vec<_>, _>>()?;

        {
            let names: Vec<(String, &str)> = groups
                .iter()
                .flat_map(|g| {
                    g.constants.iter().map(move |c| {
                        let name = format!("{}.{}", g.group.name, c.constant.name);
                        (name, c.ident.as_str())
                    })
                })
                .collect();
            check_unique(
                &format!("file '{}'", file.file_name),
                names.iter().map(|(name, ident)| (name.as_str(), *ident)),
            )?;
        }
        Ok(groups)
    }
}

/// Flat `GROUP_CONSTANT` declarations of a group, sorted by identifier.
pub fn flat_constants<'a>(
    group: &'a ConstantGroup,
    naming: &NamingConvention,
    style: LiteralStyle,
) -> Result<Vec<FlatConstant<'a>>, RenderError> {
    let value_type = group
        .value_type()
        .map_err(|source| RenderError::invalid_group(&group.name, source))?;

    let mut constants: Vec<FlatConstant<'a>> = group
        .constants
        .iter()
        .map(|constant| FlatConstant {
            constant,
            ident: naming.flat_name(&group.name, &constant.name),
            literal: style.format_value(&constant.value, value_type),
        })
        .collect();
    constants.sort_by(|a, b| a.ident.cmp(&b.ident));

    check_unique(
        &format!("group '{}'", group.name),
        constants
            .iter()
            .map(|c| (c.constant.name.as_str(), c.ident.as_str())),
    )?;
    Ok(constants)
}

/// Top-level declarations of one file in `flavor`, paired with the source
/// name claiming each: `file.group` for the class flavor, where a group
/// declares its type, and `file.group.constant` for the minimal flavor.
pub fn top_level_names(
    file: &ConstantsFile,
    naming: &NamingConvention,
    style: LiteralStyle,
    flavor: Flavor,
) -> Result<Vec<(String, String)>, RenderError> {
    let names = match flavor {
        Flavor::Class => GroupView::for_file(file, naming, style)?
            .into_iter()
            .map(|view| (format!("{}.{}", file.file_name, view.name()), view.type_name))
            .collect(),
        Flavor::Constants => FlatGroup::for_file(file, naming, style)?
            .into_iter()
            .flat_map(|flat| {
                let group = flat.group;
                flat.constants.into_iter().map(move |c| {
                    let owner = format!(
                        "{}.{}.{}",
                        file.file_name, group.name, c.constant.name
                    );
                    (owner, c.ident)
                })
            })
            .collect(),
    };
    Ok(names)
}

/// Fail on the first identifier claimed by two different source names.
pub fn check_unique<'s>(
    scope: &str,
    pairs: impl Iterator<Item = (&'s str, &'s str)>,
) -> Result<(), RenderError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (name, ident) in pairs {
        if let Some(first) = seen.insert(ident, name) {
            return Err(RenderError::IdentifierCollision {
                scope: scope.to_string(),
                first: first.to_string(),
                second: name.to_string(),
                ident: ident.to_string(),
            });
        }
    }
    Ok(())
}
