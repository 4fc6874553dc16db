//! Canonical in-memory representation of a parsed constants file.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::{ModelError, ScalarType};

/// A single named, typed and valued entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// Canonical token from the source file, e.g. `inactive_user`.
    pub name: String,
    pub ty: ScalarType,
    /// Short human-readable tag, may be empty.
    pub label: String,
    /// Longer human-readable text, may be empty.
    pub description: String,
    /// Canonical value text, formatted per target by the renderers.
    pub value: String,
}

impl Constant {
    pub fn new(name: impl Into<String>, ty: ScalarType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            label: String::new(),
            description: String::new(),
            value: value.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The label, or the raw name when no label was given.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// The description, falling back to the label and then the raw name.
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            self.display_label()
        } else {
            &self.description
        }
    }
}

/// An ordered collection of constants that share one declaration unit.
///
/// All constants of a group hold the same [`ScalarType`]; this is checked
/// when the group is built through [`ConstantGroup::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantGroup {
    pub name: String,
    pub label: String,
    pub constants: Vec<Constant>,
}

impl ConstantGroup {
    /// Build a group, rejecting empty, duplicated or mixed-type input.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        constants: Vec<Constant>,
    ) -> Result<Self, ModelError> {
        let group = Self {
            name: name.into(),
            label: label.into(),
            constants,
        };
        group.validate()?;
        Ok(group)
    }

    /// Check the group shape and return its value type.
    pub fn validate(&self) -> Result<ScalarType, ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::EmptyName { kind: "group" });
        }

        let Some(first) = self.constants.first() else {
            return Err(ModelError::EmptyGroup {
                group: self.name.clone(),
            });
        };

        let mut seen = HashSet::new();
        for constant in &self.constants {
            if constant.name.is_empty() {
                return Err(ModelError::EmptyName { kind: "constant" });
            }
            if !seen.insert(constant.name.as_str()) {
                return Err(ModelError::DuplicateConstant {
                    group: self.name.clone(),
                    constant: constant.name.clone(),
                });
            }
            if constant.ty != first.ty {
                return Err(ModelError::MixedTypes {
                    group: self.name.clone(),
                    constant: constant.name.clone(),
                    expected: first.ty,
                    found: constant.ty,
                });
            }
        }

        Ok(first.ty)
    }

    /// The single value type shared by every constant in the group.
    pub fn value_type(&self) -> Result<ScalarType, ModelError> {
        self.validate()
    }

    /// The group label, or the raw name when no label was given.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

/// One parsed configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantsFile {
    /// File stem used to name output units, e.g. `user_status`.
    pub file_name: String,
    pub source_path: PathBuf,
    /// Project or file level description.
    pub label: String,
    pub groups: Vec<ConstantGroup>,
    pub last_modified: NaiveDateTime,
}

impl ConstantsFile {
    pub fn new(
        file_name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        label: impl Into<String>,
        groups: Vec<ConstantGroup>,
        last_modified: NaiveDateTime,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for group in &groups {
            if !seen.insert(group.name.as_str()) {
                return Err(ModelError::DuplicateGroup {
                    group: group.name.clone(),
                });
            }
        }

        Ok(Self {
            file_name: file_name.into(),
            source_path: source_path.into(),
            label: label.into(),
            groups,
            last_modified,
        })
    }

    /// Base name of the source file, e.g. `user.xml`.
    pub fn source_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.clone())
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Total number of constants across all groups.
    pub fn constant_count(&self) -> usize {
        self.groups.iter().map(ConstantGroup::len).sum()
    }
}
