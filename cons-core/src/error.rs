use thiserror::Error;

use crate::ScalarType;

/// Shape errors raised while building the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    #[error("group '{group}' has no constants")]
    EmptyGroup { group: String },

    #[error("constant '{constant}' is declared more than once in group '{group}'")]
    DuplicateConstant { group: String, constant: String },

    #[error("group '{group}' is declared more than once")]
    DuplicateGroup { group: String },

    #[error(
        "constant '{constant}' in group '{group}' has type '{found}', but the group holds '{expected}' values"
    )]
    MixedTypes {
        group: String,
        constant: String,
        expected: ScalarType,
        found: ScalarType,
    },
}

impl ModelError {
    /// Name of the group the error points at, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            ModelError::EmptyName { .. } => None,
            ModelError::EmptyGroup { group }
            | ModelError::DuplicateConstant { group, .. }
            | ModelError::DuplicateGroup { group }
            | ModelError::MixedTypes { group, .. } => Some(group),
        }
    }
}
