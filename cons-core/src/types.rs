use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Canonical scalar type of a constant.
///
/// Fixed when the input file is parsed and never inferred from the value.
/// Tags that are not recognized are kept as [`ScalarType::Unknown`] so
/// renderers can fall back to the target's dynamic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Int,
    #[default]
    String,
    Float,
    Bool,
    Unknown,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::String => "string",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
            ScalarType::Unknown => "unknown",
        }
    }

    /// Parse a type tag, keeping unrecognized tags as `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(ScalarType::Unknown)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ScalarType::String)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" => Ok(ScalarType::Int),
            "string" | "str" => Ok(ScalarType::String),
            "float" | "double" => Ok(ScalarType::Float),
            "bool" | "boolean" => Ok(ScalarType::Bool),
            _ => Err(format!(
                "unknown type '{}', expected 'int', 'string', 'float' or 'bool'",
                s
            )),
        }
    }
}
