//! Value literals in target syntax.

use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// How a target spells string and boolean literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralStyle {
    pub quote: char,
    /// Write booleans as `True`/`False`.
    pub title_case_bools: bool,
}

impl LiteralStyle {
    pub const DOUBLE: Self = Self {
        quote: '"',
        title_case_bools: false,
    };

    pub const SINGLE: Self = Self {
        quote: '\'',
        title_case_bools: false,
    };

    pub const PYTHON: Self = Self {
        quote: '"',
        title_case_bools: true,
    };

    pub fn for_target(target: Target) -> Self {
        match target {
            Target::Python => Self::PYTHON,
            Target::TypeScript | Target::JavaScript => Self::SINGLE,
            Target::Go | Target::Java | Target::Swift | Target::Kotlin => Self::DOUBLE,
        }
    }

    /// Wrap text in the target's quote. Text is not escaped.
    pub fn quote(&self, text: &str) -> String {
        format!("{q}{}{q}", text, q = self.quote)
    }

    /// Format a canonical value as a literal of type `ty`.
    pub fn format_value(&self, value: &str, ty: ScalarType) -> String {
        match ty {
            ScalarType::String => self.quote(value),
            ScalarType::Bool if self.title_case_bools => match value {
                "true" => "True".to_string(),
                "false" => "False".to_string(),
                other => other.to_string(),
            },
            _ => value.to_string(),
        }
    }
}

/// Format a canonical value as a literal in `target` syntax.
pub fn format_value(value: &str, ty: ScalarType, target: Target) -> String {
    LiteralStyle::for_target(target).format_value(value, ty)
}
