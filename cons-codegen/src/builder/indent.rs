//! Indentation configuration for code generation.

use cons_coder_manifest::Target;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Python, Java, Kotlin, Swift).
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JavaScript).
    pub const TWO: Self = Self::Spaces(2);

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// Conventional indentation of a target language.
    pub fn for_target(target: Target) -> Self {
        match target {
            Target::Go => Self::GO,
            Target::TypeScript | Target::JavaScript => Self::TWO,
            Target::Python | Target::Java | Target::Swift | Target::Kotlin => Self::FOUR,
        }
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_for_target() {
        assert_eq!(Indent::for_target(Target::Go), Indent::Tab);
        assert_eq!(Indent::for_target(Target::TypeScript), Indent::Spaces(2));
        assert_eq!(Indent::for_target(Target::JavaScript), Indent::Spaces(2));
        assert_eq!(Indent::for_target(Target::Python), Indent::Spaces(4));
        assert_eq!(Indent::for_target(Target::Kotlin), Indent::Spaces(4));
    }
}
