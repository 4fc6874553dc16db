//! Python-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{sanitize_identifier, to_pascal_case, to_upper_snake};

const PY_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

fn escape_py_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Module stems must be importable, e.g. `user-status` -> `user_status`.
fn py_module_stem(name: &str) -> String {
    let stem = sanitize_identifier(name);
    if PY_KEYWORDS.contains(&stem.as_str()) {
        escape_py_reserved(&stem)
    } else {
        stem
    }
}

/// Python naming conventions.
pub const PY_NAMING: NamingConvention = NamingConvention {
    // Classes use PascalCase
    group_to_type: to_pascal_case,
    // Class attributes use UPPER_SNAKE
    constant_to_member: to_upper_snake,
    file_to_stem: py_module_stem,
    reserved_words: PY_KEYWORDS,
    escape_reserved: escape_py_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_py_naming() {
        assert_eq!(PY_NAMING.type_name("user_status"), "UserStatus");
        assert_eq!(PY_NAMING.member_name("inactive"), "INACTIVE");
        assert_eq!(PY_NAMING.flat_name("status", "active"), "STATUS_ACTIVE");
        assert_eq!(PY_NAMING.file_stem("user_status"), "user_status");
    }

    #[test]
    fn test_py_module_stem_is_importable() {
        assert_eq!(PY_NAMING.file_stem("user-status"), "user_status");
        assert_eq!(PY_NAMING.file_stem("2024 codes"), "_2024_codes");
        assert_eq!(PY_NAMING.file_stem("import"), "import_");
        assert_eq!(PY_NAMING.file_stem("UserStatus"), "UserStatus");
    }

    #[test]
    fn test_py_reserved_words() {
        assert!(PY_NAMING.is_reserved("None"));
        assert!(PY_NAMING.is_reserved("lambda"));
        assert_eq!(PY_NAMING.type_name("none"), "None_");
        assert_eq!(PY_NAMING.type_name("true"), "True_");
    }
}
