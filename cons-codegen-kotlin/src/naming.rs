//! Kotlin-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{to_pascal_case, to_upper_snake};

fn escape_kotlin_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Kotlin naming conventions.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    // Objects use PascalCase
    group_to_type: to_pascal_case,
    // Constants use UPPER_SNAKE
    constant_to_member: to_upper_snake,
    file_to_stem: to_pascal_case,
    reserved_words: &[
        // Hard keywords
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
        // Types referenced by generated code
        "Any", "Boolean", "Double", "Int", "List", "Map", "String",
    ],
    escape_reserved: escape_kotlin_reserved,
};
