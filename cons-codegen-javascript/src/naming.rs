//! JavaScript-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{to_pascal_case, to_upper_snake};

fn escape_js_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// JavaScript naming conventions.
pub const JS_NAMING: NamingConvention = NamingConvention {
    // Classes use PascalCase
    group_to_type: to_pascal_case,
    // Static fields use UPPER_SNAKE
    constant_to_member: to_upper_snake,
    // Modules keep the source stem
    file_to_stem: str::to_string,
    reserved_words: &[
        "await", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "enum", "export", "extends", "false", "finally",
        "for", "function", "if", "implements", "import", "in", "instanceof", "interface",
        "let", "module", "new", "null", "package", "private", "protected", "public",
        "require", "return", "static", "super", "switch", "this", "throw", "true", "try",
        "typeof", "var", "void", "while", "with", "yield",
        // Globals shadowed by generated classes
        "Array", "Boolean", "Error", "Map", "Number", "Object", "String",
    ],
    escape_reserved: escape_js_reserved,
};
