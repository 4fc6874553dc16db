//! TypeScript-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{to_pascal_case, to_upper_snake};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Classes use PascalCase
    group_to_type: to_pascal_case,
    // Static members use UPPER_SNAKE
    constant_to_member: to_upper_snake,
    // Modules keep the source stem
    file_to_stem: str::to_string,
    reserved_words: &[
        // JavaScript reserved words
        "break", "case", "catch", "class", "const", "continue", "debugger", "default",
        "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "let", "new", "null", "return",
        "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while",
        "with", "yield",
        // TypeScript reserved words
        "any", "as", "async", "await", "boolean", "constructor", "declare", "get",
        "implements", "interface", "module", "namespace", "never", "number", "object",
        "package", "private", "protected", "public", "readonly", "require", "set", "static",
        "string", "symbol", "type", "undefined", "unknown",
        // Globals shadowed by generated classes
        "Array", "Boolean", "Error", "Map", "Number", "Object", "String",
    ],
    escape_reserved: escape_ts_reserved,
};
