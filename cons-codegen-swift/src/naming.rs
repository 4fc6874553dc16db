//! Swift-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{to_camel_case, to_pascal_case};

fn escape_swift_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Swift naming conventions.
pub const SWIFT_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    group_to_type: to_pascal_case,
    // Static members use lowerCamelCase
    constant_to_member: to_camel_case,
    file_to_stem: to_pascal_case,
    reserved_words: &[
        "Any", "Self", "Type", "as", "associatedtype", "break", "case", "catch", "class",
        "continue", "default", "defer", "deinit", "do", "else", "enum", "extension",
        "fallthrough", "false", "fileprivate", "for", "func", "guard", "if", "import", "in",
        "init", "inout", "internal", "is", "let", "nil", "open", "operator", "private",
        "protocol", "public", "repeat", "rethrows", "return", "self", "static", "struct",
        "subscript", "super", "switch", "throw", "throws", "true", "try", "typealias", "var",
        "where", "while",
    ],
    escape_reserved: escape_swift_reserved,
};
