//! Go-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{sanitize_identifier, to_camel_case, to_pascal_case};

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    // Exported variables use PascalCase
    group_to_type: to_pascal_case,
    // Exported struct fields use PascalCase
    constant_to_member: to_pascal_case,
    file_to_stem: str::to_string,
    reserved_words: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else",
        "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
        "package", "range", "return", "select", "struct", "switch", "type", "var",
    ],
    escape_reserved: escape_go_reserved,
};

/// Name of the unexported struct backing a group (e.g., "user_status" -> "userStatusCons").
pub fn struct_name(group: &str) -> String {
    sanitize_identifier(&format!("{}Cons", to_camel_case(group)))
}
