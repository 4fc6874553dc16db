//! Java-specific naming conventions.

use cons_coder_codegen::language::NamingConvention;
use cons_coder_core::{sanitize_identifier, to_pascal_case, to_upper_snake};

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// The file stem doubles as the outer class name, so it must be a valid identifier.
fn java_file_stem(name: &str) -> String {
    sanitize_identifier(&to_pascal_case(name))
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    // Classes use PascalCase
    group_to_type: to_pascal_case,
    // Static final fields use UPPER_SNAKE
    constant_to_member: to_upper_snake,
    file_to_stem: java_file_stem,
    reserved_words: &[
        // Java keywords and literals
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
        "final", "finally", "float", "for", "goto", "if", "implements", "import",
        "instanceof", "int", "interface", "long", "native", "new", "null", "package",
        "private", "protected", "public", "return", "short", "static", "strictfp", "super",
        "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
        "void", "volatile", "while",
        // Types referenced by generated code
        "Arrays", "Boolean", "Collections", "Double", "Integer", "LinkedHashMap", "List", "Map", "Object",
        "Objects", "Optional", "String",
    ],
    escape_reserved: escape_java_reserved,
};
