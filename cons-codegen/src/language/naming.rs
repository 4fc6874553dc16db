//! Naming conventions for the target languages.

use cons_coder_core::{sanitize_identifier, to_upper_snake};

/// Target-specific naming conventions.
///
/// Defines how to transform group, constant and file names, and how to
/// handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform group name to type name (e.g., "user_status" -> "UserStatus")
    pub group_to_type: fn(&str) -> String,
    /// Transform constant name to member name (e.g., "active" -> "ACTIVE")
    pub constant_to_member: fn(&str) -> String,
    /// Transform the source file stem to an output stem (e.g., "user" -> "User")
    pub file_to_stem: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, group: &str) -> String {
        let transformed = sanitize_identifier(&(self.group_to_type)(group));
        self.safe_name(&transformed)
    }

    /// Member identifier as a plain key, before reserved-word escaping.
    pub fn member_key(&self, constant: &str) -> String {
        sanitize_identifier(&(self.constant_to_member)(constant))
    }

    /// Transform and make safe for use as a member name.
    pub fn member_name(&self, constant: &str) -> String {
        self.safe_name(&self.member_key(constant))
    }

    /// Flat `GROUP_CONSTANT` name used by the minimal flavor.
    pub fn flat_name(&self, group: &str, constant: &str) -> String {
        let joined = format!("{}_{}", to_upper_snake(group), to_upper_snake(constant));
        self.safe_name(&sanitize_identifier(&joined))
    }

    /// Transform the source file stem to an output file stem.
    pub fn file_stem(&self, file_name: &str) -> String {
        // Targets whose stems are module names escape inside `file_to_stem`
        (self.file_to_stem)(file_name)
    }
}
