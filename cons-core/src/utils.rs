//! Shared utility functions for code generation.

use chrono::NaiveDateTime;

/// Timestamp layout used in generated headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(['_', '-', ' ']).filter(|part| !part.is_empty())
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "user_status" -> "UserStatus")
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "user_status" -> "userStatus")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to UPPER_SNAKE (e.g., "user-status" -> "USER_STATUS")
pub fn to_upper_snake(s: &str) -> String {
    s.to_uppercase().replace(['-', ' '], "_")
}

/// Convert a token to English title words (e.g., "user_active" -> "User Active")
pub fn to_title_words(s: &str) -> String {
    words(s).map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Replace characters that cannot appear in an identifier.
///
/// Keeps ASCII letters, digits and underscores, maps everything else to
/// `_` and prefixes a leading digit with `_`.
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    match result.chars().next() {
        None => result.push('_'),
        Some(c) if c.is_ascii_digit() => result.insert(0, '_'),
        Some(_) => {}
    }
    result
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
