//! Shared naming helpers.

use heck::ToSnakeCase;

/// Length in bytes of the first camel-case word of `name`.
///
/// Word boundaries follow the usual camel → snake rules, so initialisms
/// stay together (`"UserID"` → 4, `"HTTPServer"` → 4, `"ID"` → 2).
pub fn first_word_len(name: &str) -> usize {
    let snake = name.to_snake_case();
    snake.split('_').next().map_or(0, str::len)
}

/// Lowercase the first camel-case word of `name`, keeping the rest verbatim.
///
/// `"UserID"` → `"userID"`, `"Name"` → `"name"`, `"db"` → `"db"`.
pub fn to_lower_camel(name: &str) -> String {
    let n = first_word_len(name);
    match (name.get(..n), name.get(n..)) {
        (Some(head), Some(rest)) => format!("{}{}", head.to_lowercase(), rest),
        _ => name.to_snake_case(),
    }
}

/// Logical entity name of a source unit: its file name up to the first `.`.
///
/// `"user.xo.go"` → `"user"`.
pub fn unit_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
