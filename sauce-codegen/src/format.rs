//! Token formatting over field lists.
//!
//! These are the pure functions behind the template helpers. They depend on
//! nothing but the fields and the explicit flags passed in.

use xosauce_core::to_lower_camel;
use xosauce_ir::FieldDescriptor;

/// Comma separated parameter names, optionally followed by their types.
///
/// Fields whose name is in `ignore` are skipped. An empty name becomes
/// `v<i>`, where `i` counts emitted fields only.
///
/// `[ID int, Name string]` → `"id int, name string"`.
pub fn format_param_list(fields: &[FieldDescriptor], add_type: bool, ignore: &[&str]) -> String {
    let mut vals = Vec::new();
    for f in fields.iter().filter(|f| !ignore.contains(&f.name.as_str())) {
        let mut s = if f.name.is_empty() {
            format!("v{}", vals.len())
        } else {
            to_lower_camel(&f.name)
        };

        if add_type {
            s.push(' ');
            s.push_str(&format_type(f));
        }

        vals.push(s);
    }

    vals.join(", ")
}

/// Comma separated base types of the non-ignored fields.
pub fn format_return_list(fields: &[FieldDescriptor], ignore: &[&str]) -> String {
    fields
        .iter()
        .filter(|f| !ignore.contains(&f.name.as_str()))
        .map(|f| f.ty.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[]` if array, then `*` if pointer, then the base type.
pub fn format_type(field: &FieldDescriptor) -> String {
    let mut s = String::new();
    if field.is_array {
        s.push_str("[]");
    }
    if field.is_ptr {
        s.push('*');
    }
    s.push_str(&field.ty);
    s
}

/// The field's nil sentinel, empty if it is not nilable.
pub fn format_nil_equivalent(field: &FieldDescriptor) -> &str {
    &field.nil_type
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_and_name() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("ID", "int"),
            FieldDescriptor::new("Name", "string"),
        ]
    }

    #[test]
    fn test_param_list_with_types() {
        assert_eq!(format_param_list(&id_and_name(), true, &[]), "id int, name string");
    }

    #[test]
    fn test_param_list_names_only() {
        assert_eq!(format_param_list(&id_and_name(), false, &[]), "id, name");
    }

    #[test]
    fn test_param_list_ignores_names() {
        assert_eq!(format_param_list(&id_and_name(), true, &["ID"]), "name string");
    }

    #[test]
    fn test_placeholder_counts_emitted_fields_only() {
        let fields = vec![
            FieldDescriptor::new("ID", "int"),
            FieldDescriptor::new("", "string"),
            FieldDescriptor::new("", "bool"),
        ];
        assert_eq!(format_param_list(&fields, false, &["ID"]), "v0, v1");
        assert_eq!(format_param_list(&fields, true, &[]), "id int, v1 string, v2 bool");
    }

    #[test]
    fn test_placeholder_at_position_zero() {
        let fields = vec![FieldDescriptor::new("", "int")];
        assert_eq!(format_param_list(&fields, false, &[]), "v0");
        assert_eq!(format_param_list(&fields, true, &[]), "v0 int");
    }

    #[test]
    fn test_param_list_keeps_qualified_types() {
        let fields = vec![
            FieldDescriptor::new("db", "xo.XODB"),
            FieldDescriptor::new("id", "int"),
        ];
        assert_eq!(format_param_list(&fields, true, &[]), "db xo.XODB, id int");
    }

    #[test]
    fn test_empty_param_list() {
        assert_eq!(format_param_list(&[], true, &[]), "");
    }

    #[test]
    fn test_return_list() {
        assert_eq!(format_return_list(&id_and_name(), &[]), "int, string");
        assert_eq!(format_return_list(&id_and_name(), &["Name"]), "int");
        assert_eq!(format_return_list(&[FieldDescriptor::pointer("User")], &[]), "User");
    }

    #[test]
    fn test_format_type() {
        assert_eq!(format_type(&FieldDescriptor::slice("User", true)), "[]*User");
        assert_eq!(format_type(&FieldDescriptor::slice("User", false)), "[]User");
        assert_eq!(format_type(&FieldDescriptor::pointer("User")), "*User");
        assert_eq!(format_type(&FieldDescriptor::new("id", "int")), "int");
    }

    #[test]
    fn test_nil_equivalent() {
        assert_eq!(format_nil_equivalent(&FieldDescriptor::slice("User", true)), "nil");
        assert_eq!(format_nil_equivalent(&FieldDescriptor::new("id", "int")), "");
    }
}
