use heck::ToSnakeCase;

/// Derives a column name from a declared field name.
///
/// `userName` and `UserName` both become `user_name`; names that are already
/// snake case are returned unchanged.
pub fn column_name(field: &str) -> String {
    field.to_snake_case()
}

/// Derives a table name from a Rust type name.
///
/// Module paths and generic arguments are stripped before conversion, so
/// `app::model::UserInfo` becomes `user_info`.
pub fn table_name(type_name: &str) -> String {
    let base = type_name.split('<').next().unwrap_or(type_name);
    let simple = base.rsplit("::").next().unwrap_or(base);
    simple.to_snake_case()
}
