use heck::ToSnakeCase;
use proc_macro2::{Ident, Span};

/// Utilities for generating consistent property and accessor names

/// Derive the public property name of an observable field
/// (e.g., `_counter` -> `Counter`, `m_health` -> `Health`).
///
/// At most one prefix is stripped, and only if something remains after it.
/// `prefixes` must already be ordered longest first.
pub fn property_name(field_name: &str, prefixes: &[&str]) -> String {
    let field_name = field_name.strip_prefix("r#").unwrap_or(field_name);
    let stripped = prefixes
        .iter()
        .find_map(|prefix| field_name.strip_prefix(prefix).filter(|rest| !rest.is_empty()))
        .unwrap_or(field_name);

    let mut chars = stripped.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// A derived name is usable when its accessor can be spelled as an
/// identifier, raw or not (e.g., `_double` -> `double()` is fine, `_1st` is
/// not).
pub fn is_valid_property_name(name: &str) -> bool {
    let accessor = accessor_name(name);
    accessor.chars().next().is_some_and(char::is_alphabetic)
        && !matches!(accessor.as_str(), "self" | "super" | "crate")
}

/// Accessor stem for a property (e.g., `HitPoints` -> `hit_points`)
pub fn accessor_name(property: &str) -> String {
    property.to_snake_case()
}

/// Setter name for a property (e.g., `Counter` -> `set_counter`)
pub fn setter_name(property: &str) -> String {
    format!("set_{}", accessor_name(property))
}

/// Words reserved by a newer edition that `syn` still accepts as plain
/// identifiers.
const EDITION_RESERVED: &[&str] = &["gen"];

/// Build an identifier, falling back to a raw identifier for keywords
/// (e.g., property `Type` -> getter `r#type`).
pub fn ident(name: &str) -> Ident {
    if !EDITION_RESERVED.contains(&name) && syn::parse_str::<Ident>(name).is_ok() {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}

/// Name a generated item can be referred to by in source text,
/// without the raw-identifier marker.
pub fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}
