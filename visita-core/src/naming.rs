//! Handler naming convention.
//!
//! A visitor special-cases a type by declaring a handler named
//! `visit_<type name, lower-cased>`. Nodes with no matching handler anywhere
//! in their chain go to [`FALLBACK_HANDLER`].

/// Prefix of every type-specific handler name.
pub const HANDLER_PREFIX: &str = "visit_";

/// Name of the mandatory fallback handler.
pub const FALLBACK_HANDLER: &str = "generic_visit";

/// Derive the handler name for a type name.
///
/// ```rust
/// assert_eq!(visita_core::handler_name("HttpRequest"), "visit_httprequest");
/// ```
pub fn handler_name(type_name: &str) -> String {
    let mut name = String::with_capacity(HANDLER_PREFIX.len() + type_name.len());
    name.push_str(HANDLER_PREFIX);
    name.push_str(&type_name.to_lowercase());
    name
}

/// Whether `name` follows the handler convention: the prefix followed by a
/// non-empty, already lower-cased type name.
pub fn is_handler_name(name: &str) -> bool {
    match name.strip_prefix(HANDLER_PREFIX) {
        Some(rest) => !rest.is_empty() && rest.to_lowercase() == rest,
        None => false,
    }
}
