//! Naming rules for persistent properties and metamodel identities.
//!
//! ## Examples
//! ```rust
//! use metagen_core::naming;
//!
//! assert_eq!(naming::property_name("getTags").as_deref(), Some("tags"));
//! assert_eq!(naming::property_name("isActive").as_deref(), Some("active"));
//! assert_eq!(naming::property_name("getURL").as_deref(), Some("URL"));
//! assert_eq!(naming::property_name("toString"), None);
//! assert_eq!(naming::package_of("com.acme.Order"), "com.acme");
//! ```

/// Prefixes that make a method an accessor candidate, in match order.
pub const ACCESSOR_PREFIXES: &[&str] = &["get", "is"];

/// Default suffix appended to an entity's package to form its metamodel package.
pub const METAMODEL_PACKAGE_SUFFIX: &str = ".metamodel";

/// Default suffix appended to an entity's simple name to form its metamodel class name.
pub const METAMODEL_CLASS_SUFFIX: &str = "_";

/// Check whether a method name has an accessor prefix.
///
/// ## Notes
/// - This is a prefix test only: `island` is an accessor candidate (`is` + `land`). Return-type shape decides the
///   rest.
pub fn is_accessor_name(method_name: &str) -> bool {
    ACCESSOR_PREFIXES.iter().any(|prefix| method_name.starts_with(prefix))
}

/// Derive the property name an accessor method exposes.
///
/// ## Returns
/// - `Some(name)` with the prefix stripped and the first character lower-cased.
/// - `Some(name)` unchanged after the prefix when its first two characters are upper-case (`getURL` -> `URL`).
/// - `None` if the method has no accessor prefix or nothing follows the prefix.
pub fn property_name(method_name: &str) -> Option<String> {
    let rest = ACCESSOR_PREFIXES
        .iter()
        .find_map(|prefix| method_name.strip_prefix(prefix))?;

    let mut chars = rest.chars();
    let first = chars.next()?;
    if first.is_uppercase() && chars.clone().next().is_some_and(char::is_uppercase) {
        return Some(rest.to_string());
    }
    let mut name = String::with_capacity(rest.len());
    name.extend(first.to_lowercase());
    name.push_str(chars.as_str());
    Some(name)
}

/// Return the package part of a qualified name (empty for the default package).
pub fn package_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(idx) => &qualified_name[..idx],
        None => "",
    }
}

/// Return the simple (unqualified) part of a qualified name.
pub fn simple_name(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(idx) => &qualified_name[idx + 1..],
        None => qualified_name,
    }
}

/// Derive the metamodel package for an entity package.
///
/// ## Notes
/// - For the default (empty) package the suffix is used without its leading dot.
pub fn metamodel_package(package: &str, suffix: &str) -> String {
    if package.is_empty() {
        suffix.trim_start_matches('.').to_string()
    } else {
        format!("{package}{suffix}")
    }
}

/// Derive the metamodel class name for an entity simple name.
pub fn metamodel_class_name(simple_name: &str, suffix: &str) -> String {
    format!("{simple_name}{suffix}")
}
