//! Recognized generic container types and their metamodel attribute kinds.
//!
//! A persistent member whose raw (erased) type is one of these four names is classified as a plural attribute.
//! Every other reference type is singular.
//!
//! ## Notes
//! - Lookup via [`from_qualified_name`] compares **fully qualified** names, case-sensitively. A simple name such
//!   as `"List"` never matches.
//!
//! ## Examples
//! ```rust
//! use metagen_core::lang::containers::{self, ContainerKind};
//!
//! assert_eq!(containers::from_qualified_name("java.util.Map"), Some(ContainerKind::Map));
//! assert_eq!(containers::from_qualified_name("java.util.ArrayList"), None);
//! assert!(ContainerKind::Map.is_map());
//! ```

/// Stable identifier for a recognized container type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Collection,
    Set,
    List,
    Map,
}

impl ContainerKind {
    /// Whether the container is keyed (two type arguments: key and value).
    pub fn is_map(self) -> bool {
        matches!(self, ContainerKind::Map)
    }
}

/// Metadata for a recognized container type.
#[derive(Debug, Clone, Copy)]
pub struct ContainerInfo {
    pub id: ContainerKind,
    /// Fully qualified name of the raw container type, as reported by type inspection.
    pub qualified_name: &'static str,
    /// Fully qualified name of the metamodel attribute type rendered for this container.
    pub metamodel_type: &'static str,
}

/// Metamodel attribute type for single-valued attributes.
pub const SINGULAR_ATTRIBUTE: &str = "javax.persistence.metamodel.SingularAttribute";

/// Registry of recognized container types.
pub const CONTAINERS: &[ContainerInfo] = &[
    info(
        ContainerKind::Collection,
        "java.util.Collection",
        "javax.persistence.metamodel.CollectionAttribute",
    ),
    info(
        ContainerKind::Set,
        "java.util.Set",
        "javax.persistence.metamodel.SetAttribute",
    ),
    info(
        ContainerKind::List,
        "java.util.List",
        "javax.persistence.metamodel.ListAttribute",
    ),
    info(
        ContainerKind::Map,
        "java.util.Map",
        "javax.persistence.metamodel.MapAttribute",
    ),
];

/// Resolve a raw qualified type name to a [`ContainerKind`].
///
/// ## Parameters
/// - `qualified_name`: the erased, fully qualified type name (no type arguments).
///
/// ## Returns
/// - `Some(ContainerKind)` if the name is one of the recognized containers.
/// - `None` otherwise.
pub fn from_qualified_name(qualified_name: &str) -> Option<ContainerKind> {
    CONTAINERS
        .iter()
        .find(|c| c.qualified_name == qualified_name)
        .map(|c| c.id)
}

/// Return the full metadata entry for a container kind.
pub fn info_for(id: ContainerKind) -> &'static ContainerInfo {
    match id {
        ContainerKind::Collection => &CONTAINERS[0],
        ContainerKind::Set => &CONTAINERS[1],
        ContainerKind::List => &CONTAINERS[2],
        ContainerKind::Map => &CONTAINERS[3],
    }
}

/// Return the metamodel attribute type for a container kind (e.g. `"javax.persistence.metamodel.ListAttribute"`).
pub fn metamodel_type(id: ContainerKind) -> &'static str {
    info_for(id).metamodel_type
}

const fn info(id: ContainerKind, qualified_name: &'static str, metamodel_type: &'static str) -> ContainerInfo {
    ContainerInfo {
        id,
        qualified_name,
        metamodel_type,
    }
}
