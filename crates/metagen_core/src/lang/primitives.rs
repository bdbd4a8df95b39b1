//! Primitive type vocabulary.
//!
//! Metamodel attributes are generic over their value type, so a primitive member is rendered through its
//! canonical (boxed) reference type: `int` becomes `java.lang.Integer`.
//!
//! ## Examples
//! ```rust
//! use metagen_core::lang::primitives::{self, PrimitiveKind};
//!
//! assert_eq!(primitives::from_keyword("long"), Some(PrimitiveKind::Long));
//! assert_eq!(primitives::canonical_name(PrimitiveKind::Long), "java.lang.Long");
//! ```

/// Stable identifier for a primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

/// Metadata for a primitive kind.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveKind,
    /// Source-level keyword (e.g. `"int"`).
    pub keyword: &'static str,
    /// Canonical qualified type name used in generated declarations (e.g. `"java.lang.Integer"`).
    pub canonical: &'static str,
}

/// Registry of primitive kinds.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveKind::Boolean, "boolean", "java.lang.Boolean"),
    info(PrimitiveKind::Byte, "byte", "java.lang.Byte"),
    info(PrimitiveKind::Short, "short", "java.lang.Short"),
    info(PrimitiveKind::Int, "int", "java.lang.Integer"),
    info(PrimitiveKind::Long, "long", "java.lang.Long"),
    info(PrimitiveKind::Char, "char", "java.lang.Character"),
    info(PrimitiveKind::Float, "float", "java.lang.Float"),
    info(PrimitiveKind::Double, "double", "java.lang.Double"),
];

/// Resolve a source keyword to a [`PrimitiveKind`].
///
/// ## Notes
/// - `void` is not a primitive kind here: it has no value and cannot back an attribute.
pub fn from_keyword(keyword: &str) -> Option<PrimitiveKind> {
    PRIMITIVES.iter().find(|p| p.keyword == keyword).map(|p| p.id)
}

/// Return the source keyword for a primitive kind.
pub fn keyword(id: PrimitiveKind) -> &'static str {
    info_for(id).keyword
}

/// Return the canonical qualified type name for a primitive kind.
pub fn canonical_name(id: PrimitiveKind) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a primitive kind.
pub fn info_for(id: PrimitiveKind) -> &'static PrimitiveInfo {
    let index = match id {
        PrimitiveKind::Boolean => 0,
        PrimitiveKind::Byte => 1,
        PrimitiveKind::Short => 2,
        PrimitiveKind::Int => 3,
        PrimitiveKind::Long => 4,
        PrimitiveKind::Char => 5,
        PrimitiveKind::Float => 6,
        PrimitiveKind::Double => 7,
    };
    &PRIMITIVES[index]
}

const fn info(id: PrimitiveKind, keyword: &'static str, canonical: &'static str) -> PrimitiveInfo {
    PrimitiveInfo { id, keyword, canonical }
}
