//! Well-known persistence annotation names.
//!
//! Only a handful of annotations matter to classification: the entity-level markers that make a type eligible
//! for a metamodel, and the identifier markers that decide the member-access strategy.

/// Marks a type as a persistent entity.
pub const ENTITY: &str = "javax.persistence.Entity";

/// Marks a type whose mapping is inherited by entities.
pub const MAPPED_SUPERCLASS: &str = "javax.persistence.MappedSuperclass";

/// Marks a type whose state is embedded in its owning entity.
pub const EMBEDDABLE: &str = "javax.persistence.Embeddable";

/// Primary-key marker.
pub const ID: &str = "javax.persistence.Id";

/// Embedded (composite) identifier marker.
pub const EMBEDDED_ID: &str = "javax.persistence.EmbeddedId";

/// Annotations that make a type eligible for metamodel generation.
pub const METAMODEL_TARGETS: &[&str] = &[ENTITY, MAPPED_SUPERCLASS, EMBEDDABLE];

/// Annotations that mark the identifier of an entity.
pub const IDENTIFIER_MARKERS: &[&str] = &[ID, EMBEDDED_ID];

/// Check whether a qualified annotation name is an identifier marker.
pub fn is_identifier_marker(qualified_name: &str) -> bool {
    IDENTIFIER_MARKERS.contains(&qualified_name)
}

/// Check whether a qualified annotation name makes its type a metamodel target.
pub fn is_metamodel_target(qualified_name: &str) -> bool {
    METAMODEL_TARGETS.contains(&qualified_name)
}

/// Rendered on every metamodel class.
pub const STATIC_METAMODEL: &str = "javax.persistence.metamodel.StaticMetamodel";

/// Optional provenance marker on generated classes.
pub const GENERATED: &str = "javax.annotation.Generated";
