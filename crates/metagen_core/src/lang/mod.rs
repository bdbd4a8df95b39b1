//! Persistence-mapping vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`containers::ContainerKind`], [`primitives::PrimitiveKind`]) and look up
//! qualified names and metadata via registry tables, instead of scattering string comparisons through the
//! classifier.
//!
//! ## Examples
//! ```rust
//! use metagen_core::lang::containers::{self, ContainerKind};
//!
//! assert_eq!(containers::from_qualified_name("java.util.Set"), Some(ContainerKind::Set));
//! assert_eq!(containers::metamodel_type(ContainerKind::Set), "javax.persistence.metamodel.SetAttribute");
//! ```

pub mod annotations;
pub mod containers;
pub mod primitives;
