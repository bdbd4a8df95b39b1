//! Provide shared, pure vocabulary for the metagen metamodel generator.
//!
//! This crate is intentionally small and dependency-free. It holds the fixed tables the classification
//! engine consults (recognized container types, identifier markers, primitive kinds) and the naming rules used
//! to derive property names and metamodel identities.
//!
//! ## Notes
//!
//! - No IO, no global mutable state, no generator-specific types.
//! - Every table is `const` data: initialized once, never mutated, safe to read from any thread.

pub mod lang;
pub mod naming;
