#![forbid(unsafe_code)]
//! Static metamodel generator
//!
//! Given entity declarations that an upstream front end has already resolved and typed, metagen derives for
//! each entity the list of its persistent attributes (singular, collection, map) and renders a companion
//! metamodel class for type-safe queries.
//!
//! The pipeline is:
//! 1. [`inspect`] - read-only view of resolved declarations (`TypeInspector`)
//! 2. [`entity`] - decide the member-access strategy, then classify members ([`classify`])
//! 3. [`emit`] - render the metamodel class
//! 4. [`generate`] - batch driver, one isolated unit of work per entity
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Classification**: never fails. Members that cannot be classified yield `None`; the caller decides whether
//!   that deserves a diagnostic.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod classify;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod entity;
pub mod generate;
pub mod inspect;

pub use classify::{AttributeDescriptor, AttributeShape, CollectionKind, classify};
pub use config::GeneratorConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use emit::{CodeEmitter, MetamodelEmitter};
pub use entity::{AccessStrategy, EntityDescriptor, build_attribute_strategy, collect_attributes};
pub use generate::{GenerateError, GeneratedFile, GenerationOutput, generate, generate_model, write_files};
pub use inspect::{DeclarationModel, Member, MemberKind, TypeDecl, TypeInspector, TypeRef};
