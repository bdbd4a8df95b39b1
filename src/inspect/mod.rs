//! Declared-type inspection
//!
//! The classification engine never parses source. It reads an already resolved, typed view of declarations
//! through the [`TypeInspector`] trait. [`model::DeclarationModel`] is the in-memory implementation used by the
//! CLI and the tests.
//!
//! ## Module Organization
//!
//! - `mod.rs` - Type references, members, annotations, and the inspector trait
//! - `model.rs` - JSON-backed declaration model implementing `TypeInspector`

pub mod model;

use std::fmt;

use metagen_core::lang::primitives;
use serde::{Deserialize, Serialize};

pub use model::{DeclarationModel, ModelError, TypeDecl};

/// Syntactic kind of an enclosed member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Method => write!(f, "method"),
        }
    }
}

/// A reference to an annotation type applied to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationRef {
    pub qualified_name: String,
}

impl AnnotationRef {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }
}

/// A declared (class or interface) type with its type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    /// Raw, erased, fully qualified name (e.g. `java.util.Map`).
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeRef>,
}

/// A resolved type reference.
///
/// This is a closed set of shapes. Classification dispatches on it with a single `match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A primitive, by source keyword (`int`, `boolean`, ...).
    Primitive(String),
    /// A class or interface type.
    Declared(DeclaredType),
    /// The type of a method: only its return type matters here.
    Executable { returns: Box<TypeRef> },
    Array(Box<TypeRef>),
    TypeVariable(String),
    Void,
}

impl TypeRef {
    pub fn primitive(keyword: impl Into<String>) -> Self {
        TypeRef::Primitive(keyword.into())
    }

    /// A non-generic declared type.
    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::generic(name, Vec::new())
    }

    /// A declared type with type arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Declared(DeclaredType {
            name: name.into(),
            args,
        })
    }

    pub fn executable(returns: TypeRef) -> Self {
        TypeRef::Executable {
            returns: Box::new(returns),
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(keyword) => write!(f, "{}", keyword),
            TypeRef::Declared(declared) => {
                write!(f, "{}", declared.name)?;
                if !declared.args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in declared.args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Executable { returns } => write!(f, "(){}", returns),
            TypeRef::Array(element) => write!(f, "{}[]", element),
            TypeRef::TypeVariable(name) => write!(f, "{}", name),
            TypeRef::Void => write!(f, "void"),
        }
    }
}

/// A member enclosed by a type declaration.
///
/// For methods, `ty` is an [`TypeRef::Executable`] wrapping the return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub annotations: Vec<AnnotationRef>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Member {
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            annotations: Vec::new(),
            ty,
        }
    }

    /// A method member returning `returns`.
    pub fn method(name: impl Into<String>, returns: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            annotations: Vec::new(),
            ty: TypeRef::executable(returns),
        }
    }

    pub fn annotated(mut self, qualified_name: impl Into<String>) -> Self {
        self.annotations.push(AnnotationRef::new(qualified_name));
        self
    }

    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }
}

/// Read-only view of resolved declarations.
///
/// Implementations are externally owned data sources: nothing in the generator mutates them, so an
/// implementation that is `Sync` can serve several entity passes at once.
pub trait TypeInspector {
    /// All members enclosed by `owner`, fields and methods, in declaration order.
    ///
    /// Unknown owners yield no members.
    fn enclosed_members(&self, owner: &str) -> Vec<&Member>;

    /// Members of `owner` of one kind, in declaration order.
    fn members(&self, owner: &str, kind: MemberKind) -> Vec<&Member> {
        self.enclosed_members(owner)
            .into_iter()
            .filter(|m| m.kind == kind)
            .collect()
    }

    /// Every annotation present on `member`.
    fn annotations<'a>(&'a self, member: &'a Member) -> &'a [AnnotationRef] {
        &member.annotations
    }

    /// Decompose a declared type into its raw name and type arguments.
    ///
    /// ## Returns
    /// - `None` if `ty` is not a declared type.
    fn resolve_declared<'a>(&'a self, ty: &'a TypeRef) -> Option<&'a DeclaredType> {
        match ty {
            TypeRef::Declared(declared) => Some(declared),
            _ => None,
        }
    }

    fn is_primitive(&self, ty: &TypeRef) -> bool {
        self.canonical_primitive_name(ty).is_some()
    }

    /// Canonical type name for a primitive type (e.g. `java.lang.Integer` for `int`).
    fn canonical_primitive_name(&self, ty: &TypeRef) -> Option<String> {
        match ty {
            TypeRef::Primitive(keyword) => {
                primitives::from_keyword(keyword).map(|kind| primitives::canonical_name(kind).to_string())
            }
            _ => None,
        }
    }

    /// Qualified package of a declared type.
    ///
    /// ## Returns
    /// - `None` if the type is unknown to this inspector.
    fn package_of(&self, type_name: &str) -> Option<String>;
}
