//! JSON-backed declaration model
//!
//! The model is the resolved view an upstream front end hands to the generator: one entry per declared type,
//! with its annotations and enclosed members. It is loaded once and only read afterwards.
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "qualified_name": "com.acme.Order",
//!       "annotations": ["javax.persistence.Entity"],
//!       "members": [
//!         { "name": "id", "kind": "field", "annotations": ["javax.persistence.Id"],
//!           "type": { "declared": { "name": "java.lang.Long" } } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use metagen_core::lang::annotations;
use metagen_core::naming;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AnnotationRef, Member, MemberKind, TypeInspector};

/// Errors raised while loading a declaration model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid declaration model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate type declaration '{0}'")]
    DuplicateType(String),

    #[error("duplicate field '{field}' on '{owner}'")]
    DuplicateField { owner: String, field: String },

    #[error("accessor '{method}' on '{owner}' repeats property '{property}'")]
    DuplicateProperty {
        owner: String,
        method: String,
        property: String,
    },
}

/// One declared type with its annotations and enclosed members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub qualified_name: String,
    #[serde(default)]
    pub annotations: Vec<AnnotationRef>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Shorthand for a type annotated as a persistent entity.
    pub fn entity(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name).annotated(annotations::ENTITY)
    }

    pub fn annotated(mut self, qualified_name: impl Into<String>) -> Self {
        self.annotations.push(AnnotationRef::new(qualified_name));
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Whether this type should receive a metamodel class.
    pub fn is_metamodel_target(&self) -> bool {
        self.annotations
            .iter()
            .any(|a| annotations::is_metamodel_target(&a.qualified_name))
    }
}

#[derive(Deserialize)]
struct RawModel {
    #[serde(default)]
    types: Vec<TypeDecl>,
}

/// In-memory declaration model, indexed by qualified type name.
#[derive(Debug, Clone, Default)]
pub struct DeclarationModel {
    types: Vec<TypeDecl>,
    index: HashMap<String, usize>,
}

impl DeclarationModel {
    /// Build a model from type declarations.
    ///
    /// ## Errors
    /// - [`ModelError::DuplicateType`] if two declarations share a qualified name.
    /// - [`ModelError::DuplicateField`] if a type declares two fields with the same name.
    /// - [`ModelError::DuplicateProperty`] if two accessors expose the same property (`getActive` and
    ///   `isActive`, or an overloaded `getX`). Other methods may overload.
    pub fn new(types: Vec<TypeDecl>) -> Result<Self, ModelError> {
        let mut index = HashMap::with_capacity(types.len());
        for (i, decl) in types.iter().enumerate() {
            if index.insert(decl.qualified_name.clone(), i).is_some() {
                return Err(ModelError::DuplicateType(decl.qualified_name.clone()));
            }

            let mut fields = HashSet::new();
            for member in decl.members.iter().filter(|m| m.kind == MemberKind::Field) {
                if !fields.insert(member.name.as_str()) {
                    return Err(ModelError::DuplicateField {
                        owner: decl.qualified_name.clone(),
                        field: member.name.clone(),
                    });
                }
            }

            let mut properties = HashSet::new();
            let accessors = decl
                .members
                .iter()
                .filter(|m| m.kind == MemberKind::Method && naming::is_accessor_name(&m.name));
            for member in accessors {
                let Some(property) = naming::property_name(&member.name) else {
                    continue;
                };
                if !properties.insert(property.clone()) {
                    return Err(ModelError::DuplicateProperty {
                        owner: decl.qualified_name.clone(),
                        method: member.name.clone(),
                        property,
                    });
                }
            }
        }
        Ok(Self { types, index })
    }

    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        let raw: RawModel = serde_json::from_str(source)?;
        Self::new(raw.types)
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let source = fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeDecl> {
        self.index.get(qualified_name).map(|&i| &self.types[i])
    }

    /// Qualified names of every type that receives a metamodel class, in declaration order.
    pub fn metamodel_targets(&self) -> Vec<&str> {
        self.types
            .iter()
            .filter(|t| t.is_metamodel_target())
            .map(|t| t.qualified_name.as_str())
            .collect()
    }
}

impl TypeInspector for DeclarationModel {
    fn enclosed_members(&self, owner: &str) -> Vec<&Member> {
        self.get(owner)
            .map(|decl| decl.members.iter().collect())
            .unwrap_or_default()
    }

    fn package_of(&self, type_name: &str) -> Option<String> {
        self.get(type_name)
            .map(|decl| naming::package_of(&decl.qualified_name).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::TypeRef;

    const ORDER_JSON: &str = r#"{
        "types": [
            {
                "qualified_name": "com.acme.Order",
                "annotations": ["javax.persistence.Entity"],
                "members": [
                    { "name": "id", "kind": "field", "annotations": ["javax.persistence.Id"],
                      "type": { "declared": { "name": "java.lang.Long" } } },
                    { "name": "getId", "kind": "method",
                      "type": { "executable": { "returns": { "declared": { "name": "java.lang.Long" } } } } }
                ]
            },
            { "qualified_name": "com.acme.Money" }
        ]
    }"#;

    #[test]
    fn test_from_json_indexes_types() {
        let model = DeclarationModel::from_json(ORDER_JSON).unwrap();
        assert_eq!(model.types().len(), 2);
        assert!(model.get("com.acme.Order").is_some());
        assert!(model.get("com.acme.Missing").is_none());
        assert_eq!(model.metamodel_targets(), vec!["com.acme.Order"]);
    }

    #[test]
    fn test_members_filtered_by_kind() {
        let model = DeclarationModel::from_json(ORDER_JSON).unwrap();
        assert_eq!(model.enclosed_members("com.acme.Order").len(), 2);
        let fields = model.members("com.acme.Order", MemberKind::Field);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "id");
        let methods = model.members("com.acme.Order", MemberKind::Method);
        assert_eq!(methods[0].name, "getId");
        assert!(model.enclosed_members("com.acme.Missing").is_empty());
    }

    #[test]
    fn test_package_of() {
        let model = DeclarationModel::from_json(ORDER_JSON).unwrap();
        assert_eq!(model.package_of("com.acme.Order").as_deref(), Some("com.acme"));
        assert_eq!(model.package_of("com.acme.Missing"), None);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = DeclarationModel::new(vec![TypeDecl::entity("a.B"), TypeDecl::new("a.B")]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateType(name) if name == "a.B"));
    }

    #[test]
    fn test_duplicate_field_rejected_but_overloads_allowed() {
        let overloads = TypeDecl::entity("a.B")
            .with_member(Member::method("compute", TypeRef::primitive("int")))
            .with_member(Member::method("compute", TypeRef::primitive("long")));
        assert!(DeclarationModel::new(vec![overloads]).is_ok());

        let duplicate = TypeDecl::entity("a.C")
            .with_member(Member::field("x", TypeRef::primitive("int")))
            .with_member(Member::field("x", TypeRef::primitive("long")));
        let err = DeclarationModel::new(vec![duplicate]).unwrap_err();
        assert_eq!(err.to_string(), "duplicate field 'x' on 'a.C'");
    }

    #[test]
    fn test_accessors_exposing_one_property_rejected() {
        let both_prefixes = TypeDecl::entity("a.B")
            .with_member(Member::method("getActive", TypeRef::primitive("boolean")))
            .with_member(Member::method("isActive", TypeRef::primitive("boolean")));
        let err = DeclarationModel::new(vec![both_prefixes]).unwrap_err();
        assert_eq!(err.to_string(), "accessor 'isActive' on 'a.B' repeats property 'active'");

        let overloaded = TypeDecl::entity("a.C")
            .with_member(Member::method("getX", TypeRef::primitive("int")))
            .with_member(Member::method("getX", TypeRef::primitive("long")));
        assert!(matches!(
            DeclarationModel::new(vec![overloaded]),
            Err(ModelError::DuplicateProperty { property, .. }) if property == "x"
        ));
    }

    #[test]
    fn test_field_and_accessor_may_share_a_name() {
        let decl = TypeDecl::entity("a.B")
            .with_member(Member::field("active", TypeRef::primitive("boolean")))
            .with_member(Member::method("isActive", TypeRef::primitive("boolean")));
        assert!(DeclarationModel::new(vec![decl]).is_ok());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = DeclarationModel::from_json("{ \"types\": [ { } ] }").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_canonical_primitive_names() {
        let model = DeclarationModel::default();
        assert_eq!(
            model.canonical_primitive_name(&TypeRef::primitive("int")).as_deref(),
            Some("java.lang.Integer")
        );
        assert!(!model.is_primitive(&TypeRef::primitive("void")));
        assert!(!model.is_primitive(&TypeRef::declared("java.lang.Integer")));
    }
}
