//! Member classification
//!
//! Decides, for one candidate member, whether it is a persistent attribute and what shape it has.
//!
//! Classification dispatches on the shape of the member's resolved type, never on its annotations:
//!
//! - primitive: singular attribute of the canonical (boxed) type
//! - declared, raw name is a recognized container: collection or map attribute built from the type arguments
//! - declared, anything else: singular attribute of the raw qualified name
//! - executable: the return type of an accessor, classified by the rules above
//!
//! Anything else (arrays, type variables, `void`) is not an attribute. Absence is signalled with `None`; deciding
//! whether that is worth a diagnostic is the caller's business.

pub mod attribute;

use metagen_core::lang::containers;
use metagen_core::naming;

use crate::inspect::{DeclaredType, Member, MemberKind, TypeInspector, TypeRef};

pub use attribute::{AttributeDescriptor, AttributeShape, CollectionKind};

/// Classify one member of `owner`.
///
/// ## Parameters
/// - `inspector`: read-only view of the resolved declarations.
/// - `member`: a field, or a method whose name starts with `get` or `is`.
/// - `owner`: qualified name of the entity declaring `member`.
///
/// ## Returns
/// - `Some(AttributeDescriptor)` if the member is a persistent attribute.
/// - `None` for methods without an accessor name, non-classifiable types, and malformed container arguments.
pub fn classify<I>(inspector: &I, member: &Member, owner: &str) -> Option<AttributeDescriptor>
where
    I: TypeInspector + ?Sized,
{
    let name = match member.kind {
        MemberKind::Field => member.name.clone(),
        MemberKind::Method if naming::is_accessor_name(&member.name) => naming::property_name(&member.name)?,
        MemberKind::Method => return None,
    };
    classify_type(inspector, &member.ty, owner, name)
}

fn classify_type<I>(inspector: &I, ty: &TypeRef, owner: &str, name: String) -> Option<AttributeDescriptor>
where
    I: TypeInspector + ?Sized,
{
    match ty {
        TypeRef::Primitive(_) => inspector
            .canonical_primitive_name(ty)
            .map(|canonical| AttributeDescriptor::scalar(owner, name, canonical)),
        TypeRef::Declared(_) => {
            let declared = inspector.resolve_declared(ty)?;
            classify_declared(declared, owner, name)
        }
        TypeRef::Executable { returns } => classify_type(inspector, returns, owner, name),
        TypeRef::Array(_) | TypeRef::TypeVariable(_) | TypeRef::Void => None,
    }
}

fn classify_declared(declared: &DeclaredType, owner: &str, name: String) -> Option<AttributeDescriptor> {
    let Some(container) = containers::from_qualified_name(&declared.name) else {
        return Some(AttributeDescriptor::scalar(owner, name, declared.name.as_str()));
    };

    if container.is_map() {
        let [key, value, ..] = declared.args.as_slice() else {
            return None;
        };
        return Some(AttributeDescriptor::map(owner, name, key.to_string(), value.to_string()));
    }

    let kind = CollectionKind::from_container(container)?;
    let element = element_type(&declared.args)?;
    Some(AttributeDescriptor::collection(owner, name, kind, element))
}

/// Element type of a plural container: the sole argument, otherwise the second one.
fn element_type(args: &[TypeRef]) -> Option<String> {
    match args {
        [only] => Some(only.to_string()),
        _ => args.get(1).map(ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::DeclarationModel;

    const OWNER: &str = "com.acme.Order";

    fn classify_field(ty: TypeRef) -> Option<AttributeDescriptor> {
        let model = DeclarationModel::default();
        classify(&model, &Member::field("value", ty), OWNER)
    }

    #[test]
    fn test_primitive_field_is_boxed_scalar() {
        let attr = classify_field(TypeRef::primitive("boolean")).unwrap();
        assert!(attr.is_scalar());
        assert_eq!(attr.element_type(), "java.lang.Boolean");
        assert_eq!(attr.owner(), OWNER);
    }

    #[test]
    fn test_raw_collection_is_not_an_attribute() {
        assert_eq!(classify_field(TypeRef::declared("java.util.List")), None);
    }

    #[test]
    fn test_map_with_one_argument_is_not_an_attribute() {
        let ty = TypeRef::generic("java.util.Map", vec![TypeRef::declared("java.lang.Long")]);
        assert_eq!(classify_field(ty), None);
    }

    #[test]
    fn test_collection_with_two_arguments_uses_second() {
        let ty = TypeRef::generic(
            "java.util.Collection",
            vec![TypeRef::declared("java.lang.Long"), TypeRef::declared("com.acme.Line")],
        );
        let attr = classify_field(ty).unwrap();
        assert_eq!(attr.shape(), &AttributeShape::Collection(CollectionKind::Collection));
        assert_eq!(attr.element_type(), "com.acme.Line");
    }

    #[test]
    fn test_nested_generic_element_keeps_arguments() {
        let ty = TypeRef::generic(
            "java.util.List",
            vec![TypeRef::generic("java.util.Set", vec![TypeRef::declared("java.lang.String")])],
        );
        let attr = classify_field(ty).unwrap();
        assert_eq!(attr.element_type(), "java.util.Set<java.lang.String>");
    }

    #[test]
    fn test_concrete_collection_class_is_scalar() {
        let ty = TypeRef::generic("java.util.ArrayList", vec![TypeRef::declared("java.lang.String")]);
        let attr = classify_field(ty).unwrap();
        assert!(attr.is_scalar());
        assert_eq!(attr.element_type(), "java.util.ArrayList");
    }

    #[test]
    fn test_unclassifiable_shapes() {
        assert_eq!(classify_field(TypeRef::array(TypeRef::primitive("byte"))), None);
        assert_eq!(classify_field(TypeRef::TypeVariable("T".to_string())), None);
        assert_eq!(classify_field(TypeRef::primitive("void")), None);
    }

    #[test]
    fn test_accessor_names_become_property_names() {
        let model = DeclarationModel::default();
        let getter = Member::method("getCustomerName", TypeRef::declared("java.lang.String"));
        let flag = Member::method("isShipped", TypeRef::primitive("boolean"));

        assert_eq!(classify(&model, &getter, OWNER).unwrap().name(), "customerName");
        assert_eq!(classify(&model, &flag, OWNER).unwrap().name(), "shipped");

        let acronym = Member::method("getURL", TypeRef::declared("java.lang.String"));
        assert_eq!(classify(&model, &acronym, OWNER).unwrap().name(), "URL");
    }

    #[test]
    fn test_non_accessor_methods_are_skipped() {
        let model = DeclarationModel::default();
        let method = Member::method("toString", TypeRef::declared("java.lang.String"));
        assert_eq!(classify(&model, &method, OWNER), None);
    }

    #[test]
    fn test_void_accessor_is_skipped() {
        let model = DeclarationModel::default();
        let method = Member::method("getNothing", TypeRef::Void);
        assert_eq!(classify(&model, &method, OWNER), None);
    }
}
