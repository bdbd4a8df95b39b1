//! Attribute descriptors
//!
//! An [`AttributeDescriptor`] is the classifier's output for one persistent member. Its shape is fixed at
//! construction: fields are private and there are no setters.

use std::fmt;

use metagen_core::lang::containers::{self, ContainerKind, SINGULAR_ATTRIBUTE};

/// Plural (non-keyed) collection kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Collection,
    Set,
    List,
}

impl CollectionKind {
    /// Narrow a container kind to a non-keyed collection kind.
    pub fn from_container(kind: ContainerKind) -> Option<Self> {
        match kind {
            ContainerKind::Collection => Some(CollectionKind::Collection),
            ContainerKind::Set => Some(CollectionKind::Set),
            ContainerKind::List => Some(CollectionKind::List),
            ContainerKind::Map => None,
        }
    }

    pub fn container(self) -> ContainerKind {
        match self {
            CollectionKind::Collection => ContainerKind::Collection,
            CollectionKind::Set => ContainerKind::Set,
            CollectionKind::List => ContainerKind::List,
        }
    }
}

/// The shape of a persistent attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeShape {
    /// Single-valued: a primitive or a non-container reference type.
    Scalar,
    Collection(CollectionKind),
    Map { key_type: String },
}

/// One classified persistent attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    owner: String,
    name: String,
    element_type: String,
    shape: AttributeShape,
}

impl AttributeDescriptor {
    pub fn scalar(owner: impl Into<String>, name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            element_type: ty.into(),
            shape: AttributeShape::Scalar,
        }
    }

    pub fn collection(
        owner: impl Into<String>,
        name: impl Into<String>,
        kind: CollectionKind,
        element_type: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            element_type: element_type.into(),
            shape: AttributeShape::Collection(kind),
        }
    }

    pub fn map(
        owner: impl Into<String>,
        name: impl Into<String>,
        key_type: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            element_type: value_type.into(),
            shape: AttributeShape::Map {
                key_type: key_type.into(),
            },
        }
    }

    /// Qualified name of the owning entity.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Property name (field name, or accessor name with its prefix stripped).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the attribute: the scalar type, the collection element type, or the map value type.
    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    pub fn shape(&self) -> &AttributeShape {
        &self.shape
    }

    pub fn key_type(&self) -> Option<&str> {
        match &self.shape {
            AttributeShape::Map { key_type } => Some(key_type.as_str()),
            _ => None,
        }
    }

    /// Container kind for plural attributes, `None` for scalars.
    pub fn container(&self) -> Option<ContainerKind> {
        match &self.shape {
            AttributeShape::Scalar => None,
            AttributeShape::Collection(kind) => Some(kind.container()),
            AttributeShape::Map { .. } => Some(ContainerKind::Map),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.shape, AttributeShape::Scalar)
    }

    /// Qualified metamodel attribute type rendered for this attribute.
    pub fn metamodel_type(&self) -> &'static str {
        match self.container() {
            Some(kind) => containers::metamodel_type(kind),
            None => SINGULAR_ATTRIBUTE,
        }
    }
}

impl fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            AttributeShape::Scalar => write!(f, "{}: {}", self.name, self.element_type),
            AttributeShape::Collection(kind) => {
                write!(f, "{}: {:?}<{}>", self.name, kind, self.element_type)
            }
            AttributeShape::Map { key_type } => {
                write!(f, "{}: Map<{}, {}>", self.name, key_type, self.element_type)
            }
        }
    }
}
