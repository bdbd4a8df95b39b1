//! Entity descriptors
//!
//! One [`EntityDescriptor`] per entity. Building it is a single unit of work: decide the member-access strategy
//! once, then classify every member under that strategy. The descriptor is immutable afterwards.

use std::fmt;

use metagen_core::lang::annotations;
use metagen_core::naming;

use crate::classify::{AttributeDescriptor, classify};
use crate::config::GeneratorConfig;
use crate::diagnostics::{Diagnostics, catalog};
use crate::inspect::{Member, MemberKind, TypeInspector};

/// How persistent state of an entity is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessStrategy {
    /// Scan fields only.
    Fields,
    /// Scan accessor methods only.
    Accessors,
}

impl AccessStrategy {
    /// Member kind enumerated under this strategy.
    pub fn member_kind(self) -> MemberKind {
        match self {
            AccessStrategy::Fields => MemberKind::Field,
            AccessStrategy::Accessors => MemberKind::Method,
        }
    }
}

impl fmt::Display for AccessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessStrategy::Fields => write!(f, "fields"),
            AccessStrategy::Accessors => write!(f, "accessors"),
        }
    }
}

/// Decide the member-access strategy for an entity.
///
/// ## Parameters
/// - `inspector`: read-only view of the resolved declarations.
/// - `members`: every member enclosed by the entity, fields and methods.
///
/// ## Returns
/// - [`AccessStrategy::Fields`] if a **field** carries an identifier marker (`@Id` or `@EmbeddedId`).
/// - [`AccessStrategy::Accessors`] otherwise.
///
/// ## Notes
/// - A marker on a getter is never detected positively; such entities get `Accessors` only because nothing
///   matched. See DESIGN.md.
pub fn build_attribute_strategy<I>(inspector: &I, members: &[&Member]) -> AccessStrategy
where
    I: TypeInspector + ?Sized,
{
    let field_marked = members.iter().any(|member| {
        member.is_field()
            && inspector
                .annotations(member)
                .iter()
                .any(|a| annotations::is_identifier_marker(&a.qualified_name))
    });

    if field_marked {
        AccessStrategy::Fields
    } else {
        AccessStrategy::Accessors
    }
}

/// Classify every member of `owner` visible under `strategy`.
///
/// ## Returns
/// - Every classified attribute, in member order. May be empty.
///
/// ## Notes
/// - In `Fields` mode each unclassifiable field is reported as a warning. In `Accessors` mode misses are
///   expected (most methods are not accessors) and stay silent.
/// - An empty result is reported as a warning, never as an error.
pub fn collect_attributes<I>(
    inspector: &I,
    owner: &str,
    strategy: AccessStrategy,
    diagnostics: &mut Diagnostics,
) -> Vec<AttributeDescriptor>
where
    I: TypeInspector + ?Sized,
{
    let members = inspector.members(owner, strategy.member_kind());
    tracing::debug!(
        count = members.len(),
        kind = %strategy.member_kind(),
        entity = owner,
        "scanning members"
    );

    let mut attributes = Vec::with_capacity(members.len());
    for member in members {
        match classify(inspector, member, owner) {
            Some(attribute) => attributes.push(attribute),
            None if strategy == AccessStrategy::Fields => {
                diagnostics.push(catalog::unclassifiable_member(owner, &member.name));
            }
            None => {}
        }
    }

    if attributes.is_empty() {
        diagnostics.push(catalog::no_attributes(owner));
    }
    attributes
}

/// A classified entity: identity, derived metamodel names, and persistent attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    qualified_name: String,
    simple_name: String,
    package: String,
    metamodel_package: String,
    metamodel_class: String,
    strategy: AccessStrategy,
    attributes: Vec<AttributeDescriptor>,
}

impl EntityDescriptor {
    /// Run the full classification pass for one entity.
    ///
    /// ## Returns
    /// - `None` (with an error diagnostic) if the inspector does not know `qualified_name`.
    #[tracing::instrument(skip_all, fields(entity = qualified_name))]
    pub fn analyze<I>(
        inspector: &I,
        qualified_name: &str,
        config: &GeneratorConfig,
        diagnostics: &mut Diagnostics,
    ) -> Option<Self>
    where
        I: TypeInspector + ?Sized,
    {
        let Some(package) = inspector.package_of(qualified_name) else {
            diagnostics.push(catalog::unknown_entity(qualified_name));
            return None;
        };

        let members = inspector.enclosed_members(qualified_name);
        let strategy = build_attribute_strategy(inspector, &members);
        let attributes = collect_attributes(inspector, qualified_name, strategy, diagnostics);

        let simple_name = naming::simple_name(qualified_name).to_string();
        Some(Self {
            qualified_name: qualified_name.to_string(),
            metamodel_package: naming::metamodel_package(&package, &config.package_suffix),
            metamodel_class: naming::metamodel_class_name(&simple_name, &config.class_suffix),
            simple_name,
            package,
            strategy,
            attributes,
        })
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Package of the entity itself.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn metamodel_package(&self) -> &str {
        &self.metamodel_package
    }

    pub fn metamodel_class(&self) -> &str {
        &self.metamodel_class
    }

    /// Qualified name of the generated metamodel class.
    pub fn metamodel_qualified_name(&self) -> String {
        if self.metamodel_package.is_empty() {
            self.metamodel_class.clone()
        } else {
            format!("{}.{}", self.metamodel_package, self.metamodel_class)
        }
    }

    pub fn strategy(&self) -> AccessStrategy {
        self.strategy
    }

    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }
}
