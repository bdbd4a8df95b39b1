use std::collections::HashMap;

use metagen_core::lang::annotations;
use metagen_core::lang::containers::{self, ContainerKind};
use metagen_core::lang::primitives::{self, PrimitiveKind};

#[test]
fn containers_names_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, ContainerKind> = HashMap::new();

    for info in containers::CONTAINERS {
        assert_eq!(
            containers::from_qualified_name(info.qualified_name),
            Some(info.id),
            "container name not resolvable: {}",
            info.qualified_name
        );
        assert_eq!(
            containers::info_for(info.id).qualified_name,
            info.qualified_name,
            "container info_for mismatch for {:?}",
            info.id
        );
        assert!(
            info.metamodel_type.starts_with("javax.persistence.metamodel."),
            "metamodel type outside the metamodel package: {}",
            info.metamodel_type
        );

        if let Some(prev) = seen.insert(info.qualified_name, info.id) {
            panic!(
                "duplicate container name {:?}: {:?} and {:?}",
                info.qualified_name, prev, info.id
            );
        }
    }

    assert_eq!(seen.len(), 4);
}

#[test]
fn primitives_keywords_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, PrimitiveKind> = HashMap::new();

    for info in primitives::PRIMITIVES {
        assert_eq!(primitives::from_keyword(info.keyword), Some(info.id));
        assert_eq!(primitives::keyword(info.id), info.keyword);
        assert!(
            info.canonical.starts_with("java.lang."),
            "canonical name must be a boxed java.lang type: {}",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.keyword, info.id) {
            panic!("duplicate primitive keyword {:?}: {:?} and {:?}", info.keyword, prev, info.id);
        }
    }

    assert_eq!(primitives::from_keyword("void"), None);
}

#[test]
fn identifier_markers_are_not_metamodel_targets() {
    for marker in annotations::IDENTIFIER_MARKERS {
        assert!(!annotations::is_metamodel_target(marker));
    }
}
