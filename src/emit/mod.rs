//! Metamodel emission
//!
//! Turns classified entities into generated metamodel source.
//!
//! The pipeline is:
//! 1. `register_attribute` for every attribute of an entity (renders one declaration line each)
//! 2. `render` the entity (package, imports, annotations, class body)
//!
//! ## Module Organization
//!
//! - `mod.rs` - The `CodeEmitter` trait and the `MetamodelEmitter` implementation
//! - `imports.rs` - Per-class import bookkeeping
//! - `writer.rs` - Low-level Java source string builder

pub mod imports;
pub mod writer;

use std::collections::HashMap;

use metagen_core::lang::annotations::{GENERATED, STATIC_METAMODEL};

use crate::classify::AttributeDescriptor;
use crate::config::GeneratorConfig;
use crate::entity::EntityDescriptor;

pub use imports::ImportContext;
pub use writer::JavaWriter;

/// Value of the `@Generated` marker.
pub const GENERATOR_NAME: &str = "metagen";

/// Sink for classified attributes that produces generated source.
pub trait CodeEmitter {
    /// Record one attribute of `entity` for rendering.
    fn register_attribute(&mut self, entity: &EntityDescriptor, attribute: &AttributeDescriptor);

    /// Import a qualified name into the class generated for `entity` and return the name to write.
    fn import_type(&mut self, entity: &EntityDescriptor, qualified_name: &str) -> String;

    /// Produce the final source for `entity`, consuming everything registered for it.
    fn render(&mut self, entity: &EntityDescriptor) -> String;
}

/// State accumulated for one metamodel class until it is rendered.
#[derive(Debug)]
struct PendingClass {
    imports: ImportContext,
    declarations: Vec<String>,
}

/// Emits JPA static metamodel classes.
#[derive(Debug)]
pub struct MetamodelEmitter {
    config: GeneratorConfig,
    pending: HashMap<String, PendingClass>,
}

impl MetamodelEmitter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            pending: HashMap::new(),
        }
    }

    fn pending_mut(&mut self, entity: &EntityDescriptor) -> &mut PendingClass {
        self.pending
            .entry(entity.qualified_name().to_string())
            .or_insert_with(|| PendingClass {
                imports: ImportContext::new(entity.metamodel_package()),
                declarations: Vec::new(),
            })
    }

    /// Register every attribute of `entity` and render it.
    pub fn emit(&mut self, entity: &EntityDescriptor) -> String {
        for attribute in entity.attributes() {
            self.register_attribute(entity, attribute);
        }
        self.render(entity)
    }
}

impl CodeEmitter for MetamodelEmitter {
    fn register_attribute(&mut self, entity: &EntityDescriptor, attribute: &AttributeDescriptor) {
        let class = self.pending_mut(entity);
        let declaration = declaration(&mut class.imports, entity, attribute);
        class.declarations.push(declaration);
    }

    fn import_type(&mut self, entity: &EntityDescriptor, qualified_name: &str) -> String {
        self.pending_mut(entity).imports.import_type(qualified_name)
    }

    fn render(&mut self, entity: &EntityDescriptor) -> String {
        let PendingClass {
            mut imports,
            declarations,
        } = self
            .pending
            .remove(entity.qualified_name())
            .unwrap_or_else(|| PendingClass {
                imports: ImportContext::new(entity.metamodel_package()),
                declarations: Vec::new(),
            });

        let generated = self
            .config
            .emit_generated
            .then(|| imports.import_type(GENERATED));
        let static_metamodel = imports.import_type(STATIC_METAMODEL);
        let entity_name = imports.import_type(entity.qualified_name());

        let mut w = JavaWriter::with_indent_width(self.config.indent_width);
        if !entity.metamodel_package().is_empty() {
            w.line(&format!("package {};", entity.metamodel_package()));
            w.blank_line();
        }

        let import_block = imports.generate_imports();
        if !import_block.is_empty() {
            w.writef(format_args!("{}", import_block));
            w.blank_line();
        }

        if let Some(generated) = generated {
            w.line(&format!("@{}(\"{}\")", generated, GENERATOR_NAME));
        }
        w.line(&format!("@{}({}.class)", static_metamodel, entity_name));
        w.block(&format!("public abstract class {}", entity.metamodel_class()), |w| {
            for declaration in &declarations {
                w.line(declaration);
            }
        });
        w.finish()
    }
}

/// Render the field declaration for one attribute.
///
/// `public static volatile SingularAttribute<Order, Long> id;`
fn declaration(imports: &mut ImportContext, entity: &EntityDescriptor, attribute: &AttributeDescriptor) -> String {
    let meta = imports.import_type(attribute.metamodel_type());
    let owner = imports.import_type(entity.qualified_name());
    let mut type_args = vec![owner];
    if let Some(key) = attribute.key_type() {
        type_args.push(imports.import_type(key));
    }
    type_args.push(imports.import_type(attribute.element_type()));

    format!(
        "public static volatile {}<{}> {};",
        meta,
        type_args.join(", "),
        attribute.name()
    )
}
