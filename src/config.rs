//! Generator configuration
//!
//! Naming conventions follow the JPA static metamodel: `com.acme.Order` gets `com.acme.metamodel.Order_`.

use metagen_core::naming::{METAMODEL_CLASS_SUFFIX, METAMODEL_PACKAGE_SUFFIX};

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Appended to an entity's package to form the metamodel package
    pub package_suffix: String,
    /// Appended to an entity's simple name to form the metamodel class name
    pub class_suffix: String,
    /// Number of spaces per indentation level in generated source
    pub indent_width: usize,
    /// Whether generated classes carry a `@Generated` marker
    pub emit_generated: bool,
    /// Whether warnings fail the run
    pub deny_warnings: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_suffix: METAMODEL_PACKAGE_SUFFIX.to_string(),
            class_suffix: METAMODEL_CLASS_SUFFIX.to_string(),
            indent_width: 4,
            emit_generated: true,
            deny_warnings: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.package_suffix = suffix.into();
        self
    }

    pub fn with_class_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.class_suffix = suffix.into();
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_generated_marker(mut self, emit: bool) -> Self {
        self.emit_generated = emit;
        self
    }

    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }
}
