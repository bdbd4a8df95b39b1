//! Import bookkeeping for generated classes
//!
//! Every qualified name written into a metamodel class goes through [`ImportContext::import_type`], which
//! decides whether the short name can be used and records the import statement it needs.

use std::collections::{BTreeSet, HashMap};

use metagen_core::naming;

/// Package whose types are visible without an import.
const IMPLICIT_PACKAGE: &str = "java.lang";

/// Tracks the imports of one generated class.
#[derive(Debug, Clone, Default)]
pub struct ImportContext {
    /// Package the generated class lives in.
    base_package: String,
    imports: BTreeSet<String>,
    /// Simple name -> qualified name it currently stands for.
    simple_names: HashMap<String, String>,
}

impl ImportContext {
    pub fn new(base_package: impl Into<String>) -> Self {
        Self {
            base_package: base_package.into(),
            imports: BTreeSet::new(),
            simple_names: HashMap::new(),
        }
    }

    /// Import a type and return the name to use for it in generated source.
    ///
    /// ## Notes
    /// - Generic type strings (`java.util.List<com.acme.Line>`) import every component.
    /// - Array suffixes and `? extends` / `? super` bounds are preserved.
    /// - A simple name already taken by a different type keeps its qualified spelling.
    /// - Names without a package (primitives, type variables) are returned unchanged.
    pub fn import_type(&mut self, qualified_name: &str) -> String {
        let name = qualified_name.trim();

        if let Some(element) = name.strip_suffix("[]") {
            return format!("{}[]", self.import_type(element));
        }

        for prefix in ["? extends ", "? super "] {
            if let Some(bound) = name.strip_prefix(prefix) {
                return format!("{}{}", prefix, self.import_type(bound));
            }
        }

        if let Some(open) = name.find('<') {
            let Some(inner) = name[open + 1..].strip_suffix('>') else {
                return name.to_string();
            };
            let raw = self.import_type(&name[..open]);
            let args: Vec<String> = split_type_arguments(inner)
                .into_iter()
                .map(|arg| self.import_type(arg))
                .collect();
            return format!("{}<{}>", raw, args.join(", "));
        }

        self.import_simple(name)
    }

    fn import_simple(&mut self, name: &str) -> String {
        let package = naming::package_of(name);
        if package.is_empty() {
            return name.to_string();
        }

        let simple = naming::simple_name(name);
        match self.simple_names.get(simple) {
            Some(existing) if existing != name => return name.to_string(),
            Some(_) => {}
            None => {
                self.simple_names.insert(simple.to_string(), name.to_string());
            }
        }

        if package != IMPLICIT_PACKAGE && package != self.base_package {
            self.imports.insert(name.to_string());
        }
        simple.to_string()
    }

    /// Qualified names that need an import statement, sorted.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Render the import block, one `import x.y.Z;` line per import.
    pub fn generate_imports(&self) -> String {
        self.imports
            .iter()
            .map(|name| format!("import {};\n", name))
            .collect()
    }
}

/// Split a type-argument list at top-level commas.
fn split_type_arguments(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(inner[start..].trim());
    parts
}
