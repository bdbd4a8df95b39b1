//! Diagnostics for metamodel generation
//!
//! Classification never fails hard. Findings worth reporting (members that could not be classified, entities
//! with no attributes, unknown entity types) are collected into a [`Diagnostics`] sink that callers pass in
//! explicitly, then rendered by the driver.

use std::fmt;

/// A non-fatal finding attached to an entity or one of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Qualified element the finding is about (`com.acme.Order` or `com.acme.Order.name`).
    pub element: Option<String>,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            element: None,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Ordered collection of diagnostics for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|d| d.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Render a diagnostic as plain text.
///
/// ```text
/// warning: no persistent attributes found
///   --> com.acme.Empty
///   = note: ...
/// ```
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let mut out = format!("{}: {}\n", diagnostic.severity, diagnostic.message);
    if let Some(element) = &diagnostic.element {
        out.push_str(&format!("  --> {}\n", element));
    }
    for note in &diagnostic.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &diagnostic.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }
    out
}

/// Print a diagnostic to stderr with ANSI colors.
pub fn print_diagnostic(diagnostic: &Diagnostic) {
    let red = "\x1b[31m";
    let yellow = "\x1b[33m";
    let cyan = "\x1b[36m";
    let bold = "\x1b[1m";
    let reset = "\x1b[0m";

    let kind_color = match diagnostic.severity {
        Severity::Error => red,
        Severity::Warning => yellow,
    };

    eprintln!(
        "{bold}{kind_color}{kind}{reset}{bold}: {message}{reset}",
        kind = diagnostic.severity,
        message = diagnostic.message,
    );
    if let Some(element) = &diagnostic.element {
        eprintln!("  {cyan}-->{reset} {}", element);
    }
    for note in &diagnostic.notes {
        eprintln!("  {cyan}= note:{reset} {}", note);
    }
    for hint in &diagnostic.hints {
        eprintln!("  {cyan}= hint:{reset} {}", hint);
    }
    eprintln!();
}

// ============================================================================
// Diagnostic catalog
// ============================================================================

/// Constructors for the findings the generator reports.
pub mod catalog {
    use super::*;

    pub fn unclassifiable_member(owner: &str, member: &str) -> Diagnostic {
        Diagnostic::warning("could not find valid info for persistent property")
            .with_element(format!("{}.{}", owner, member))
            .with_note("the member type is neither a primitive nor a declared type with usable type arguments")
    }

    pub fn no_attributes(owner: &str) -> Diagnostic {
        Diagnostic::warning(format!("no persistent attributes found on {}", owner)).with_element(owner)
    }

    pub fn unknown_entity(name: &str) -> Diagnostic {
        Diagnostic::error(format!("unknown entity type '{}'", name))
            .with_element(name)
            .with_hint("make sure the type is present in the declaration model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diagnostic_with_element_and_note() {
        let diagnostic = Diagnostic::warning("no persistent attributes found on a.B")
            .with_element("a.B")
            .with_note("nothing to render");
        assert_eq!(
            format_diagnostic(&diagnostic),
            "warning: no persistent attributes found on a.B\n  --> a.B\n  = note: nothing to render\n"
        );
    }

    #[test]
    fn test_counts_by_severity() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(catalog::no_attributes("a.B"));
        diagnostics.push(catalog::unknown_entity("a.C"));
        diagnostics.push(catalog::unclassifiable_member("a.D", "x"));

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count(Severity::Warning), 2);
        assert!(diagnostics.has_errors());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
    }
}
