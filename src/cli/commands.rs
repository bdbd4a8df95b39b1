//! `generate` and `inspect` commands. Errors come back as [`CliError`] with a miette-rendered message.

use std::fmt::Write;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::diagnostics::{self, Diagnostics};
use crate::entity::EntityDescriptor;
use crate::generate::{GenerateError, generate_model, write_files};
use crate::inspect::DeclarationModel;

use super::{CliError, CliResult, ExitCode};

/// Classify every metamodel target of a model and write the generated sources.
pub fn generate(model_path: &Path, out_dir: &Path, deny_warnings: bool, no_generated: bool) -> CliResult<ExitCode> {
    let config = GeneratorConfig::default()
        .with_deny_warnings(deny_warnings)
        .with_generated_marker(!no_generated);

    let model = load_model(model_path)?;
    let output = generate_model(&model, &config);
    print_diagnostics(&output.diagnostics);
    output.check(&config).map_err(report_error)?;

    let written = write_files(&output.files, out_dir).map_err(report_error)?;
    println!("Generated {} metamodel(s) in {}", written.len(), out_dir.display());
    Ok(ExitCode::SUCCESS)
}

/// Print the access strategy and attributes of every metamodel target without writing files.
pub fn inspect(model_path: &Path) -> CliResult<ExitCode> {
    let model = load_model(model_path)?;
    let output = generate_model(&model, &GeneratorConfig::default());

    for entity in &output.entities {
        print!("{}", describe_entity(entity));
    }
    print_diagnostics(&output.diagnostics);

    if output.diagnostics.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Human-readable summary of one classified entity.
pub fn describe_entity(entity: &EntityDescriptor) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} -> {} ({})",
        entity.qualified_name(),
        entity.metamodel_qualified_name(),
        entity.strategy()
    );
    for attribute in entity.attributes() {
        let _ = writeln!(out, "  {}", attribute);
    }
    out
}

fn load_model(path: &Path) -> CliResult<DeclarationModel> {
    DeclarationModel::load(path).map_err(|e| report_error(GenerateError::from(e)))
}

fn print_diagnostics(found: &Diagnostics) {
    for diagnostic in found {
        diagnostics::print_diagnostic(diagnostic);
    }
}

fn report_error(error: GenerateError) -> CliError {
    CliError::failure(format!("{:?}", miette::Report::new(error)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::inspect::{Member, TypeDecl, TypeRef};
    use metagen_core::lang::annotations;

    #[test]
    fn test_describe_entity_lists_attributes() {
        let model = DeclarationModel::new(vec![
            TypeDecl::entity("com.acme.Order")
                .with_member(Member::field("id", TypeRef::declared("java.lang.Long")).annotated(annotations::ID))
                .with_member(Member::field(
                    "tags",
                    TypeRef::generic("java.util.Set", vec![TypeRef::declared("java.lang.String")]),
                )),
        ])
        .unwrap();
        let output = generate_model(&model, &GeneratorConfig::default());

        assert_eq!(
            describe_entity(&output.entities[0]),
            "com.acme.Order -> com.acme.metamodel.Order_ (fields)\n  id: java.lang.Long\n  tags: Set<java.lang.String>\n"
        );
    }

    #[test]
    fn test_missing_model_is_a_failure() {
        let err = generate(
            Path::new("does/not/exist.json"),
            Path::new("unused"),
            false,
            false,
        )
        .unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("failed to load declaration model"));
    }
}
