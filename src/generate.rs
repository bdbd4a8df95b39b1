//! Batch generation driver
//!
//! Runs the classification pass and emission for every requested entity. Each entity is an isolated unit:
//! an entity that cannot be analyzed is reported and skipped, the rest of the batch still renders.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::diagnostics::{Diagnostics, Severity};
use crate::emit::MetamodelEmitter;
use crate::entity::EntityDescriptor;
use crate::inspect::{DeclarationModel, ModelError, TypeInspector};

/// Errors that stop a generation run.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum GenerateError {
    #[error("failed to load declaration model")]
    #[diagnostic(
        code(metagen::model),
        help("the model must be a JSON object with a `types` array of type declarations")
    )]
    Model(#[from] ModelError),

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(metagen::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} warning(s) reported while warnings are denied")]
    #[diagnostic(
        code(metagen::deny_warnings),
        help("fix the reported members or run without --deny-warnings")
    )]
    DeniedWarnings { count: usize },

    #[error("{count} error(s) reported")]
    #[diagnostic(code(metagen::errors))]
    Errors { count: usize },
}

/// One generated metamodel source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Qualified name of the entity the file describes.
    pub entity: String,
    /// Path relative to the output root (`com/acme/metamodel/Order_.java`).
    pub path: PathBuf,
    pub source: String,
}

/// Everything a generation run produced.
#[derive(Debug, Default)]
pub struct GenerationOutput {
    pub entities: Vec<EntityDescriptor>,
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Diagnostics,
}

impl GenerationOutput {
    /// Fail if the diagnostics are not acceptable under `config`.
    pub fn check(&self, config: &GeneratorConfig) -> Result<(), GenerateError> {
        let errors = self.diagnostics.count(Severity::Error);
        if errors > 0 {
            return Err(GenerateError::Errors { count: errors });
        }
        let warnings = self.diagnostics.count(Severity::Warning);
        if config.deny_warnings && warnings > 0 {
            return Err(GenerateError::DeniedWarnings { count: warnings });
        }
        Ok(())
    }
}

/// Classify and render the given entities.
#[tracing::instrument(skip_all, fields(entity_count = entities.len()))]
pub fn generate<I>(inspector: &I, entities: &[&str], config: &GeneratorConfig) -> GenerationOutput
where
    I: TypeInspector + ?Sized,
{
    let mut output = GenerationOutput::default();
    let mut emitter = MetamodelEmitter::new(config.clone());

    for &name in entities {
        let Some(entity) = EntityDescriptor::analyze(inspector, name, config, &mut output.diagnostics) else {
            tracing::warn!(entity = name, "skipping entity that could not be analyzed");
            continue;
        };

        let source = emitter.emit(&entity);
        output.files.push(GeneratedFile {
            entity: entity.qualified_name().to_string(),
            path: relative_path(&entity),
            source,
        });
        output.entities.push(entity);
    }

    tracing::info!(
        files = output.files.len(),
        diagnostics = output.diagnostics.len(),
        "metamodel generation finished"
    );
    output
}

/// Generate metamodels for every entity, mapped superclass, and embeddable of a declaration model.
pub fn generate_model(model: &DeclarationModel, config: &GeneratorConfig) -> GenerationOutput {
    let targets = model.metamodel_targets();
    generate(model, &targets, config)
}

/// Write generated files under `out_dir`, creating package directories as needed.
///
/// ## Returns
/// - The full paths written, in file order.
pub fn write_files(files: &[GeneratedFile], out_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.source).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote metamodel");
        written.push(path);
    }
    Ok(written)
}

fn relative_path(entity: &EntityDescriptor) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in entity.metamodel_package().split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{}.java", entity.metamodel_class()));
    path
}
