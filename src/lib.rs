//! schema-modelgen: Reverse-engineer a relational schema into an entity model
//!
//! This library takes the raw schema reported by a database introspection
//! driver, normalizes entity, column and relation names with a pluggable
//! naming strategy while keeping every cross-reference consistent, and hands
//! the result to a renderer.

pub mod config;
pub mod emit;
pub mod error;
pub mod introspection;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod util;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

pub use config::GenerationOptions;
pub use error::ModelGenError;
pub use naming::{NamingStrategy, StrategyRegistry};
pub use pipeline::{customize_model, CustomizeOutcome};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Path to the driver's introspection document
    pub input_path: PathBuf,
    /// Path to the driver's per-type default attribute table
    pub defaults_path: Option<PathBuf>,
    pub generation: GenerationOptions,
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Introspection found no tables; no files were written
    EmptySchema,
    Generated { files: Vec<PathBuf> },
}

/// Generate models using the built-in naming strategies
pub fn generate_models(options: BuildOptions) -> Result<GenerationOutcome> {
    generate_models_with(options, &StrategyRegistry::new())
}

/// Generate models, selecting the naming strategy from `registry`
pub fn generate_models_with(
    options: BuildOptions,
    registry: &StrategyRegistry,
) -> Result<GenerationOutcome> {
    // Step 1: Resolve configuration before touching the model
    options.generation.validate()?;
    let strategy = registry.create_for(&options.generation)?;

    // Step 2: Read the introspection output
    let raw = introspection::load_introspection(&options.input_path)?;
    let defaults = match &options.defaults_path {
        Some(path) => introspection::load_data_type_defaults(path)?,
        None => model::DataTypeDefaults::new(),
    };

    info!(
        entities = raw.entities.len(),
        input = %options.input_path.display(),
        "loaded introspected schema"
    );

    // Step 3: Resolve names into the schema model
    let mut schema_model = model::build_model(&raw)?;

    // Step 4: Normalize
    let outcome = customize_model(
        &mut schema_model,
        &options.generation,
        strategy.as_ref(),
        &defaults,
    )?;
    if outcome == CustomizeOutcome::EmptySchema {
        return Ok(GenerationOutcome::EmptySchema);
    }

    // Step 5: Render
    let files = emit::write_model(
        &schema_model,
        &options.generation.output_path,
        options.generation.file_case,
    )?;

    info!(
        files = files.len(),
        output = %options.generation.output_path.display(),
        "wrote model files"
    );

    Ok(GenerationOutcome::Generated { files })
}
