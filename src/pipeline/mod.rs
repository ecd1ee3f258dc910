//! Model customization pipeline
//!
//! Turns a freshly built model into the normalized model handed to rendering:
//!
//! 1. relation-id flags (when enabled)
//! 2. naming strategy: relation fields, then entities, then columns
//! 3. imports and generation flags
//! 4. default-equal column attributes removed
//!
//! The stages run once, in this order, over the whole model.

mod annotate;
mod references;
mod rename;

pub use annotate::{add_imports_and_generation_options, set_relation_ids};
pub use references::ReferenceIndex;
pub use rename::{apply_naming_strategy, RenameStats};

use tracing::{info, warn};

use crate::config::GenerationOptions;
use crate::error::ModelGenError;
use crate::model::{remove_column_default_properties, DataTypeDefaults, SchemaModel};
use crate::naming::NamingStrategy;

/// Result of running the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizeOutcome {
    /// The model had no entities; nothing was touched and nothing should be rendered
    EmptySchema,
    Customized { entities: usize, renames: RenameStats },
}

/// Run every customization stage over `model`.
///
/// A naming strategy failure aborts the run; the model may then be partially
/// renamed and must be discarded.
pub fn customize_model(
    model: &mut SchemaModel,
    options: &GenerationOptions,
    strategy: &dyn NamingStrategy,
    defaults: &DataTypeDefaults,
) -> Result<CustomizeOutcome, ModelGenError> {
    if model.is_empty() {
        warn!("no tables found in the introspected schema, skipping model customization");
        return Ok(CustomizeOutcome::EmptySchema);
    }

    if options.relation_ids {
        set_relation_ids(model);
    }

    let renames = apply_naming_strategy(model, strategy)?;
    add_imports_and_generation_options(model, options);
    remove_column_default_properties(model, defaults);

    info!(
        entities = model.entities.len(),
        relations = model.relation_count(),
        "model customized"
    );

    Ok(CustomizeOutcome::Customized {
        entities: model.entities.len(),
        renames,
    })
}
