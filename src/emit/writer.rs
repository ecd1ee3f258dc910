//! Write normalized entities to the output directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::error::ModelGenError;
use crate::model::{Entity, SchemaModel};
use crate::naming::CaseConversion;

/// File name for an element, cased per the file naming axis
pub fn file_name_for(name: &str, file_case: CaseConversion) -> String {
    format!("{}.json", file_case.apply(name))
}

/// Render one entity as a pretty-printed JSON document
pub fn render_entity(entity: &Entity) -> Result<String, ModelGenError> {
    to_json(&entity.name, entity)
}

/// Write every entity and enum type of `model` into `output_dir`.
///
/// Returns the written paths in model order, entities first. Fails with
/// `DuplicateOutputFile` before anything is written when two elements map
/// to the same file name.
pub fn write_model(
    model: &SchemaModel,
    output_dir: &Path,
    file_case: CaseConversion,
) -> Result<Vec<PathBuf>> {
    let mut planned = Vec::with_capacity(model.entities.len() + model.enums.len());
    let mut owners: HashMap<PathBuf, String> = HashMap::new();

    let elements = model
        .entities
        .iter()
        .map(|e| (format!("entity {}", e.name), &e.name))
        .chain(
            model
                .enums
                .iter()
                .map(|e| (format!("enum {}", e.name), &e.name)),
        );
    for (label, name) in elements {
        let path = output_dir.join(file_name_for(name, file_case));
        if let Some(first) = owners.get(&path) {
            return Err(ModelGenError::DuplicateOutputFile {
                path,
                first: first.clone(),
                second: label,
            }
            .into());
        }
        owners.insert(path.clone(), label);
        planned.push(path);
    }

    std::fs::create_dir_all(output_dir).map_err(|e| ModelGenError::OutputWriteError {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let contents = model
        .entities
        .iter()
        .map(render_entity)
        .chain(model.enums.iter().map(|e| to_json(&e.name, e)));

    let mut written = Vec::with_capacity(planned.len());
    for (path, content) in planned.into_iter().zip(contents) {
        write_file(&path, &content?)?;
        written.push(path);
    }

    Ok(written)
}

fn to_json<T: Serialize>(name: &str, value: &T) -> Result<String, ModelGenError> {
    serde_json::to_string_pretty(value).map_err(|e| ModelGenError::SerializeError {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ModelGenError> {
    std::fs::write(path, content).map_err(|e| ModelGenError::OutputWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
