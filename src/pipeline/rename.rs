//! The three rename passes
//!
//! Pass order is part of the contract: relation fields first, then entities,
//! then columns. Each rename is propagated to every dependent name copy before
//! the next element is visited, so the model is referentially closed between
//! any two renames.

use tracing::{debug, info};

use crate::error::ModelGenError;
use crate::model::{ColumnId, ColumnRef, Entity, EntityId, SchemaModel};
use crate::naming::{resolve_collision, NamingStrategy};

use super::references::ReferenceIndex;

/// Number of elements whose name actually changed, per pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub relations: usize,
    pub entities: usize,
    pub columns: usize,
}

/// Run relation, entity and column renaming in that order
pub fn apply_naming_strategy(
    model: &mut SchemaModel,
    strategy: &dyn NamingStrategy,
) -> Result<RenameStats, ModelGenError> {
    let refs = ReferenceIndex::build(model);

    let relations = change_relation_names(model, strategy, &refs)?;
    info!(renamed = relations, "relation fields renamed");

    let entities = change_entity_names(model, strategy, &refs)?;
    info!(renamed = entities, "entities renamed");

    let columns = change_column_names(model, strategy, &refs)?;
    info!(renamed = columns, "columns renamed");

    Ok(RenameStats {
        relations,
        entities,
        columns,
    })
}

/// Stage 1: every column carrying relations takes the relation field name.
///
/// A column with several relations is renamed once per relation, each time
/// starting from the name the previous relation left behind.
fn change_relation_names(
    model: &mut SchemaModel,
    strategy: &dyn NamingStrategy,
    refs: &ReferenceIndex,
) -> Result<usize, ModelGenError> {
    let mut renamed = 0;

    for e in 0..model.entities.len() {
        for c in 0..model.entities[e].columns.len() {
            for r in 0..model.entities[e].columns[c].relations.len() {
                let entity = &model.entities[e];
                let column = &entity.columns[c];
                let new_name = strategy
                    .relation_name(&column.name, &column.relations[r], entity)
                    .map_err(|source| ModelGenError::NamingStrategy {
                        stage: "relation renaming",
                        name: format!("{}.{}", entity.name, column.name),
                        source,
                    })?;
                let new_name = unique_column_name(entity, ColumnId(c), new_name);
                if new_name == column.name {
                    continue;
                }

                let target = ColumnRef::new(EntityId(e), ColumnId(c));
                debug!(
                    entity = %entity.name,
                    from = %column.name,
                    to = %new_name,
                    dependents = refs.dependents_of(target),
                    "rename relation field"
                );
                refs.rename_column(model, target, &new_name);
                renamed += 1;
            }
        }
    }

    Ok(renamed)
}

/// Stage 2: entity names
fn change_entity_names(
    model: &mut SchemaModel,
    strategy: &dyn NamingStrategy,
    refs: &ReferenceIndex,
) -> Result<usize, ModelGenError> {
    let mut renamed = 0;

    for e in 0..model.entities.len() {
        let current = &model.entities[e].name;
        let new_name =
            strategy
                .entity_name(current)
                .map_err(|source| ModelGenError::NamingStrategy {
                    stage: "entity renaming",
                    name: current.clone(),
                    source,
                })?;
        let new_name = unique_entity_name(model, EntityId(e), new_name);
        if new_name == model.entities[e].name {
            continue;
        }

        debug!(from = %model.entities[e].name, to = %new_name, "rename entity");
        refs.rename_entity(model, EntityId(e), &new_name);
        renamed += 1;
    }

    Ok(renamed)
}

/// Stage 3: column names
fn change_column_names(
    model: &mut SchemaModel,
    strategy: &dyn NamingStrategy,
    refs: &ReferenceIndex,
) -> Result<usize, ModelGenError> {
    let mut renamed = 0;

    for e in 0..model.entities.len() {
        for c in 0..model.entities[e].columns.len() {
            let entity = &model.entities[e];
            let column = &entity.columns[c];
            let new_name =
                strategy
                    .column_name(&column.name)
                    .map_err(|source| ModelGenError::NamingStrategy {
                        stage: "column renaming",
                        name: format!("{}.{}", entity.name, column.name),
                        source,
                    })?;
            let new_name = unique_column_name(entity, ColumnId(c), new_name);
            if new_name == column.name {
                continue;
            }

            debug!(entity = %entity.name, from = %column.name, to = %new_name, "rename column");
            refs.rename_column(model, ColumnRef::new(EntityId(e), ColumnId(c)), &new_name);
            renamed += 1;
        }
    }

    Ok(renamed)
}

/// Keep a strategy's column name from clashing with a sibling column
fn unique_column_name(entity: &Entity, column: ColumnId, candidate: String) -> String {
    let current = &entity.columns[column.0].name;
    if &candidate == current || !entity.has_column_named(&candidate) {
        return candidate;
    }
    resolve_collision(candidate, current, entity)
}

/// Keep a strategy's entity name from clashing with another entity
fn unique_entity_name(model: &SchemaModel, entity: EntityId, candidate: String) -> String {
    let taken = |name: &str| {
        model
            .entities
            .iter()
            .enumerate()
            .any(|(i, e)| i != entity.0 && e.name == name)
    };
    if !taken(&candidate) {
        return candidate;
    }

    // at most entities.len() - 1 names are taken, so this terminates
    let mut n = 2;
    loop {
        let numbered = format!("{}{}", candidate, n);
        if !taken(&numbered) {
            return numbered;
        }
        n += 1;
    }
}
