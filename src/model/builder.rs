//! Build the schema model from a driver's introspection document
//!
//! Every name reference in the raw document is resolved to a stable
//! identifier here, so later passes never match on stale strings.

use std::collections::HashMap;

use crate::error::ModelGenError;
use crate::introspection::{RawColumn, RawEntity, RawIndex, RawRelation, RawSchema};

use super::{
    Column, ColumnId, ColumnRef, Entity, EntityId, Index, IndexColumn, Relation, SchemaModel,
};

/// Name lookup tables built before any element is converted
struct NameTable<'a> {
    entities: HashMap<&'a str, EntityId>,
    columns: Vec<HashMap<&'a str, ColumnId>>,
}

impl<'a> NameTable<'a> {
    fn from_raw(raw: &'a RawSchema) -> Result<Self, ModelGenError> {
        let mut entities = HashMap::with_capacity(raw.entities.len());
        let mut columns = Vec::with_capacity(raw.entities.len());

        for (i, entity) in raw.entities.iter().enumerate() {
            if entities.insert(entity.name.as_str(), EntityId(i)).is_some() {
                return Err(ModelGenError::DuplicateEntity {
                    name: entity.name.clone(),
                });
            }

            let mut entity_columns = HashMap::with_capacity(entity.columns.len());
            for (j, column) in entity.columns.iter().enumerate() {
                if entity_columns
                    .insert(column.name.as_str(), ColumnId(j))
                    .is_some()
                {
                    return Err(ModelGenError::DuplicateColumn {
                        entity: entity.name.clone(),
                        column: column.name.clone(),
                    });
                }
            }
            columns.push(entity_columns);
        }

        Ok(Self { entities, columns })
    }

    fn resolve(
        &self,
        table: &str,
        column: &str,
        context: &str,
    ) -> Result<ColumnRef, ModelGenError> {
        let unresolved = || ModelGenError::UnresolvedReference {
            table: table.to_string(),
            column: column.to_string(),
            context: context.to_string(),
        };

        let entity = *self.entities.get(table).ok_or_else(unresolved)?;
        let column = *self.columns[entity.0].get(column).ok_or_else(unresolved)?;
        Ok(ColumnRef::new(entity, column))
    }
}

/// Build a schema model from a raw introspection document
pub fn build_model(raw: &RawSchema) -> Result<SchemaModel, ModelGenError> {
    let names = NameTable::from_raw(raw)?;
    let mut model = SchemaModel::new();

    for (i, raw_entity) in raw.entities.iter().enumerate() {
        model
            .entities
            .push(entity_from_raw(raw_entity, EntityId(i), &names)?);
    }
    model.enums = raw.enums.clone();

    Ok(model)
}

fn entity_from_raw(
    raw: &RawEntity,
    id: EntityId,
    names: &NameTable<'_>,
) -> Result<Entity, ModelGenError> {
    let columns = raw
        .columns
        .iter()
        .map(|c| column_from_raw(c, &raw.name, names))
        .collect::<Result<Vec<_>, _>>()?;

    let indexes = raw
        .indexes
        .iter()
        .map(|ix| index_from_raw(ix, &raw.name, id, names))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Entity {
        name: raw.name.clone(),
        sql_name: raw.name.clone(),
        schema: raw.schema.clone(),
        database: raw.database.clone(),
        kind: raw.kind,
        columns,
        indexes,
        imports: Vec::new(),
        generate_constructor: false,
        is_active_record: false,
    })
}

fn column_from_raw(
    raw: &RawColumn,
    entity_name: &str,
    names: &NameTable<'_>,
) -> Result<Column, ModelGenError> {
    let context = format!("{}.{}", entity_name, raw.name);
    let relations = raw
        .relations
        .iter()
        .map(|r| relation_from_raw(r, &context, names))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Column {
        name: raw.name.clone(),
        sql_name: raw.name.clone(),
        ts_type: raw.ts_type.clone(),
        is_custom_type: raw.is_custom_type,
        is_primary: raw.is_primary,
        is_generated: raw.is_generated,
        options: raw.options.clone(),
        relations,
    })
}

fn relation_from_raw(
    raw: &RawRelation,
    context: &str,
    names: &NameTable<'_>,
) -> Result<Relation, ModelGenError> {
    let owner = names.resolve(&raw.owner_table, &raw.owner_column, context)?;
    let related = names.resolve(&raw.related_table, &raw.related_column, context)?;

    Ok(Relation {
        kind: raw.kind,
        is_owner: raw.is_owner,
        relation_id_field: false,
        owner_table: raw.owner_table.clone(),
        owner_column: raw.owner_column.clone(),
        related_table: raw.related_table.clone(),
        related_column: raw.related_column.clone(),
        on_delete: raw.on_delete.clone(),
        on_update: raw.on_update.clone(),
        owner,
        related,
    })
}

fn index_from_raw(
    raw: &RawIndex,
    entity_name: &str,
    entity: EntityId,
    names: &NameTable<'_>,
) -> Result<Index, ModelGenError> {
    let context = format!("index {} on {}", raw.name, entity_name);
    let columns = raw
        .columns
        .iter()
        .map(|name| {
            names.columns[entity.0]
                .get(name.as_str())
                .map(|&column| IndexColumn {
                    name: name.clone(),
                    column,
                })
                .ok_or_else(|| ModelGenError::UnresolvedReference {
                    table: entity_name.to_string(),
                    column: name.clone(),
                    context: context.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Index {
        name: raw.name.clone(),
        is_unique: raw.is_unique,
        is_primary_key: raw.is_primary_key,
        columns,
    })
}
