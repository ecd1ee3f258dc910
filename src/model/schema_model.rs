//! Schema model representation

use serde::Serialize;

use super::{Column, ColumnId, ColumnRef, EntityId, EnumType, Entity};

/// The complete schema model
#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaModel {
    /// All entities, addressed by `EntityId`
    pub entities: Vec<Entity>,
    /// Enum and domain types referenced by custom-type columns
    pub enums: Vec<EnumType>,
}

/// A name copy that no longer matches the current name of its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Entity holding the stale copy
    pub entity: String,
    /// Where the copy lives, e.g. `column authorId relation 0 owner_column`
    pub location: String,
    pub found: String,
    pub expected: String,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity by id.
    ///
    /// Panics if `id` was not assigned by this model; see [`Self::get_entity`].
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// Column by address.
    ///
    /// Panics if `reference` is out of range; see [`Self::get_column`].
    pub fn column(&self, reference: ColumnRef) -> &Column {
        &self.entities[reference.entity.0].columns[reference.column.0]
    }

    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn get_column(&self, reference: ColumnRef) -> Option<&Column> {
        self.get_entity(reference.entity)?
            .columns
            .get(reference.column.0)
    }

    /// Find an entity by its current name
    pub fn entity_named(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Total number of relations declared across all columns
    pub fn relation_count(&self) -> usize {
        self.entities
            .iter()
            .flat_map(|e| &e.columns)
            .map(|c| c.relations.len())
            .sum()
    }

    /// Collect every relation and index name copy that disagrees with the
    /// current name of the entity or column it identifies.
    ///
    /// Empty for a referentially closed model.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for entity in &self.entities {
            for column in &entity.columns {
                for (i, relation) in column.relations.iter().enumerate() {
                    let endpoints = [
                        ("owner", relation.owner, &relation.owner_table, &relation.owner_column),
                        (
                            "related",
                            relation.related,
                            &relation.related_table,
                            &relation.related_column,
                        ),
                    ];
                    for (side, target, table, column_name) in endpoints {
                        let expected_table = match self.get_entity(target.entity) {
                            Some(target_entity) => target_entity.name.clone(),
                            None => format!("<missing entity {}>", target.entity.0),
                        };
                        if *table != expected_table {
                            dangling.push(DanglingReference {
                                entity: entity.name.clone(),
                                location: format!(
                                    "column {} relation {} {}_table",
                                    column.name, i, side
                                ),
                                found: table.clone(),
                                expected: expected_table,
                            });
                        }
                        let expected_column = match self.get_column(target) {
                            Some(target_column) => target_column.name.clone(),
                            None => missing_column(target.column),
                        };
                        if *column_name != expected_column {
                            dangling.push(DanglingReference {
                                entity: entity.name.clone(),
                                location: format!(
                                    "column {} relation {} {}_column",
                                    column.name, i, side
                                ),
                                found: column_name.clone(),
                                expected: expected_column,
                            });
                        }
                    }
                }
            }

            for index in &entity.indexes {
                for index_column in &index.columns {
                    let expected = match entity.columns.get(index_column.column.0) {
                        Some(target_column) => target_column.name.clone(),
                        None => missing_column(index_column.column),
                    };
                    if index_column.name != expected {
                        dangling.push(DanglingReference {
                            entity: entity.name.clone(),
                            location: format!("index {}", index.name),
                            found: index_column.name.clone(),
                            expected,
                        });
                    }
                }
            }
        }

        dangling
    }

    /// Pairs of columns sharing a current name within one entity
    pub fn duplicate_column_names(&self) -> Vec<(String, String)> {
        let mut duplicates = Vec::new();
        for entity in &self.entities {
            for (i, column) in entity.columns.iter().enumerate() {
                if entity.columns[..i].iter().any(|c| c.name == column.name) {
                    duplicates.push((entity.name.clone(), column.name.clone()));
                }
            }
        }
        duplicates
    }
}

fn missing_column(id: ColumnId) -> String {
    format!("<missing column {}>", id.0)
}
