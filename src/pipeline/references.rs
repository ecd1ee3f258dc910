//! Reverse index from entities and columns to the name copies naming them
//!
//! Built once per run from the resolved identities. Entity and column ids
//! never change during normalization, so the index stays valid while names
//! are rewritten.

use std::collections::HashMap;

use crate::model::{ColumnId, ColumnRef, EntityId, SchemaModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Owner,
    Related,
}

/// Location of one relation endpoint inside the model
#[derive(Debug, Clone, Copy)]
struct RelationSlot {
    entity: EntityId,
    column: ColumnId,
    relation: usize,
    endpoint: Endpoint,
}

/// Location of one index column inside an entity
#[derive(Debug, Clone, Copy)]
struct IndexSlot {
    index: usize,
    position: usize,
}

#[derive(Debug, Default)]
pub struct ReferenceIndex {
    by_entity: HashMap<EntityId, Vec<RelationSlot>>,
    by_column: HashMap<ColumnRef, Vec<RelationSlot>>,
    index_columns: HashMap<ColumnRef, Vec<IndexSlot>>,
}

impl ReferenceIndex {
    pub fn build(model: &SchemaModel) -> Self {
        let mut refs = Self::default();

        for (e, entity) in model.entities.iter().enumerate() {
            let entity_id = EntityId(e);

            for (c, column) in entity.columns.iter().enumerate() {
                for (r, relation) in column.relations.iter().enumerate() {
                    for (endpoint, target) in [
                        (Endpoint::Owner, relation.owner),
                        (Endpoint::Related, relation.related),
                    ] {
                        let slot = RelationSlot {
                            entity: entity_id,
                            column: ColumnId(c),
                            relation: r,
                            endpoint,
                        };
                        refs.by_entity.entry(target.entity).or_default().push(slot);
                        refs.by_column.entry(target).or_default().push(slot);
                    }
                }
            }

            for (i, index) in entity.indexes.iter().enumerate() {
                for (p, index_column) in index.columns.iter().enumerate() {
                    refs.index_columns
                        .entry(ColumnRef::new(entity_id, index_column.column))
                        .or_default()
                        .push(IndexSlot {
                            index: i,
                            position: p,
                        });
                }
            }
        }

        refs
    }

    /// Rename a column and every relation endpoint and index column naming it
    pub fn rename_column(&self, model: &mut SchemaModel, target: ColumnRef, new_name: &str) {
        if let Some(slots) = self.by_column.get(&target) {
            for slot in slots {
                let relation = &mut model.entities[slot.entity.0].columns[slot.column.0].relations
                    [slot.relation];
                match slot.endpoint {
                    Endpoint::Owner => relation.owner_column = new_name.to_string(),
                    Endpoint::Related => relation.related_column = new_name.to_string(),
                }
            }
        }

        let entity = &mut model.entities[target.entity.0];
        if let Some(slots) = self.index_columns.get(&target) {
            for slot in slots {
                entity.indexes[slot.index].columns[slot.position].name = new_name.to_string();
            }
        }

        entity.columns[target.column.0].name = new_name.to_string();
    }

    /// Rename an entity and every relation endpoint naming it
    pub fn rename_entity(&self, model: &mut SchemaModel, target: EntityId, new_name: &str) {
        if let Some(slots) = self.by_entity.get(&target) {
            for slot in slots {
                let relation = &mut model.entities[slot.entity.0].columns[slot.column.0].relations
                    [slot.relation];
                match slot.endpoint {
                    Endpoint::Owner => relation.owner_table = new_name.to_string(),
                    Endpoint::Related => relation.related_table = new_name.to_string(),
                }
            }
        }

        model.entities[target.0].name = new_name.to_string();
    }

    /// Number of name copies that would follow a rename of `target`
    pub fn dependents_of(&self, target: ColumnRef) -> usize {
        self.by_column.get(&target).map_or(0, Vec::len)
            + self.index_columns.get(&target).map_or(0, Vec::len)
    }
}
