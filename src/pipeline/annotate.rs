//! Flag and import annotation

use crate::config::GenerationOptions;
use crate::model::SchemaModel;

/// Mark every owning relation for relation-id materialization
pub fn set_relation_ids(model: &mut SchemaModel) {
    for column in model.entities.iter_mut().flat_map(|e| e.columns.iter_mut()) {
        for relation in &mut column.relations {
            relation.relation_id_field = relation.is_owner;
        }
    }
}

/// Derive each entity's import list and copy the generation flags.
///
/// Imports are the custom type names used by its columns followed by the
/// other entities its relations point at, de-duplicated in first-seen order.
pub fn add_imports_and_generation_options(model: &mut SchemaModel, options: &GenerationOptions) {
    for entity in &mut model.entities {
        let mut imports: Vec<String> = Vec::new();
        let mut push = |name: &str| {
            if !imports.iter().any(|i| i == name) {
                imports.push(name.to_string());
            }
        };

        for column in &entity.columns {
            if column.is_custom_type {
                push(&column.ts_type);
            }
            for relation in &column.relations {
                if relation.related_table != entity.name {
                    push(&relation.related_table);
                }
            }
        }

        entity.imports = imports;
        entity.generate_constructor = options.generate_constructor;
        entity.is_active_record = options.active_record;
    }
}
