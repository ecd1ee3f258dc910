//! Unit tests for the customization pipeline
//!
//! These tests exercise the rename passes end to end on in-memory models and
//! check that every cross-reference follows each rename.

use pretty_assertions::assert_eq;
use serde_json::json;

use schema_modelgen::model::{DataTypeDefaults, Entity, Relation, SchemaModel};
use schema_modelgen::naming::{
    CaseConversion, CasedNamingStrategy, DefaultNamingStrategy, NamingError, NamingStrategy,
};
use schema_modelgen::pipeline::{apply_naming_strategy, set_relation_ids};
use schema_modelgen::{customize_model, CustomizeOutcome, GenerationOptions, ModelGenError};

use crate::common::{
    assert_referentially_closed, assert_unique_column_names, blog_model, column_names, entity,
    model_from,
};

fn customize(model: &mut SchemaModel, strategy: &dyn NamingStrategy) -> CustomizeOutcome {
    customize_model(
        model,
        &GenerationOptions::default(),
        strategy,
        &DataTypeDefaults::new(),
    )
    .expect("Customization should succeed")
}

/// Renames one entity and leaves everything else untouched
struct RenameEntity {
    from: &'static str,
    to: &'static str,
}

impl NamingStrategy for RenameEntity {
    fn entity_name(&self, name: &str) -> Result<String, NamingError> {
        let renamed = if name == self.from { self.to } else { name };
        Ok(renamed.to_string())
    }

    fn relation_name(
        &self,
        column_name: &str,
        _relation: &Relation,
        _entity: &Entity,
    ) -> Result<String, NamingError> {
        Ok(column_name.to_string())
    }
}

struct UppercaseColumns;

impl NamingStrategy for UppercaseColumns {
    fn column_name(&self, name: &str) -> Result<String, NamingError> {
        Ok(name.to_uppercase())
    }
}

struct LowercaseColumns;

impl NamingStrategy for LowercaseColumns {
    fn column_name(&self, name: &str) -> Result<String, NamingError> {
        Ok(name.to_lowercase())
    }
}

struct RejectColumn(&'static str);

impl NamingStrategy for RejectColumn {
    fn column_name(&self, name: &str) -> Result<String, NamingError> {
        if name == self.0 {
            Err(NamingError::new(format!("reserved column name: {}", name)))
        } else {
            Ok(name.to_string())
        }
    }
}

// ============================================================================
// Default Strategy Tests
// ============================================================================

#[test]
fn test_blog_relation_fields_renamed() {
    let mut model = blog_model();
    let outcome = customize(&mut model, &DefaultNamingStrategy);

    match outcome {
        CustomizeOutcome::Customized { entities, renames } => {
            assert_eq!(entities, 3);
            assert_eq!(renames.relations, 4);
            assert_eq!(renames.entities, 0);
            assert_eq!(renames.columns, 0);
        }
        CustomizeOutcome::EmptySchema => panic!("Blog schema is not empty"),
    }

    assert_eq!(column_names(entity(&model, "author")), vec!["id", "name", "posts"]);
    assert_eq!(
        column_names(entity(&model, "post")),
        vec!["id", "title", "author", "status", "comments"]
    );
    assert_eq!(column_names(entity(&model, "comment")), vec!["id", "body", "post"]);

    assert_referentially_closed(&model);
    assert_unique_column_names(&model);
}

#[test]
fn test_blog_relation_copies_follow_renames() {
    let mut model = blog_model();
    customize(&mut model, &DefaultNamingStrategy);

    let post = entity(&model, "post");
    let relation = &post.column("author").unwrap().relations[0];
    assert_eq!(relation.owner_table, "post");
    assert_eq!(relation.owner_column, "author");
    assert_eq!(relation.related_table, "author");
    assert_eq!(relation.related_column, "posts");

    let author = entity(&model, "author");
    let inverse = &author.column("posts").unwrap().relations[0];
    assert_eq!(inverse.related_table, "post");
    assert_eq!(inverse.related_column, "author");
}

#[test]
fn test_blog_index_columns_follow_renames() {
    let mut model = blog_model();
    customize(&mut model, &DefaultNamingStrategy);

    let post = entity(&model, "post");
    let index = post
        .indexes
        .iter()
        .find(|i| i.name == "IDX_post_author")
        .unwrap();
    let names: Vec<&str> = index.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["author", "title"]);

    let comment = entity(&model, "comment");
    assert_eq!(comment.indexes[0].columns[0].name, "post");
}

#[test]
fn test_relation_field_collision_numbered() {
    let mut model = model_from(json!({
        "entities": [
            { "name": "author", "columns": [ { "name": "id" } ] },
            { "name": "post", "columns": [
                { "name": "author" },
                { "name": "authorId", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "post", "owner_column": "authorId",
                    "related_table": "author", "related_column": "id"
                } ] }
            ],
              "indexes": [ { "name": "IDX_author", "columns": ["authorId"] } ] }
        ]
    }));
    customize(&mut model, &DefaultNamingStrategy);

    let post = entity(&model, "post");
    assert_eq!(column_names(post), vec!["author", "author2"]);
    assert_eq!(post.indexes[0].columns[0].name, "author2");
    assert_referentially_closed(&model);
}

#[test]
fn test_snake_case_relation_columns_become_camel_case_fields() {
    let mut model = model_from(json!({
        "entities": [
            { "name": "node", "columns": [
                { "name": "id" },
                { "name": "created_by_id", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "node", "owner_column": "created_by_id",
                    "related_table": "node", "related_column": "id"
                } ] },
                { "name": "parent_node", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "node", "owner_column": "parent_node",
                    "related_table": "node", "related_column": "id"
                } ] }
            ],
              "indexes": [ { "name": "IDX_node_parent", "columns": ["parent_node"] } ] }
        ]
    }));
    customize(&mut model, &DefaultNamingStrategy);

    let node = entity(&model, "node");
    assert_eq!(column_names(node), vec!["id", "createdBy", "parentNode"]);
    assert_eq!(node.columns[1].relations[0].owner_column, "createdBy");
    assert_eq!(node.indexes[0].columns[0].name, "parentNode");
    assert_referentially_closed(&model);
}

#[test]
fn test_column_with_several_relations_renamed_once_per_relation() {
    let mut model = model_from(json!({
        "entities": [
            { "name": "account", "columns": [ { "name": "id" }, { "name": "profileId" } ] },
            { "name": "document", "columns": [
                { "name": "ownerId", "relations": [
                    { "kind": "many_to_one", "is_owner": true,
                      "owner_table": "document", "owner_column": "ownerId",
                      "related_table": "account", "related_column": "id" },
                    { "kind": "one_to_one", "is_owner": true,
                      "owner_table": "document", "owner_column": "ownerId",
                      "related_table": "account", "related_column": "profileId" }
                ] }
            ] }
        ]
    }));
    let renames = apply_naming_strategy(&mut model, &DefaultNamingStrategy).unwrap();

    // the second relation derives from "owner" and leaves it unchanged
    assert_eq!(renames.relations, 1);
    let column = &entity(&model, "document").columns[0];
    assert_eq!(column.name, "owner");
    assert!(column.relations.iter().all(|r| r.owner_column == "owner"));
    assert_referentially_closed(&model);
}

// ============================================================================
// Propagation Tests
// ============================================================================

#[test]
fn test_entity_rename_reaches_every_relation() {
    let mut model = model_from(json!({
        "entities": [
            { "name": "A", "columns": [
                { "name": "col1", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "A", "owner_column": "col1",
                    "related_table": "B", "related_column": "id"
                } ] }
            ] },
            { "name": "B", "columns": [
                { "name": "id" },
                { "name": "a", "relations": [ {
                    "kind": "one_to_many", "is_owner": false,
                    "owner_table": "B", "owner_column": "a",
                    "related_table": "A", "related_column": "col1"
                } ] }
            ] }
        ]
    }));
    customize(&mut model, &RenameEntity { from: "A", to: "A2" });

    assert_eq!(model.entities[0].name, "A2");
    for relation in model.entities.iter().flat_map(|e| &e.columns).flat_map(|c| &c.relations) {
        assert_ne!(relation.owner_table, "A");
        assert_ne!(relation.related_table, "A");
    }
    assert_eq!(model.entities[0].columns[0].relations[0].owner_table, "A2");
    assert_eq!(model.entities[1].columns[1].relations[0].related_table, "A2");
    assert_eq!(model.entities[1].imports, vec!["A2"]);
    assert_referentially_closed(&model);
}

#[test]
fn test_column_rename_reaches_indexes_and_relations() {
    let mut model = blog_model();
    customize(&mut model, &UppercaseColumns);

    let post = entity(&model, "post");
    assert_eq!(
        column_names(post),
        vec!["ID", "TITLE", "AUTHOR", "STATUS", "COMMENTS"]
    );
    let index = post
        .indexes
        .iter()
        .find(|i| i.name == "IDX_post_author")
        .unwrap();
    assert_eq!(index.columns[0].name, "AUTHOR");

    let author = entity(&model, "author");
    assert_eq!(author.columns[2].relations[0].related_column, "AUTHOR");
    assert_eq!(author.columns[2].relations[0].owner_column, "POSTS");
    assert_referentially_closed(&model);
}

#[test]
fn test_column_rename_never_duplicates_names() {
    let mut model = model_from(json!({
        "entities": [ { "name": "person", "columns": [ { "name": "Name" }, { "name": "name" } ] } ]
    }));
    customize(&mut model, &LowercaseColumns);

    assert_eq!(column_names(&model.entities[0]), vec!["name2", "name"]);
    assert_unique_column_names(&model);
}

#[test]
fn test_cased_strategy_keeps_model_consistent() {
    let mut model = blog_model();
    let strategy = CasedNamingStrategy::new(DefaultNamingStrategy)
        .with_entity_case(CaseConversion::Pascal)
        .with_column_case(CaseConversion::Camel);
    customize(&mut model, &strategy);

    let names: Vec<&str> = model.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Author", "Post", "Comment"]);

    let post = entity(&model, "Post");
    assert_eq!(post.columns[2].relations[0].related_table, "Author");
    assert_eq!(post.imports, vec!["Author", "PostStatus", "Comment"]);
    assert_referentially_closed(&model);
}

// ============================================================================
// Flag and Import Tests
// ============================================================================

#[test]
fn test_imports_and_generation_flags() {
    let mut model = blog_model();
    let options = GenerationOptions {
        generate_constructor: true,
        active_record: true,
        ..GenerationOptions::default()
    };
    customize_model(
        &mut model,
        &options,
        &DefaultNamingStrategy,
        &DataTypeDefaults::new(),
    )
    .unwrap();

    assert_eq!(entity(&model, "post").imports, vec!["author", "PostStatus", "comment"]);
    assert_eq!(entity(&model, "author").imports, vec!["post"]);
    assert!(model
        .entities
        .iter()
        .all(|e| e.generate_constructor && e.is_active_record));
}

#[test]
fn test_imports_are_deduplicated_and_skip_self() {
    let mut model = model_from(json!({
        "entities": [
            { "name": "user", "columns": [ { "name": "id" } ] },
            { "name": "node", "columns": [
                { "name": "id" },
                { "name": "parentId", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "node", "owner_column": "parentId",
                    "related_table": "node", "related_column": "id"
                } ] },
                { "name": "createdById", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "node", "owner_column": "createdById",
                    "related_table": "user", "related_column": "id"
                } ] },
                { "name": "updatedById", "relations": [ {
                    "kind": "many_to_one", "is_owner": true,
                    "owner_table": "node", "owner_column": "updatedById",
                    "related_table": "user", "related_column": "id"
                } ] }
            ] }
        ]
    }));
    customize(&mut model, &DefaultNamingStrategy);

    assert_eq!(entity(&model, "node").imports, vec!["user"]);
}

#[test]
fn test_relation_ids_follow_ownership() {
    let mut model = blog_model();
    let options = GenerationOptions {
        relation_ids: true,
        ..GenerationOptions::default()
    };
    customize_model(
        &mut model,
        &options,
        &DefaultNamingStrategy,
        &DataTypeDefaults::new(),
    )
    .unwrap();

    for relation in model.entities.iter().flat_map(|e| &e.columns).flat_map(|c| &c.relations) {
        assert_eq!(relation.relation_id_field, relation.is_owner);
    }
}

#[test]
fn test_relation_ids_disabled_by_default() {
    let mut model = blog_model();
    customize(&mut model, &DefaultNamingStrategy);

    assert!(model
        .entities
        .iter()
        .flat_map(|e| &e.columns)
        .flat_map(|c| &c.relations)
        .all(|r| !r.relation_id_field));
}

#[test]
fn test_set_relation_ids_renames_nothing() {
    let mut model = blog_model();
    set_relation_ids(&mut model);

    assert_eq!(
        column_names(entity(&model, "post")),
        vec!["id", "title", "authorId", "status", "comment"]
    );
}

// ============================================================================
// Error and Empty Schema Tests
// ============================================================================

#[test]
fn test_empty_schema_short_circuits() {
    let mut model = SchemaModel::new();
    let outcome = customize(&mut model, &RejectColumn("anything"));

    assert_eq!(outcome, CustomizeOutcome::EmptySchema);
    assert!(model.entities.is_empty());
}

#[test]
fn test_strategy_failure_aborts_run() {
    let mut model = blog_model();
    let err = customize_model(
        &mut model,
        &GenerationOptions::default(),
        &RejectColumn("title"),
        &DataTypeDefaults::new(),
    )
    .unwrap_err();

    match err {
        ModelGenError::NamingStrategy {
            stage,
            name,
            source,
        } => {
            assert_eq!(stage, "column renaming");
            assert_eq!(name, "post.title");
            assert_eq!(source.message, "reserved column name: title");
        }
        other => panic!("Unexpected error: {other}"),
    }
}
