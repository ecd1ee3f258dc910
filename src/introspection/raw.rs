//! Name-based introspection document

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::ModelGenError;
use crate::model::{ColumnOptions, DataTypeDefaults, EntityKind, EnumType, RelationKind};

/// Everything a driver discovered in one database
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSchema {
    #[serde(default)]
    pub entities: Vec<RawEntity>,
    #[serde(default)]
    pub enums: Vec<EnumType>,
}

/// One introspected table or view
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntity {
    pub name: String,
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub columns: Vec<RawColumn>,
    #[serde(default)]
    pub indexes: Vec<RawIndex>,
}

/// One introspected column; relation endpoints are given by name
#[derive(Debug, Clone, Deserialize)]
pub struct RawColumn {
    pub name: String,
    #[serde(default)]
    pub ts_type: String,
    #[serde(default)]
    pub is_custom_type: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_generated: bool,
    #[serde(default)]
    pub options: ColumnOptions,
    #[serde(default)]
    pub relations: Vec<RawRelation>,
}

/// Relation endpoints by table and column name
#[derive(Debug, Clone, Deserialize)]
pub struct RawRelation {
    pub kind: RelationKind,
    #[serde(default)]
    pub is_owner: bool,
    pub owner_table: String,
    pub owner_column: String,
    pub related_table: String,
    pub related_column: String,
    #[serde(default)]
    pub on_delete: Option<String>,
    #[serde(default)]
    pub on_update: Option<String>,
}

/// Index over columns of its owning entity, by column name
#[derive(Debug, Clone, Deserialize)]
pub struct RawIndex {
    pub name: String,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub columns: Vec<String>,
}

/// Read a driver's introspection document from a JSON file
pub fn load_introspection(path: &Path) -> Result<RawSchema> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ModelGenError::IntrospectionReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let schema = serde_json::from_str(&content).map_err(|e| {
        ModelGenError::IntrospectionParseError {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(schema)
}

/// Read a driver's per-type default attribute table from a JSON file
pub fn load_data_type_defaults(path: &Path) -> Result<DataTypeDefaults> {
    let content = std::fs::read_to_string(path).map_err(|e| ModelGenError::DefaultsReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let defaults =
        serde_json::from_str(&content).map_err(|e| ModelGenError::DefaultsParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(defaults)
}
