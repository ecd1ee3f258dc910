//! Schema model element types

use serde::{Deserialize, Serialize};

/// Stable identifier of an entity, assigned once when the model is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

/// Stable identifier of a column within its owning entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(pub usize);

/// Global address of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnRef {
    pub entity: EntityId,
    pub column: ColumnId,
}

impl ColumnRef {
    pub fn new(entity: EntityId, column: ColumnId) -> Self {
        Self { entity, column }
    }
}

/// Kind of relational object an entity was introspected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[default]
    BaseTable,
    View,
}

/// Entity element (one table or view)
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// Current name, unique across the model
    pub name: String,
    /// Physical name as introspected; never renamed
    pub sql_name: String,
    pub schema: String,
    pub database: String,
    pub kind: EntityKind,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
    /// Names the rendered entity depends on (custom types and related entities)
    pub imports: Vec<String>,
    pub generate_constructor: bool,
    pub is_active_record: bool,
}

impl Entity {
    /// Whether any column currently carries `name`
    pub fn has_column_named(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Find a column by its current name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Column element, owned by exactly one entity
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    /// Current name, unique within the owning entity
    pub name: String,
    pub sql_name: String,
    /// Target-language type name; for custom types this is the enum/domain name
    pub ts_type: String,
    pub is_custom_type: bool,
    pub is_primary: bool,
    pub is_generated: bool,
    pub options: ColumnOptions,
    pub relations: Vec<Relation>,
}

/// Physical type descriptor of a column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub nullable: bool,
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

/// Cardinality of a relation as seen from the side that declares it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// One-to-many and many-to-many relations are rendered as collections
    pub fn is_to_many(self) -> bool {
        matches!(self, RelationKind::OneToMany | RelationKind::ManyToMany)
    }
}

/// Directed association edge declared on a column.
///
/// The `owner_*`/`related_*` strings are denormalized copies of the current
/// names of the endpoints; `owner`/`related` are the resolved identities the
/// pipeline uses to keep those copies in sync.
#[derive(Debug, Clone, Serialize)]
pub struct Relation {
    pub kind: RelationKind,
    /// True on the side that holds the physical foreign key
    pub is_owner: bool,
    /// Expose the raw foreign-key value alongside the navigable relation
    pub relation_id_field: bool,
    pub owner_table: String,
    pub owner_column: String,
    pub related_table: String,
    pub related_column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_update: Option<String>,
    #[serde(skip)]
    pub owner: ColumnRef,
    #[serde(skip)]
    pub related: ColumnRef,
}

/// Index element
#[derive(Debug, Clone, Serialize)]
pub struct Index {
    pub name: String,
    pub is_unique: bool,
    pub is_primary_key: bool,
    pub columns: Vec<IndexColumn>,
}

/// Column reference inside an index
#[derive(Debug, Clone, Serialize)]
pub struct IndexColumn {
    pub name: String,
    #[serde(skip)]
    pub column: ColumnId,
}

/// Enum or domain type used by custom-type columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}
