//! Schema model building

mod builder;
mod defaults;
mod elements;
mod schema_model;

pub use builder::build_model;
pub use defaults::{remove_column_default_properties, DataTypeDefaults, TypeDefaults};
pub use elements::*;
pub use schema_model::{DanglingReference, SchemaModel};
