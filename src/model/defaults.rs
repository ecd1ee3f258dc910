//! Per-type default physical attributes
//!
//! Drivers report the attribute values a database assumes when a column does
//! not spell them out. Columns whose explicit values equal those defaults have
//! them cleared so rendering does not repeat them.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ColumnOptions, SchemaModel};

/// Default attributes for one physical type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypeDefaults {
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub width: Option<u32>,
}

/// Default attributes keyed by physical type name
pub type DataTypeDefaults = BTreeMap<String, TypeDefaults>;

/// Clear every column attribute that equals its type's default.
///
/// Idempotent: a cleared attribute is `None` and can no longer match.
pub fn remove_column_default_properties(model: &mut SchemaModel, defaults: &DataTypeDefaults) {
    if defaults.is_empty() {
        return;
    }

    for column in model.entities.iter_mut().flat_map(|e| e.columns.iter_mut()) {
        if let Some(type_defaults) = defaults.get(&column.options.data_type) {
            strip_defaults(&mut column.options, type_defaults);
        }
    }
}

fn strip_defaults(options: &mut ColumnOptions, defaults: &TypeDefaults) {
    clear_if_default(&mut options.length, defaults.length);
    clear_if_default(&mut options.precision, defaults.precision);
    clear_if_default(&mut options.scale, defaults.scale);
    clear_if_default(&mut options.width, defaults.width);
}

#[inline]
fn clear_if_default(value: &mut Option<u32>, default: Option<u32>) {
    if value.is_some() && *value == default {
        *value = None;
    }
}
