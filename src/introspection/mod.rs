//! Raw schema input produced by the introspection drivers
//!
//! Drivers are external collaborators; this module only defines the
//! name-based document they hand over and how it is read from disk.

mod raw;

pub use raw::{
    load_data_type_defaults, load_introspection, RawColumn, RawEntity, RawIndex, RawRelation,
    RawSchema,
};
