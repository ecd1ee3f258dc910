//! Rendering of the normalized model
//!
//! Writes one JSON document per entity and per enum type. Template-based
//! source rendering plugs in at the same boundary.

mod writer;

pub use writer::{file_name_for, render_entity, write_model};
