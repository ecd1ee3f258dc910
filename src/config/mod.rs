//! Generation options

mod options;

pub use options::GenerationOptions;
