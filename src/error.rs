//! Error types for schema-modelgen

use std::path::PathBuf;
use thiserror::Error;

use crate::naming::NamingError;

/// Errors that can occur while building, normalizing, or emitting a model
#[derive(Error, Debug)]
pub enum ModelGenError {
    #[error("Failed to read introspection file: {path}")]
    IntrospectionReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse introspection file: {path}")]
    IntrospectionParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read type defaults file: {path}")]
    DefaultsReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse type defaults file: {path}")]
    DefaultsParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read options file: {path}")]
    OptionsReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse options file: {path}")]
    OptionsParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown naming strategy: {name} (registered: {registered})")]
    UnknownNamingStrategy { name: String, registered: String },

    #[error("Invalid option value for {option}: {message}")]
    InvalidOption { option: String, message: String },

    #[error("Duplicate entity name: {name}")]
    DuplicateEntity { name: String },

    #[error("Duplicate column name {column} in entity {entity}")]
    DuplicateColumn { entity: String, column: String },

    #[error("Unresolved reference to {table}.{column} from {context}")]
    UnresolvedReference {
        table: String,
        column: String,
        context: String,
    },

    #[error("Naming strategy failed during {stage} for {name}")]
    NamingStrategy {
        stage: &'static str,
        name: String,
        #[source]
        source: NamingError,
    },

    #[error("Failed to write output file: {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file {path} would be written for both {first} and {second}")]
    DuplicateOutputFile {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("Failed to serialize {name}: {message}")]
    SerializeError { name: String, message: String },
}
