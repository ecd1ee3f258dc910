//! Naming strategies
//!
//! A naming strategy decides the final identifier of every entity, column and
//! relation field. The pipeline calls it once per element and takes care of
//! propagating the result through the model.

mod case;
mod default_strategy;
mod registry;

pub use case::{CaseConversion, CasedNamingStrategy};
pub use default_strategy::{derive_relation_name, resolve_collision, DefaultNamingStrategy};
pub use registry::{StrategyFactory, StrategyRegistry};

use thiserror::Error;

use crate::model::{Entity, Relation};

/// Failure reported by a naming strategy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NamingError {
    pub message: String,
}

impl NamingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Policy computing final names. Every method may be overridden on its own.
pub trait NamingStrategy {
    /// Final name of an entity; identity by default
    fn entity_name(&self, name: &str) -> Result<String, NamingError> {
        Ok(name.to_string())
    }

    /// Final name of a column; identity by default
    fn column_name(&self, name: &str) -> Result<String, NamingError> {
        Ok(name.to_string())
    }

    /// Field name representing `relation` on `entity`, derived from the
    /// current name of the column declaring it
    fn relation_name(
        &self,
        column_name: &str,
        relation: &Relation,
        entity: &Entity,
    ) -> Result<String, NamingError> {
        Ok(derive_relation_name(column_name, relation, entity))
    }
}

impl<S: NamingStrategy + ?Sized> NamingStrategy for Box<S> {
    fn entity_name(&self, name: &str) -> Result<String, NamingError> {
        (**self).entity_name(name)
    }

    fn column_name(&self, name: &str) -> Result<String, NamingError> {
        (**self).column_name(name)
    }

    fn relation_name(
        &self,
        column_name: &str,
        relation: &Relation,
        entity: &Entity,
    ) -> Result<String, NamingError> {
        (**self).relation_name(column_name, relation, entity)
    }
}
