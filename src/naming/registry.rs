//! Statically registered naming strategies
//!
//! Options name a strategy; the registry maps that name to a constructor.
//! Embedding applications register their own strategies before the run.

use std::collections::BTreeMap;

use crate::config::GenerationOptions;
use crate::error::ModelGenError;

use super::{CaseConversion, CasedNamingStrategy, DefaultNamingStrategy, NamingStrategy};

/// Builds a strategy from the run's options
pub type StrategyFactory = Box<dyn Fn(&GenerationOptions) -> Box<dyn NamingStrategy>>;

/// Name to strategy constructor map
pub struct StrategyRegistry {
    factories: BTreeMap<String, StrategyFactory>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_STRATEGY, |_| Box::new(DefaultNamingStrategy));
        registry.register(CASED_STRATEGY, |options| {
            Box::new(
                CasedNamingStrategy::new(DefaultNamingStrategy)
                    .with_entity_case(options.entity_case)
                    .with_column_case(options.property_case)
                    .with_relation_case(options.relation_case),
            )
        });
        registry
    }
}

pub const DEFAULT_STRATEGY: &str = "default";
pub const CASED_STRATEGY: &str = "cased";

impl StrategyRegistry {
    /// Registry with the built-in `default` and `cased` strategies
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry without any strategy
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register (or replace) a strategy under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&GenerationOptions) -> Box<dyn NamingStrategy> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Construct the strategy registered under `name`
    pub fn create(
        &self,
        name: &str,
        options: &GenerationOptions,
    ) -> Result<Box<dyn NamingStrategy>, ModelGenError> {
        let factory =
            self.factories
                .get(name)
                .ok_or_else(|| ModelGenError::UnknownNamingStrategy {
                    name: name.to_string(),
                    registered: self.names().join(", "),
                })?;
        Ok(factory(options))
    }

    /// Construct the strategy the options select.
    ///
    /// Without an explicit choice, `cased` is used when any naming axis asks
    /// for a case conversion and `default` otherwise.
    pub fn create_for(
        &self,
        options: &GenerationOptions,
    ) -> Result<Box<dyn NamingStrategy>, ModelGenError> {
        let name = match options.naming_strategy.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                let any_case = [
                    options.entity_case,
                    options.property_case,
                    options.relation_case,
                ]
                .iter()
                .any(|c| *c != CaseConversion::None);
                if any_case {
                    CASED_STRATEGY
                } else {
                    DEFAULT_STRATEGY
                }
            }
        };
        self.create(name, options)
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}
