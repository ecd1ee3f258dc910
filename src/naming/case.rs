//! Per-axis identifier casing

use std::fmt;
use std::str::FromStr;

use convert_case::{Case, Casing};
use serde::{Deserialize, Deserializer};

use crate::model::{Entity, Relation};

use super::{resolve_collision, NamingError, NamingStrategy};

/// Casing applied to one naming axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseConversion {
    #[default]
    None,
    Camel,
    Pascal,
    /// Dash-separated lowercase; only meaningful for file names
    Param,
}

impl FromStr for CaseConversion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(CaseConversion::None),
            "camel" => Ok(CaseConversion::Camel),
            "pascal" => Ok(CaseConversion::Pascal),
            "param" | "kebab" => Ok(CaseConversion::Param),
            _ => Err(format!("Unknown case conversion: {}", s)),
        }
    }
}

impl fmt::Display for CaseConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseConversion::None => "none",
            CaseConversion::Camel => "camel",
            CaseConversion::Pascal => "pascal",
            CaseConversion::Param => "param",
        };
        f.write_str(name)
    }
}

impl<'de> Deserialize<'de> for CaseConversion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl CaseConversion {
    pub fn apply(self, name: &str) -> String {
        match self {
            CaseConversion::None => name.to_string(),
            CaseConversion::Camel => name.to_case(Case::Camel),
            CaseConversion::Pascal => name.to_case(Case::Pascal),
            CaseConversion::Param => name.to_case(Case::Kebab),
        }
    }
}

/// Wraps another strategy and re-cases its results per axis
#[derive(Debug, Clone)]
pub struct CasedNamingStrategy<S> {
    inner: S,
    pub entity_case: CaseConversion,
    pub column_case: CaseConversion,
    pub relation_case: CaseConversion,
}

impl<S: NamingStrategy> CasedNamingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            entity_case: CaseConversion::None,
            column_case: CaseConversion::None,
            relation_case: CaseConversion::None,
        }
    }

    pub fn with_entity_case(mut self, case: CaseConversion) -> Self {
        self.entity_case = case;
        self
    }

    pub fn with_column_case(mut self, case: CaseConversion) -> Self {
        self.column_case = case;
        self
    }

    pub fn with_relation_case(mut self, case: CaseConversion) -> Self {
        self.relation_case = case;
        self
    }
}

impl<S: NamingStrategy> NamingStrategy for CasedNamingStrategy<S> {
    fn entity_name(&self, name: &str) -> Result<String, NamingError> {
        Ok(self.entity_case.apply(&self.inner.entity_name(name)?))
    }

    fn column_name(&self, name: &str) -> Result<String, NamingError> {
        Ok(self.column_case.apply(&self.inner.column_name(name)?))
    }

    fn relation_name(
        &self,
        column_name: &str,
        relation: &Relation,
        entity: &Entity,
    ) -> Result<String, NamingError> {
        let derived = self.inner.relation_name(column_name, relation, entity)?;
        let cased = self.relation_case.apply(&derived);
        if cased == derived {
            return Ok(derived);
        }
        // re-casing can land on a name another column already uses
        Ok(resolve_collision(cased, column_name, entity))
    }
}
