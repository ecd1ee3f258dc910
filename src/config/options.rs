//! Options controlling a generation run

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::error::ModelGenError;
use crate::naming::CaseConversion;

/// Options for one generation run.
///
/// Loaded from a JSON file; every field is optional there and falls back to
/// the value in `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Expose the raw foreign-key value next to each owning relation
    pub relation_ids: bool,
    /// Rendered entities get a constructor
    pub generate_constructor: bool,
    /// Rendered entities use the active-record style
    pub active_record: bool,
    pub entity_case: CaseConversion,
    pub property_case: CaseConversion,
    pub relation_case: CaseConversion,
    /// Casing of emitted file names
    pub file_case: CaseConversion,
    /// Registered naming strategy to use instead of the built-in selection
    pub naming_strategy: Option<String>,
    /// Directory rendered files are written to
    pub output_path: PathBuf,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            relation_ids: false,
            generate_constructor: false,
            active_record: false,
            entity_case: CaseConversion::None,
            property_case: CaseConversion::None,
            relation_case: CaseConversion::None,
            file_case: CaseConversion::None,
            naming_strategy: None,
            output_path: PathBuf::from("output"),
        }
    }
}

impl GenerationOptions {
    /// Load options from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ModelGenError::OptionsReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let options: GenerationOptions =
            serde_json::from_str(&content).map_err(|e| ModelGenError::OptionsParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        options.validate()?;
        Ok(options)
    }

    /// Reject case conversions that only make sense for file names
    pub fn validate(&self) -> Result<(), ModelGenError> {
        let axes = [
            ("entity_case", self.entity_case),
            ("property_case", self.property_case),
            ("relation_case", self.relation_case),
        ];
        for (option, case) in axes {
            if case == CaseConversion::Param {
                return Err(ModelGenError::InvalidOption {
                    option: option.to_string(),
                    message: "param case is only supported for file names".to_string(),
                });
            }
        }
        Ok(())
    }
}
