//! Demonstration inputs (sequence and addend).

use addend_common::{DemoError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs shared by every demonstration.
///
/// Missing keys fall back to the defaults `[1, 2, 3, 4, 5]` and `10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sequence each demonstration starts from.
    pub values: Vec<i32>,

    /// Value added to every element.
    pub addend: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 3, 4, 5],
            addend: 10,
        }
    }
}

impl DemoConfig {
    pub fn new(values: Vec<i32>, addend: i32) -> Self {
        Self { values, addend }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
