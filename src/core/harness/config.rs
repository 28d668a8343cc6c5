//! Configuration for a harness run
//!
//! Holds which component package to test, which of its implementations to
//! launch and which test cases to execute. Values can come from the builder
//! methods or from a JSON file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::errors::HarnessError;

/// Which implementations of the package are exercised
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationSelection {
    /// Every implementation the package declares, in declaration order
    #[default]
    All,
    /// Only the listed implementation ids, in the given order
    Only(Vec<String>),
}

/// Configuration for a harness run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HarnessConfig {
    /// Path to the software package descriptor
    pub spd_file: PathBuf,
    /// Directory a relative `spd_file` is resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub implementations: ImplementationSelection,
    /// Test case names to run; all cases when `None`
    #[serde(default)]
    pub cases: Option<Vec<String>>,
}

impl HarnessConfig {
    /// Create a configuration that runs every case against every implementation
    pub fn new(spd_file: impl Into<PathBuf>) -> Self {
        Self {
            spd_file: spd_file.into(),
            base_dir: None,
            implementations: ImplementationSelection::All,
            cases: None,
        }
    }

    /// Load a configuration from a JSON file
    ///
    /// A relative `spd_file` without an explicit `base_dir` is resolved
    /// against the directory holding the configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HarnessError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let mut config: HarnessConfig = serde_json::from_str(&content)
            .map_err(|e| HarnessError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        if config.base_dir.is_none() {
            config.base_dir = path.parent().map(Path::to_path_buf);
        }
        Ok(config)
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Restrict the run to one more implementation id
    pub fn with_implementation(mut self, id: &str) -> Self {
        let mut ids = match std::mem::take(&mut self.implementations) {
            ImplementationSelection::Only(ids) => ids,
            ImplementationSelection::All => Vec::new(),
        };
        ids.push(id.to_string());
        self.implementations = ImplementationSelection::Only(ids);
        self
    }

    /// Restrict the run to one more test case
    pub fn with_case(mut self, name: &str) -> Self {
        self.cases.get_or_insert_with(Vec::new).push(name.to_string());
        self
    }

    /// Path of the SPD file after applying `base_dir`
    pub fn resolved_spd_path(&self) -> PathBuf {
        match &self.base_dir {
            Some(base) if self.spd_file.is_relative() => base.join(&self.spd_file),
            _ => self.spd_file.clone(),
        }
    }
}
