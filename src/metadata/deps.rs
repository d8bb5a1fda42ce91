//! Dependency metadata (module-deps.json)

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One raw module-deps entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepsRecord {
    /// Names of the modules this module depends on
    #[serde(default)]
    pub deps: Vec<String>,
}

/// Dependency metadata set: module name -> declared dependency names
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DepsInfo {
    modules: HashMap<String, DepsRecord>,
}

impl DepsInfo {
    /// Load dependency metadata from the metadata directory
    pub fn load(dir: &Path) -> Result<Self> {
        super::read_json(dir, super::MODULE_DEPS_FILE)
    }

    /// Look up one module's declared dependencies
    pub fn get(&self, name: &str) -> Option<&DepsRecord> {
        self.modules.get(name)
    }

    #[cfg(test)]
    pub fn insert(&mut self, name: &str, record: DepsRecord) {
        self.modules.insert(name.to_string(), record);
    }
}
