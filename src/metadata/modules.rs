//! Module metadata (module-info.json)

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One raw module-info entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleRecord {
    /// Artifact class tags (e.g. APPS, EXECUTABLES, SHARED_LIBRARIES)
    #[serde(default)]
    pub class: Vec<String>,

    /// Installed artifact paths under the output roots
    #[serde(default)]
    pub installed: Vec<String>,

    /// Source directories; the first element is the module's source path
    #[serde(default)]
    pub path: Vec<String>,
}

impl ModuleRecord {
    /// Source path for tabular reports (empty when the build emitted none)
    pub fn source_path(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }
}

/// Module metadata set: module name -> raw record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ModuleInfo {
    modules: HashMap<String, ModuleRecord>,
}

impl ModuleInfo {
    /// Load module metadata from the metadata directory
    pub fn load(dir: &Path) -> Result<Self> {
        super::read_json(dir, super::MODULE_INFO_FILE)
    }

    /// Look up one module's raw record
    pub fn get(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.get(name)
    }

    /// Iterate all raw records
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleRecord)> {
        self.modules.iter()
    }

    /// Number of modules in the set
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the set holds no modules
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[cfg(test)]
    pub fn insert(&mut self, name: &str, record: ModuleRecord) {
        self.modules.insert(name.to_string(), record);
    }
}
