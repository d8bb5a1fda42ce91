//! Module registry
//!
//! One classification pass over the raw module metadata produces one
//! immutable [`Module`] per unique name. Ids come from a sequence owned by
//! the registry instance and restart at zero for every build; entries are
//! registered in sorted name order so ids are stable across runs.

use std::collections::HashMap;

use crate::classify::{self, OutputRoots, Target};
use crate::error::Result;
use crate::metadata::ModuleInfo;

/// A named build unit with its classified artifacts
#[derive(Debug, Clone)]
pub struct Module {
    /// Registry-local id, assigned in discovery order
    pub id: u32,

    /// Unique module name
    pub name: String,

    /// Classified artifacts; empty for modules that install nothing
    pub targets: Vec<Target>,
}

impl Module {
    /// Whether the module installs at least one artifact
    pub fn is_installed(&self) -> bool {
        !self.targets.is_empty()
    }
}

/// Name-keyed set of all known modules
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Module>,
}

impl ModuleRegistry {
    /// Classify every raw module-info entry into a registry.
    ///
    /// Fails on the first module whose class tags cannot be unambiguously
    /// paired with its install paths.
    pub fn build(info: &ModuleInfo, roots: &OutputRoots) -> Result<Self> {
        let mut entries: Vec<_> = info.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut modules = HashMap::with_capacity(entries.len());
        let mut next_id = 0u32;

        for (name, record) in entries {
            let targets = classify::classify(name, &record.class, &record.installed, roots)?;
            modules.insert(
                name.clone(),
                Module {
                    id: next_id,
                    name: name.clone(),
                    targets,
                },
            );
            next_id += 1;
        }

        Ok(Self { modules })
    }

    /// Look up a module by name
    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Whether the name is known at all
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Whether the name is known and installs at least one artifact
    pub fn is_installed(&self, name: &str) -> bool {
        self.get(name).is_some_and(Module::is_installed)
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry holds no modules
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
