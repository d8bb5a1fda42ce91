//! Build metadata loading
//!
//! The build system drops three JSON documents into one metadata directory:
//!
//! - `product-info.json`: output roots and the packaged module list
//! - `module-info.json`: module name -> class tags, installed artifacts, source path
//! - `module-deps.json`: module name -> declared dependency names
//!
//! This module deserializes them into typed records and nothing more; all
//! graph decisions live in the classifier, registry and resolver. Records
//! are best-effort: missing per-module fields default to empty lists, while
//! an unreadable or unparseable file aborts the run.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ModgraphError, Result};

pub mod deps;
pub mod modules;
pub mod product;

pub use deps::{DepsInfo, DepsRecord};
pub use modules::{ModuleInfo, ModuleRecord};
pub use product::ProductInfo;

/// Product metadata file name
pub const PRODUCT_INFO_FILE: &str = "product-info.json";

/// Module metadata file name
pub const MODULE_INFO_FILE: &str = "module-info.json";

/// Dependency metadata file name
pub const MODULE_DEPS_FILE: &str = "module-deps.json";

/// Read and deserialize one metadata file from the metadata directory
fn read_json<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    let path = dir.join(file_name);

    let content = std::fs::read_to_string(&path).map_err(|e| ModgraphError::MetadataRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| ModgraphError::MetadataParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
