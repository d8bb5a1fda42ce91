//! Product metadata (product-info.json)

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Product metadata: the two output roots and the packaged module list
///
/// `product_out` and `host_out` are used as plain string prefixes when
/// classifying install paths, so both are normalized to end in `/` on load.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInfo {
    /// Product output root; stripped from install paths before reporting
    pub product_out: String,

    /// Host output root; install paths under it are host artifacts
    pub host_out: String,

    /// Names of the modules packaged into the shipped product, in build order
    #[serde(default)]
    pub packages: Vec<String>,
}

impl ProductInfo {
    /// Load product metadata from the metadata directory
    pub fn load(dir: &Path) -> Result<Self> {
        let mut info: Self = super::read_json(dir, super::PRODUCT_INFO_FILE)?;
        info.product_out = ensure_trailing_slash(info.product_out);
        info.host_out = ensure_trailing_slash(info.host_out);
        Ok(info)
    }
}

fn ensure_trailing_slash(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}
