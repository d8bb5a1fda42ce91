//! Common test utilities for modgraph integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Product output root used by the fixture metadata
pub const PRODUCT_OUT: &str = "/out/target/product/generic";

/// Host output root used by the fixture metadata
pub const HOST_OUT: &str = "/out/host/linux-x86";

/// A metadata directory for integration tests
#[allow(dead_code)]
pub struct TestMetadata {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the metadata directory
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestMetadata {
    /// Create a new empty metadata directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write product-info.json with the fixture output roots
    pub fn write_product_info(&self, packages: &[&str]) {
        let package_list: Vec<String> = packages.iter().map(|p| format!("\"{}\"", p)).collect();
        let content = format!(
            r#"{{
  "product_out": "{}",
  "host_out": "{}",
  "packages": [{}]
}}"#,
            PRODUCT_OUT,
            HOST_OUT,
            package_list.join(", ")
        );
        self.write_file("product-info.json", &content);
    }

    /// Write module-info.json from raw JSON content
    pub fn write_module_info(&self, content: &str) {
        self.write_file("module-info.json", content);
    }

    /// Write module-deps.json from raw JSON content
    pub fn write_module_deps(&self, content: &str) {
        self.write_file("module-deps.json", content);
    }

    /// Write a file in the metadata directory
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write metadata file");
    }

    /// Read a report written next to the metadata
    pub fn read_report(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read report file")
    }

    /// Check if a file exists in the metadata directory
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }

    /// An install path under the product output root
    pub fn target_path(tail: &str) -> String {
        format!("{}/{}", PRODUCT_OUT, tail)
    }

    /// An install path under the host output root
    pub fn host_path(tail: &str) -> String {
        format!("{}/{}", HOST_OUT, tail)
    }
}

impl Default for TestMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_file_operations() {
        let meta = TestMetadata::new();
        meta.write_product_info(&["app1"]);
        assert!(meta.file_exists("product-info.json"));
        assert!(meta.read_report("product-info.json").contains("\"app1\""));
    }

    #[test]
    fn test_fixture_paths() {
        assert_eq!(
            TestMetadata::target_path("system/app/app1.apk"),
            "/out/target/product/generic/system/app/app1.apk"
        );
        assert_eq!(
            TestMetadata::host_path("bin/tool1"),
            "/out/host/linux-x86/bin/tool1"
        );
    }
}
