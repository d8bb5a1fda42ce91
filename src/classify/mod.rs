//! Target classification
//!
//! Turns one raw module-info record into typed [`Target`]s: one per installed
//! artifact, tagged with an inferred architecture and the artifact's class
//! tag. Static libraries are never installed into the product image and are
//! dropped before pairing.
//!
//! Bitness inference is intentionally asymmetric between the two pairing
//! modes (see [`BitnessRule`]): single-kind modules take it from the module
//! name, multi-kind modules take it from artifact placement.

use crate::error::{ModgraphError, Result};
use crate::metadata::ProductInfo;

/// Class tag for static libraries; they produce no installed artifact
const STATIC_LIBRARIES: &str = "STATIC_LIBRARIES";

/// Module name suffix marking a 32-bit build variant
const SUFFIX_32BIT: &str = "_32";

/// Where an artifact runs and at what word size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Host32,
    Host64,
    Target32,
    Target64,
}

impl Arch {
    fn new(is_host: bool, is_32bit: bool) -> Self {
        match (is_host, is_32bit) {
            (true, true) => Arch::Host32,
            (true, false) => Arch::Host64,
            (false, true) => Arch::Target32,
            (false, false) => Arch::Target64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Host32 => "host32",
            Arch::Host64 => "host64",
            Arch::Target32 => "target32",
            Arch::Target64 => "target64",
        }
    }
}

/// One producible artifact of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Inferred placement; not present in the source metadata
    pub arch: Arch,

    /// Artifact class tag (APPS, EXECUTABLES, ETC, ...)
    pub kind: String,

    /// Install path with the product output root stripped
    pub install_path: String,
}

/// The two output roots install paths are matched against, as `/`-terminated
/// string prefixes
#[derive(Debug, Clone, Copy)]
pub struct OutputRoots<'a> {
    /// Product output root; stripped from install paths
    pub product_out: &'a str,

    /// Host output root; paths under it are host artifacts
    pub host_out: &'a str,
}

impl<'a> OutputRoots<'a> {
    pub fn from_product(product: &'a ProductInfo) -> Self {
        Self {
            product_out: &product.product_out,
            host_out: &product.host_out,
        }
    }

    fn is_host_path(&self, path: &str) -> bool {
        path.starts_with(self.host_out)
    }

    fn strip_product_out<'p>(&self, path: &'p str) -> &'p str {
        path.strip_prefix(self.product_out).unwrap_or(path)
    }
}

/// How a target's bitness is decided.
///
/// Single-kind modules publish a 32-bit variant under a `_32` name suffix, so
/// the module name decides for every path. Multi-kind modules have no single
/// name-level signal; there the host/target placement of each individual path
/// decides (host paths classify as 32-bit). The two modes genuinely disagree
/// for the same path and both behaviors are load-bearing.
#[derive(Debug, Clone, Copy)]
enum BitnessRule<'a> {
    /// Module name carries the `_32` suffix marker
    ModuleSuffix(&'a str),

    /// Each path's host placement decides
    InstallPath,
}

impl BitnessRule<'_> {
    fn is_32bit(&self, path_is_host: bool) -> bool {
        match self {
            BitnessRule::ModuleSuffix(name) => name.ends_with(SUFFIX_32BIT),
            BitnessRule::InstallPath => path_is_host,
        }
    }
}

/// Classify one module's raw class tags and install paths into Targets.
///
/// Returns an empty list (after a warning) when the module installs nothing.
/// Returns [`ModgraphError::AmbiguousTargets`] when several class tags remain
/// but their count does not match the path count; the caller treats that as
/// fatal.
pub fn classify(
    name: &str,
    classes: &[String],
    installed: &[String],
    roots: &OutputRoots,
) -> Result<Vec<Target>> {
    let kinds: Vec<&String> = classes
        .iter()
        .filter(|c| c.as_str() != STATIC_LIBRARIES)
        .collect();
    let paths: Vec<&str> = installed
        .iter()
        .map(|p| roots.strip_product_out(p))
        .collect();

    if paths.is_empty() {
        eprintln!("Warning: {} has no target path", name);
        return Ok(Vec::new());
    }

    let mut dump_module = false;
    if kinds.len() > 1 {
        eprintln!("Warning: types > 1:");
        dump_module = true;
    }
    if paths.len() != kinds.len() {
        eprintln!("Warning: paths != types:");
        dump_module = true;
    }
    if dump_module {
        eprintln!("\tname : {}\n\ttypes : {:?}\n\tpaths : {:?}", name, kinds, paths);
    }

    if kinds.len() == 1 {
        let rule = BitnessRule::ModuleSuffix(name);
        Ok(paths
            .iter()
            .map(|path| make_target(kinds[0], path, rule, roots))
            .collect())
    } else if kinds.len() == paths.len() {
        // Positional pairing: tag i describes path i
        Ok(kinds
            .iter()
            .zip(&paths)
            .map(|(kind, path)| make_target(kind, path, BitnessRule::InstallPath, roots))
            .collect())
    } else {
        Err(ModgraphError::AmbiguousTargets {
            name: name.to_string(),
            classes: kinds.len(),
            paths: paths.len(),
        })
    }
}

fn make_target(kind: &str, path: &str, rule: BitnessRule, roots: &OutputRoots) -> Target {
    let is_host = roots.is_host_path(path);
    Target {
        arch: Arch::new(is_host, rule.is_32bit(is_host)),
        kind: kind.to_string(),
        install_path: path.to_string(),
    }
}
