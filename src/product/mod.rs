//! Product aggregation
//!
//! Walks the packaged module list, partitions it into per-kind buckets and
//! drives the resolver once per package for the kind bucket and once for the
//! all-inclusive union bucket. Buckets never see each other's state.

use std::collections::BTreeMap;

use crate::metadata::DepsInfo;
use crate::registry::ModuleRegistry;
use crate::resolver::{DepGraph, Resolver};

/// Core runtime libraries and platform frameworks; everything depends on
/// them, so edges to them carry no impact-analysis signal
pub const EXCLUDED_MODULES: [&str; 10] = [
    "libc",
    "libc++",
    "libm",
    "libdl",
    "libcutils",
    "framework",
    "ext",
    "okhttp",
    "core-oj",
    "core-libart",
];

/// Named partition of the packaged module set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Etc,
    Apk,
    Exe,
    Test,
    All,
}

impl Bucket {
    /// Report emission order
    pub const REPORT_ORDER: [Bucket; 5] = [
        Bucket::Apk,
        Bucket::Exe,
        Bucket::Etc,
        Bucket::Test,
        Bucket::All,
    ];

    /// Bucket for a module's primary class tag; `None` for tags without a
    /// dedicated bucket (such modules still join [`Bucket::All`])
    fn from_class_tag(tag: &str) -> Option<Bucket> {
        match tag {
            "ETC" => Some(Bucket::Etc),
            "APPS" => Some(Bucket::Apk),
            "EXECUTABLES" => Some(Bucket::Exe),
            "NATIVE_TESTS" => Some(Bucket::Test),
            _ => None,
        }
    }

    /// Short name used in report file names and the summary
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Etc => "etc",
            Bucket::Apk => "apk",
            Bucket::Exe => "exe",
            Bucket::Test => "test",
            Bucket::All => "all",
        }
    }
}

/// The five resolved bucket graphs of one product
#[derive(Debug)]
pub struct ProductGraphs {
    graphs: BTreeMap<Bucket, DepGraph>,
}

impl ProductGraphs {
    pub fn get(&self, bucket: Bucket) -> &DepGraph {
        &self.graphs[&bucket]
    }
}

/// Accumulates packaged modules into bucket graphs
pub struct GraphBuilder<'a> {
    registry: &'a ModuleRegistry,
    resolver: Resolver<'a>,
    graphs: BTreeMap<Bucket, DepGraph>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(registry: &'a ModuleRegistry, deps: &'a DepsInfo) -> Self {
        let graphs = Bucket::REPORT_ORDER
            .iter()
            .map(|bucket| (*bucket, DepGraph::new()))
            .collect();

        Self {
            registry,
            resolver: Resolver::new(deps, registry, &EXCLUDED_MODULES),
            graphs,
        }
    }

    /// Resolve one packaged module into its kind bucket and the union bucket.
    ///
    /// Unknown and excluded names are skipped; a known module that installs
    /// nothing is skipped with a warning so it appears in no graph.
    pub fn add_package(&mut self, name: &str) {
        let Some(module) = self.registry.get(name) else {
            return;
        };

        if EXCLUDED_MODULES.contains(&name) {
            return;
        }

        let Some(primary) = module.targets.first() else {
            eprintln!("Warning: packaged module {} installs nothing", name);
            return;
        };

        if let Some(bucket) = Bucket::from_class_tag(&primary.kind) {
            self.resolve_into_bucket(bucket, name);
        }
        self.resolve_into_bucket(Bucket::All, name);
    }

    fn resolve_into_bucket(&mut self, bucket: Bucket, name: &str) {
        if let Some(graph) = self.graphs.get_mut(&bucket) {
            self.resolver.resolve_into(name, graph);
        }
    }

    pub fn finish(self) -> ProductGraphs {
        ProductGraphs {
            graphs: self.graphs,
        }
    }
}
