//! Dependency resolution
//!
//! Computes the edges reachable from one packaged root module: a direct edge
//! to every declared dependency that is known, installed and not excluded,
//! plus an indirect edge to everything exactly one hop behind each direct
//! dependency. Indirection is bounded at one hop; the reports surface
//! "depends via one intermediate" rather than full reachability.
//!
//! Every lookup miss is a stderr warning and contributes nothing; a partial
//! metadata set still resolves everything it can.

use std::collections::{BTreeMap, BTreeSet};

use crate::metadata::DepsInfo;
use crate::registry::ModuleRegistry;

/// Direct/indirect bitmask for one (source, target) pair.
///
/// Accumulation is monotonic: merging only ever sets bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeMask(u8);

impl EdgeMask {
    /// The source lists the target directly
    pub const DIRECT: EdgeMask = EdgeMask(1);

    /// The target sits one hop behind one of the source's direct dependencies
    pub const INDIRECT: EdgeMask = EdgeMask(2);

    pub fn merge(&mut self, other: EdgeMask) {
        self.0 |= other.0;
    }

    pub fn is_direct(&self) -> bool {
        self.0 & Self::DIRECT.0 != 0
    }

    pub fn is_indirect(&self) -> bool {
        self.0 & Self::INDIRECT.0 != 0
    }
}

/// One bucket's resolved graph: the member set plus the edge bitmask map.
///
/// Both collections iterate in sorted order so every report derived from
/// them is byte-stable across runs.
#[derive(Debug, Default)]
pub struct DepGraph {
    targets: BTreeSet<String>,
    edges: BTreeMap<(String, String), EdgeMask>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn mark_present(&mut self, name: &str) {
        self.targets.insert(name.to_string());
    }

    fn merge_edge(&mut self, source: &str, target: &str, mask: EdgeMask) {
        self.edges
            .entry((source.to_string(), target.to_string()))
            .or_default()
            .merge(mask);
    }

    /// Member module names, sorted
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains(name)
    }

    /// All recorded edges with their accumulated masks, sorted by pair
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeMask)> {
        self.edges
            .iter()
            .map(|((source, target), mask)| (source.as_str(), target.as_str(), *mask))
    }

    /// Edges carrying the direct bit; the only ones drawn or tabulated
    pub fn direct_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges()
            .filter(|(_, _, mask)| mask.is_direct())
            .map(|(source, target, _)| (source, target))
    }

    pub fn edge_mask(&self, source: &str, target: &str) -> Option<EdgeMask> {
        self.edges
            .get(&(source.to_string(), target.to_string()))
            .copied()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn direct_edge_count(&self) -> usize {
        self.direct_edges().count()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Resolves packaged roots against the declared dependency lists
pub struct Resolver<'a> {
    deps: &'a DepsInfo,
    registry: &'a ModuleRegistry,
    excluded: &'a [&'a str],
}

impl<'a> Resolver<'a> {
    pub fn new(deps: &'a DepsInfo, registry: &'a ModuleRegistry, excluded: &'a [&'a str]) -> Self {
        Self {
            deps,
            registry,
            excluded,
        }
    }

    /// Resolve one root's direct and one-hop indirect edges into `graph`.
    ///
    /// A root missing from the dependency metadata only warns; the graph is
    /// left untouched.
    pub fn resolve_into(&self, root: &str, graph: &mut DepGraph) {
        let Some(record) = self.deps.get(root) else {
            eprintln!("Module {} is not found", root);
            return;
        };

        graph.mark_present(root);

        for dependant in &record.deps {
            if !self.is_linkable(dependant) {
                continue;
            }

            graph.mark_present(dependant);
            graph.merge_edge(root, dependant, EdgeMask::DIRECT);
            self.add_indirect(root, dependant, graph);
        }
    }

    /// A dependency endpoint counts only when it is known, installed and not
    /// excluded
    fn is_linkable(&self, name: &str) -> bool {
        self.registry.is_installed(name) && !self.excluded.contains(&name)
    }

    fn add_indirect(&self, root: &str, via: &str, graph: &mut DepGraph) {
        let Some(record) = self.deps.get(via) else {
            eprintln!("Module {} is not found", via);
            return;
        };

        for indirect in &record.deps {
            if self.is_linkable(indirect) {
                graph.merge_edge(root, indirect, EdgeMask::INDIRECT);
            }
        }
    }
}
