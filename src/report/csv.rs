//! CSV table rendering
//!
//! Two tables per bucket: one module row per classified target of each
//! target-set member, and one edge row per direct edge.

use std::fmt::Write;

use crate::metadata::ModuleInfo;
use crate::registry::ModuleRegistry;
use crate::resolver::DepGraph;

/// Render the module table: name, artifact kind, source path, install path
pub fn render_modules(graph: &DepGraph, registry: &ModuleRegistry, info: &ModuleInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "name,type,source-path,install-path");

    for name in graph.targets() {
        let Some(module) = registry.get(name) else {
            continue;
        };
        let source_path = info.get(name).map_or("", |record| record.source_path());

        for target in &module.targets {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                name, target.kind, source_path, target.install_path
            );
        }
    }

    out
}

/// Render the edge table: one row per direct edge
pub fn render_edges(graph: &DepGraph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "base,dependant");

    for (source, target) in graph.direct_edges() {
        let _ = writeln!(out, "{},{}", source, target);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::OutputRoots;
    use crate::metadata::{DepsInfo, DepsRecord, ModuleRecord};
    use crate::product::{Bucket, GraphBuilder};

    fn fixture() -> (ModuleInfo, ModuleRegistry, DepsInfo) {
        let mut info = ModuleInfo::default();
        info.insert(
            "app1",
            ModuleRecord {
                class: vec!["APPS".to_string()],
                installed: vec!["/p/system/app/app1.apk".to_string()],
                path: vec!["packages/apps/App1".to_string()],
            },
        );
        info.insert(
            "libfoo",
            ModuleRecord {
                class: vec!["SHARED_LIBRARIES".to_string()],
                installed: vec![
                    "/p/system/lib/libfoo.so".to_string(),
                    "/p/system/lib64/libfoo.so".to_string(),
                ],
                path: vec!["external/foo".to_string()],
            },
        );

        let roots = OutputRoots {
            product_out: "/p/",
            host_out: "/h/",
        };
        let registry = ModuleRegistry::build(&info, &roots).unwrap();

        let mut deps = DepsInfo::default();
        deps.insert(
            "app1",
            DepsRecord {
                deps: vec!["libfoo".to_string()],
            },
        );

        (info, registry, deps)
    }

    #[test]
    fn test_module_table_has_one_row_per_target() {
        let (info, registry, deps) = fixture();
        let mut builder = GraphBuilder::new(&registry, &deps);
        builder.add_package("app1");
        let graphs = builder.finish();

        let csv = render_modules(graphs.get(Bucket::Apk), &registry, &info);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "name,type,source-path,install-path");
        assert_eq!(lines[1], "app1,APPS,packages/apps/App1,system/app/app1.apk");
        // Multi-path modules get one row per installed artifact
        assert_eq!(
            lines[2],
            "libfoo,SHARED_LIBRARIES,external/foo,system/lib/libfoo.so"
        );
        assert_eq!(
            lines[3],
            "libfoo,SHARED_LIBRARIES,external/foo,system/lib64/libfoo.so"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_edge_table_lists_direct_edges() {
        let (_, registry, deps) = fixture();
        let mut builder = GraphBuilder::new(&registry, &deps);
        builder.add_package("app1");
        let graphs = builder.finish();

        let csv = render_edges(graphs.get(Bucket::Apk));
        assert_eq!(csv, "base,dependant\napp1,libfoo\n");
    }

    #[test]
    fn test_empty_graph_renders_headers_only() {
        let graph = crate::resolver::DepGraph::new();
        let (info, registry, _) = fixture();
        assert_eq!(
            render_modules(&graph, &registry, &info),
            "name,type,source-path,install-path\n"
        );
        assert_eq!(render_edges(&graph), "base,dependant\n");
    }
}
