//! DOT graph rendering
//!
//! One `digraph` per bucket: a labeled node for every target-set member and
//! an edge for every pair whose mask carries the direct bit. Indirect-only
//! edges are bookkeeping, not drawn.

use std::fmt::Write;

use crate::resolver::DepGraph;

/// Render one bucket's graph as DOT
pub fn render(graph: &DepGraph) -> String {
    let mut out = String::new();

    // Infallible writer; the pushed format strings cannot fail
    let _ = writeln!(out, "digraph {{");
    let _ = writeln!(out, "graph [ ratio=.5 ];");

    for name in graph.targets() {
        let _ = writeln!(
            out,
            "\t\"{}\" [ label=\"{}\" colorscheme=\"svg\" fontcolor=\"darkblue\" href=\"{}\" ]",
            name, name, name
        );
    }

    for (source, target) in graph.direct_edges() {
        let _ = writeln!(out, "\t\"{}\" -> \"{}\"", source, target);
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{DepsInfo, DepsRecord, ModuleInfo, ModuleRecord};
    use crate::product::{Bucket, GraphBuilder};
    use crate::registry::ModuleRegistry;

    fn sample_graph() -> String {
        let mut info = ModuleInfo::default();
        info.insert(
            "app1",
            ModuleRecord {
                class: vec!["APPS".to_string()],
                installed: vec!["/p/system/app/app1.apk".to_string()],
                path: vec![],
            },
        );
        info.insert(
            "libfoo",
            ModuleRecord {
                class: vec!["SHARED_LIBRARIES".to_string()],
                installed: vec!["/p/system/lib/libfoo.so".to_string()],
                path: vec![],
            },
        );
        let roots = crate::classify::OutputRoots {
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

        let mut builder = GraphBuilder::new(&registry, &deps);
        builder.add_package("app1");
        let graphs = builder.finish();
        render(graphs.get(Bucket::Apk))
    }

    #[test]
    fn test_render_nodes_and_direct_edges() {
        let dot = sample_graph();
        assert!(dot.starts_with("digraph {\ngraph [ ratio=.5 ];\n"));
        assert!(dot.contains(
            "\t\"app1\" [ label=\"app1\" colorscheme=\"svg\" fontcolor=\"darkblue\" href=\"app1\" ]\n"
        ));
        assert!(dot.contains("\t\"libfoo\" ["));
        assert!(dot.contains("\t\"app1\" -> \"libfoo\"\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_render_empty_graph_is_well_formed() {
        let dot = render(&crate::resolver::DepGraph::new());
        assert_eq!(dot, "digraph {\ngraph [ ratio=.5 ];\n}\n");
    }
}
