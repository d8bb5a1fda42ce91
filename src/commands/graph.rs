//! Graph command implementation
//!
//! Loads the three metadata sets, classifies every module, resolves each
//! packaged module into its bucket graphs and writes the DOT/CSV reports.

use console::Style;

use std::path::{Path, PathBuf};

use crate::classify::OutputRoots;
use crate::cli::GraphArgs;
use crate::error::{ModgraphError, Result};
use crate::metadata::{DepsInfo, ModuleInfo, ProductInfo};
use crate::product::{Bucket, GraphBuilder, ProductGraphs};
use crate::progress::ProgressDisplay;
use crate::registry::ModuleRegistry;
use crate::report;

/// Run graph command
pub fn run(args: GraphArgs) -> Result<()> {
    let dir = metadata_dir(args.dir)?;
    eprintln!("Parsing directory \"{}\"", dir.display());

    let product = ProductInfo::load(&dir)?;
    let modules = ModuleInfo::load(&dir)?;
    let deps = DepsInfo::load(&dir)?;

    let roots = OutputRoots::from_product(&product);
    let registry = ModuleRegistry::build(&modules, &roots)?;

    let graphs = build_graphs(&registry, &deps, &product.packages, args.quiet);

    let out_dir = args.out_dir.unwrap_or(dir);
    report::write_all(&out_dir, &graphs, &registry, &modules)?;

    print_summary(&out_dir, &graphs);

    Ok(())
}

/// Metadata directory from the CLI argument or the environment fallback.
///
/// Clap fills `dir` from MODGRAPH_METADATA_DIR when no argument is given; an
/// empty value is as fatal as an absent one.
fn metadata_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(ModgraphError::MetadataDirUnset),
    }
}

/// Resolve every packaged module under a progress bar
fn build_graphs(
    registry: &ModuleRegistry,
    deps: &DepsInfo,
    packages: &[String],
    quiet: bool,
) -> ProductGraphs {
    let mut builder = GraphBuilder::new(registry, deps);

    let progress = ProgressDisplay::new(packages.len() as u64, quiet);
    for name in packages {
        progress.update_module(name);
        builder.add_package(name);
        progress.inc_module();
    }
    progress.finish();

    builder.finish()
}

/// Per-bucket module and edge counts after the reports are written
fn print_summary(out_dir: &Path, graphs: &ProductGraphs) {
    println!(
        "Reports written to {}",
        Style::new().bold().apply_to(out_dir.display())
    );
    println!();

    for bucket in Bucket::REPORT_ORDER {
        let graph = graphs.get(bucket);
        println!(
            "  {}  {} modules, {} direct edges",
            Style::new().bold().yellow().apply_to(format!("{:<4}", bucket.as_str())),
            graph.target_count(),
            graph.direct_edge_count()
        );
    }
}
