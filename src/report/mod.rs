//! Report emission
//!
//! Writes three files per bucket into the output directory:
//!
//! - `module-<bucket>.dot`: the graph for visualization
//! - `module-<bucket>.csv`: one row per (module, kind, source, install) tuple
//! - `depend-<bucket>.csv`: one row per direct edge

use std::path::Path;

use crate::error::{ModgraphError, Result};
use crate::metadata::ModuleInfo;
use crate::product::{Bucket, ProductGraphs};
use crate::registry::ModuleRegistry;

pub mod csv;
pub mod dot;

/// Write all five buckets' reports into `out_dir`
pub fn write_all(
    out_dir: &Path,
    graphs: &ProductGraphs,
    registry: &ModuleRegistry,
    info: &ModuleInfo,
) -> Result<()> {
    for bucket in Bucket::REPORT_ORDER {
        let graph = graphs.get(bucket);

        write_report(
            out_dir,
            &format!("module-{}.dot", bucket.as_str()),
            &dot::render(graph),
        )?;
        write_report(
            out_dir,
            &format!("module-{}.csv", bucket.as_str()),
            &csv::render_modules(graph, registry, info),
        )?;
        write_report(
            out_dir,
            &format!("depend-{}.csv", bucket.as_str()),
            &csv::render_edges(graph),
        )?;
    }

    Ok(())
}

fn write_report(out_dir: &Path, file_name: &str, content: &str) -> Result<()> {
    let path = out_dir.join(file_name);
    std::fs::write(&path, content).map_err(|e| ModgraphError::ReportWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
