//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - graph: Graph command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod graph;

pub use completions::CompletionsArgs;
pub use graph::GraphArgs;

/// Modgraph - packaged-module dependency graph generator
///
/// Derive the dependency graph of the modules packaged into a shipped product
/// from the build system's metadata files.
#[derive(Parser, Debug)]
#[command(
    name = "modgraph",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build-impact dependency graph generator for packaged product modules",
    long_about = "Modgraph reads the build system's product, module and dependency metadata and \
                  derives per-bucket dependency graphs (apps, executables, config artifacts, \
                  native tests) restricted to the modules actually packaged into the product, \
                  emitted as DOT graphs and CSV tables for impact analysis and visualization.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modgraph graph out/product/meta       \x1b[90m# Graph the metadata in a directory\x1b[0m\n   \
                  modgraph graph                        \x1b[90m# Use $MODGRAPH_METADATA_DIR\x1b[0m\n   \
                  modgraph graph meta --out-dir report  \x1b[90m# Write reports elsewhere\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive dependency graphs from build metadata
    Graph(GraphArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
