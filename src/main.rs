//! Modgraph - packaged-module dependency graph generator
//!
//! Reads the build system's product, module and dependency metadata and
//! derives per-bucket dependency graphs restricted to the modules actually
//! packaged into the shipped product, rendered as DOT graphs and CSV tables.

use clap::Parser;

mod classify;
mod cli;
mod commands;
mod error;
mod metadata;
mod product;
mod progress;
mod registry;
mod report;
mod resolver;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Graph(args) => commands::graph::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
