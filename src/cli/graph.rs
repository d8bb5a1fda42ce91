use clap::Parser;
use std::path::PathBuf;

/// Arguments for the graph command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Graph the metadata in a directory:\n    modgraph graph out/product/meta\n\n\
                  Use the environment fallback:\n    MODGRAPH_METADATA_DIR=out/product/meta modgraph graph\n\n\
                  Write reports into a separate directory:\n    modgraph graph out/product/meta --out-dir report")]
pub struct GraphArgs {
    /// Metadata directory holding product-info.json, module-info.json and
    /// module-deps.json
    #[arg(env = "MODGRAPH_METADATA_DIR")]
    pub dir: Option<PathBuf>,

    /// Directory to write reports into (defaults to the metadata directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
