//! Error types and handling for modgraph
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Per-module anomalies in the metadata (missing names, path-less modules)
//! are not errors: they are warnings on stderr and the affected module simply
//! contributes nothing to the graph. Only an unresolvable metadata location,
//! unreadable/unparseable metadata files, an ambiguous class/path pairing and
//! report write failures abort the run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for modgraph operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModgraphError {
    // Configuration errors
    #[error("No metadata directory given")]
    #[diagnostic(
        code(modgraph::config::metadata_dir_unset),
        help("Pass the metadata directory as an argument or set MODGRAPH_METADATA_DIR")
    )]
    MetadataDirUnset,

    // Metadata errors
    #[error("Failed to read metadata file: {path}")]
    #[diagnostic(code(modgraph::metadata::read_failed))]
    MetadataRead { path: String, reason: String },

    #[error("Failed to parse metadata file: {path}")]
    #[diagnostic(code(modgraph::metadata::parse_failed))]
    MetadataParse { path: String, reason: String },

    // Classification errors
    #[error("Module '{name}' has {classes} class tags for {paths} install paths")]
    #[diagnostic(
        code(modgraph::classify::ambiguous_targets),
        help(
            "Class tags and install paths can only be paired when there is exactly one tag or the counts match. Regenerate module-info.json."
        )
    )]
    AmbiguousTargets {
        name: String,
        classes: usize,
        paths: usize,
    },

    // Report errors
    #[error("Failed to write report file: {path}")]
    #[diagnostic(code(modgraph::report::write_failed))]
    ReportWrite { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modgraph::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ModgraphError {
    fn from(err: std::io::Error) -> Self {
        ModgraphError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModgraphError {
    fn from(err: serde_json::Error) -> Self {
        ModgraphError::MetadataParse {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModgraphError>;
