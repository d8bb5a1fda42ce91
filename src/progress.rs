//! Progress bar display for graph resolution

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over packaged-module resolution
pub struct ProgressDisplay {
    /// Bar over the packaged module list; absent in quiet mode
    module_pb: Option<ProgressBar>,
}

impl ProgressDisplay {
    /// Create a new progress display with total packaged-module count
    pub fn new(total_modules: u64, quiet: bool) -> Self {
        if quiet {
            return Self { module_pb: None };
        }

        let module_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let module_pb = ProgressBar::new(total_modules);
        module_pb.set_style(module_style);

        Self {
            module_pb: Some(module_pb),
        }
    }

    /// Update to show the module currently being resolved
    pub fn update_module(&self, module_name: &str) {
        if let Some(ref module_pb) = self.module_pb {
            module_pb.set_message(module_name.to_string());
        }
    }

    /// Increment module progress
    pub fn inc_module(&self) {
        if let Some(ref module_pb) = self.module_pb {
            module_pb.inc(1);
        }
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        if let Some(ref module_pb) = self.module_pb {
            module_pb.finish_and_clear();
        }
    }
}
