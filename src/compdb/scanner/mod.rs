mod classifier;
mod file_collector;

use std::path::{Path, PathBuf};
use log::{debug, trace};

use crate::compdb::config::GeneratorConfig;
use crate::compdb::types::{GenerationStats, Style};

// Re-export from submodules
pub use classifier::classify;
pub use file_collector::FileCollector;

/// Source scanner responsible for finding and classifying source files
#[derive(Debug, Clone)]
pub struct SourceScanner {
    /// File collector for walking the tree
    file_collector: FileCollector,

    /// Directory marker that selects C style
    c_style_marker: String,
}

impl SourceScanner {
    /// Create a new source scanner from a generator configuration
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            file_collector: FileCollector::new(config.source_suffix.clone())
                .follow_links(config.follow_links),
            c_style_marker: config.c_style_marker.clone(),
        }
    }

    /// Walk `root` and return every matching file with its style
    pub fn scan(&self, root: impl AsRef<Path>, stats: &mut GenerationStats) -> Vec<(PathBuf, Style)> {
        let files = self.file_collector.collect_files(root, stats);

        let classified: Vec<_> = files.into_iter()
            .map(|file| {
                let style = classify(&file, &self.c_style_marker);
                trace!("{} -> {:?}", file.display(), style);
                stats.record(style);
                (file, style)
            })
            .collect();

        debug!(
            "Classified {} files ({} C, {} C++)",
            classified.len(), stats.c_entries, stats.cxx_entries
        );
        classified
    }
}
