use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::compdb::types::GenerationStats;
use crate::utils::file_utils;

/// File collector for finding source files under a root
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// File name suffix to collect
    suffix: String,

    /// Follow symbolic links while walking
    follow_links: bool,
}

impl FileCollector {
    /// Create a collector for the given suffix
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            follow_links: false,
        }
    }

    /// Enable or disable following symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Collect all matching files below `root` in walk order.
    ///
    /// Directory entries are sorted by name so the result is stable between
    /// runs. Walk errors are logged, counted in `stats` and skipped.
    pub fn collect_files(&self, root: impl AsRef<Path>, stats: &mut GenerationStats) -> Vec<PathBuf> {
        let root = root.as_ref();
        debug!("Collecting {} files from directory: {}", self.suffix, root.display());

        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    warn!("Skipping unreadable entry {}: {}", path, e);
                    stats.walk_errors += 1;
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            if entry.path_is_symlink() && fs::metadata(entry.path()).is_err() {
                warn!("Dangling symbolic link: {}", entry.path().display());
            }

            stats.files_visited += 1;
            if file_utils::has_suffix(entry.path(), &self.suffix) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.into_path());
            } else {
                stats.skipped_files += 1;
            }
        }

        debug!("Collected {} files for processing", files.len());
        files
    }
}

// Unfollowed links count as files unless they point at a directory,
// dangling ones included, like a plain directory listing.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}
