use std::path::{Path, PathBuf};
use anyhow::Result;
use log::{info, debug, warn};

use crate::compdb::builder::EntryBuilder;
use crate::compdb::config::GeneratorConfig;
use crate::compdb::scanner::SourceScanner;
use crate::compdb::types::{GenerationReport, GenerationStats};
use crate::database::{CompileDatabase, DatabaseStorage};
use crate::utils::file_utils;

/// Generator that walks a project and writes its compilation database
#[derive(Debug)]
pub struct CompileDbGenerator {
    /// Absolute project root
    root: PathBuf,

    /// Configuration the generator was created with
    config: GeneratorConfig,

    /// Scanner for finding and classifying sources
    scanner: SourceScanner,

    /// Builder for compilation entries
    builder: EntryBuilder,
}

impl CompileDbGenerator {
    /// Create a generator; the root must be an existing directory.
    ///
    /// Without a configured root the directory holding the executable is used.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let root = match &config.root {
            Some(root) => file_utils::existing_dir(root)?,
            None => file_utils::existing_dir(file_utils::executable_dir()?)?,
        };
        debug!("Project root: {}", root.display());

        Ok(Self {
            scanner: SourceScanner::new(&config),
            builder: EntryBuilder::new(&root, &config),
            root,
            config,
        })
    }

    /// Create a generator with default settings rooted at `root`
    pub fn with_defaults(root: impl AsRef<Path>) -> Result<Self> {
        Self::new(GeneratorConfig::with_root(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the database is written to
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.output_file_name)
    }

    /// Walk the tree and build the database without writing it
    pub fn collect(&self) -> (CompileDatabase, GenerationStats) {
        let mut stats = GenerationStats::default();
        let sources = self.scanner.scan(&self.root, &mut stats);

        let entries = sources.iter()
            .map(|(source, style)| self.builder.build(source, *style))
            .collect();

        if stats.walk_errors > 0 {
            warn!("{} entries could not be read while walking {}", stats.walk_errors, self.root.display());
        }

        (CompileDatabase::new(entries), stats)
    }

    /// Run the full pipeline and write the database
    pub fn generate(&self) -> Result<GenerationReport> {
        info!("Generating compilation database for {}", self.root.display());

        let (db, stats) = self.collect();
        if db.is_empty() {
            info!("No {} files found under {}", self.config.source_suffix, self.root.display());
        }
        let output_path = self.output_path();
        DatabaseStorage::new(&output_path).save(&db)?;

        info!("Generation complete:");
        info!("- Files visited: {}", stats.files_visited);
        info!("- C entries: {}", stats.c_entries);
        info!("- C++ entries: {}", stats.cxx_entries);
        info!("- Skipped files: {}", stats.skipped_files);

        Ok(GenerationReport {
            output_path,
            entry_count: db.len(),
            stats,
        })
    }
}
