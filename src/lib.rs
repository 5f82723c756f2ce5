pub mod compdb;
pub mod database;
pub mod utils;

// Re-export main types and functions for easier access
pub use compdb::types::{CompileEntry, FlagSet, GenerationReport, GenerationStats, Style};
pub use compdb::config::GeneratorConfig;
pub use compdb::scanner::{SourceScanner, classify};
pub use compdb::generator::CompileDbGenerator;

pub use database::{CompileDatabase, DatabaseStorage};

// Re-export utility functions
pub use utils::file_utils;
