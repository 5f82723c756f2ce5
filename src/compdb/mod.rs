pub mod types;
pub mod config;
pub mod scanner;
pub mod builder;
pub mod generator;

// Re-export the main API for easier access
pub use types::{CompileEntry, FlagSet, GenerationReport, GenerationStats, Style};
pub use config::GeneratorConfig;
pub use scanner::{SourceScanner, classify};
pub use builder::EntryBuilder;
pub use generator::CompileDbGenerator;
