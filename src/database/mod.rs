pub mod types;
pub mod storage;

// Re-export main types for easier access
pub use types::CompileDatabase;
pub use storage::DatabaseStorage;
