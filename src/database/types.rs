use serde::{Serialize, Deserialize};

use crate::compdb::types::CompileEntry;

/// Compilation database: the ordered entries of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompileDatabase {
    pub entries: Vec<CompileEntry>,
}

impl CompileDatabase {
    pub fn new(entries: Vec<CompileEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for an absolute source path, if any
    pub fn find_by_file(&self, file: &str) -> Option<&CompileEntry> {
        self.entries.iter().find(|entry| entry.file == file)
    }
}
