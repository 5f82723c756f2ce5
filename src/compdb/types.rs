use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Language dialect a source file is compiled as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    /// C11, selected by the marker directory
    C,
    /// C++20, everything else
    Cxx,
}

/// Ordered list of compiler flags for one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(Vec<String>);

impl FlagSet {
    pub fn new<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(flags.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f == flag)
    }
}

/// One record of the compilation database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileEntry {
    /// Full command line: compiler, flags, `-o`, output, source
    pub arguments: Vec<String>,

    /// Absolute project root
    pub directory: String,

    /// Absolute path of the source file
    pub file: String,

    /// Absolute path of the produced artifact
    pub output: String,
}

/// Counters collected during one generation run
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Regular files seen by the walker
    pub files_visited: usize,

    /// Files whose name ends with the source suffix
    pub matched_files: usize,

    /// Entries built with the C flag set
    pub c_entries: usize,

    /// Entries built with the C++ flag set
    pub cxx_entries: usize,

    /// Files ignored because of their suffix
    pub skipped_files: usize,

    /// Walk errors that were logged and skipped
    pub walk_errors: usize,
}

impl GenerationStats {
    pub fn record(&mut self, style: Style) {
        self.matched_files += 1;
        match style {
            Style::C => self.c_entries += 1,
            Style::Cxx => self.cxx_entries += 1,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Where the database was written
    pub output_path: PathBuf,

    /// Number of entries written
    pub entry_count: usize,

    /// Counters collected while walking
    pub stats: GenerationStats,
}
