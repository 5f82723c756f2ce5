use std::path::{Path, PathBuf};
use log::trace;

use crate::compdb::config::GeneratorConfig;
use crate::compdb::types::{CompileEntry, FlagSet, Style};
use crate::utils::file_utils::path_string;

/// Builds compilation entries for classified source files
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    /// Absolute project root written to every entry
    root: PathBuf,

    /// Compiler path at the head of every argument list
    compiler: String,

    c_flags: FlagSet,
    cxx_flags: FlagSet,
}

impl EntryBuilder {
    /// Create a builder for `root` using the compiler and flags of `config`
    pub fn new(root: impl AsRef<Path>, config: &GeneratorConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            compiler: config.compiler.clone(),
            c_flags: config.c_flags.clone(),
            cxx_flags: config.cxx_flags.clone(),
        }
    }

    fn flags(&self, style: Style) -> &FlagSet {
        match style {
            Style::C => &self.c_flags,
            Style::Cxx => &self.cxx_flags,
        }
    }

    /// Build the entry for one absolute source path
    pub fn build(&self, source: &Path, style: Style) -> CompileEntry {
        let output = output_path(source);
        let file = path_string(source);
        let output = path_string(&output);

        let flags = self.flags(style).as_slice();
        let mut arguments = Vec::with_capacity(flags.len() + 4);
        arguments.push(self.compiler.clone());
        arguments.extend(flags.iter().cloned());
        arguments.push("-o".to_string());
        arguments.push(output.clone());
        arguments.push(file.clone());

        trace!("Built entry for {}", file);

        CompileEntry {
            arguments,
            directory: path_string(&self.root),
            file,
            output,
        }
    }
}

/// Source path with its final extension removed, in the same directory
pub fn output_path(source: &Path) -> PathBuf {
    match (source.parent(), source.file_stem()) {
        (Some(dir), Some(stem)) => dir.join(stem),
        _ => source.to_path_buf(),
    }
}
