use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, Context, anyhow};
use log::debug;
use serde::{Serialize, Deserialize};

use super::types::FlagSet;

pub const DEFAULT_COMPILER: &str = "/usr/bin/g++";
pub const DEFAULT_C_STYLE_MARKER: &str = "c_style";
pub const DEFAULT_SOURCE_SUFFIX: &str = ".cpp";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "compile_commands.json";

pub const DEFAULT_C_FLAGS: &[&str] = &["-c", "-g", "-std=c11", "-pthread", "-I/usr/include"];

pub const DEFAULT_CXX_FLAGS: &[&str] = &[
    "-c",
    "-g",
    "-std=c++20",
    "-pthread",
    "-I/usr/include/c++/11",
    "-I/usr/include/x86_64-linux-gnu/c++/11",
    "-I/usr/include",
];

/// Everything a generation run depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Project root; `None` means the directory holding the executable
    pub root: Option<PathBuf>,

    /// Compiler placed first in every argument list
    pub compiler: String,

    /// Flags for files under the marker directory
    pub c_flags: FlagSet,

    /// Flags for every other matched file
    pub cxx_flags: FlagSet,

    /// Substring of the directory path that selects C flags
    pub c_style_marker: String,

    /// File name suffix of source files
    pub source_suffix: String,

    /// Name of the database file, relative to the root
    pub output_file_name: PathBuf,

    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: None,
            compiler: DEFAULT_COMPILER.to_string(),
            c_flags: FlagSet::new(DEFAULT_C_FLAGS.iter().copied()),
            cxx_flags: FlagSet::new(DEFAULT_CXX_FLAGS.iter().copied()),
            c_style_marker: DEFAULT_C_STYLE_MARKER.to_string(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            output_file_name: PathBuf::from(DEFAULT_OUTPUT_FILE_NAME),
            follow_links: false,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration rooted at `root`
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// Load a configuration file; the format follows the extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let extension = path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            _ => Err(anyhow!(
                "Unsupported config format for {} (expected .toml, .yaml or .yml)",
                path.display()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_project_policy() {
        let config = GeneratorConfig::default();
        assert_eq!(config.compiler, "/usr/bin/g++");
        assert!(config.c_flags.contains("-std=c11"));
        assert!(config.cxx_flags.contains("-std=c++20"));
        assert_eq!(config.cxx_flags.as_slice().len(), 7);
        assert_eq!(config.c_style_marker, "c_style");
        assert_eq!(config.source_suffix, ".cpp");
        assert_eq!(config.output_file_name, PathBuf::from("compile_commands.json"));
        assert!(!config.follow_links);
        assert_eq!(config.root, None);
    }

    #[test]
    fn toml_overrides_only_given_keys() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("compdb.toml");
        fs::write(&path, r#"
compiler = "/usr/bin/clang++"
c_flags = ["-c", "-std=c17"]
follow_links = true
"#)?;

        let config = GeneratorConfig::from_file(&path)?;
        assert_eq!(config.compiler, "/usr/bin/clang++");
        assert_eq!(config.c_flags, FlagSet::new(["-c", "-std=c17"]));
        assert!(config.follow_links);
        assert_eq!(config.cxx_flags, GeneratorConfig::default().cxx_flags);
        assert_eq!(config.source_suffix, ".cpp");
        Ok(())
    }

    #[test]
    fn yaml_is_accepted() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("compdb.yml");
        fs::write(&path, "c_style_marker: pure_c\nsource_suffix: .cc\n")?;

        let config = GeneratorConfig::from_file(&path)?;
        assert_eq!(config.c_style_marker, "pure_c");
        assert_eq!(config.source_suffix, ".cc");
        Ok(())
    }

    #[test]
    fn unknown_extension_is_rejected() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("compdb.ini");
        fs::write(&path, "compiler = gcc")?;

        let err = GeneratorConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format"));
        Ok(())
    }
}
