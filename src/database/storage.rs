use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{info, debug};

use super::types::CompileDatabase;

/// Reads and writes the compilation database file
#[derive(Debug)]
pub struct DatabaseStorage {
    /// Path to the database file
    db_path: PathBuf,
}

impl DatabaseStorage {
    /// Create a new database storage with the given path
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Load a previously written database
    pub fn load(&self) -> Result<CompileDatabase> {
        let path = &self.db_path;
        debug!("Loading database from {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read database file {}", path.display()))?;

        let db: CompileDatabase = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse database file {}", path.display()))?;

        debug!("Loaded database with {} entries", db.len());
        Ok(db)
    }

    /// Overwrite the database file with `db`.
    ///
    /// Output is pretty-printed with two-space indentation and keeps non-ASCII
    /// paths unescaped. The handle is flushed and closed before returning.
    pub fn save(&self, db: &CompileDatabase) -> Result<()> {
        let path = &self.db_path;
        debug!("Saving database to {}", path.display());

        let file = File::create(path)
            .with_context(|| format!("Failed to open database file {} for writing", path.display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, db)
            .with_context(|| format!("Failed to write database file {}", path.display()))?;
        writer.flush()
            .with_context(|| format!("Failed to flush database file {}", path.display()))?;

        info!("Saved database with {} entries", db.len());
        Ok(())
    }

    /// Check if the database file exists
    pub fn exists(&self) -> bool {
        self.db_path.exists()
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::compdb::types::CompileEntry;

    fn entry(dir: &str, name: &str) -> CompileEntry {
        CompileEntry {
            arguments: vec![
                "/usr/bin/g++".to_string(),
                "-o".to_string(),
                format!("{dir}/{name}"),
                format!("{dir}/{name}.cpp"),
            ],
            directory: "/proj".to_string(),
            file: format!("{dir}/{name}.cpp"),
            output: format!("{dir}/{name}"),
        }
    }

    #[test]
    fn empty_database_is_an_empty_array() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let storage = DatabaseStorage::new(temp.path().join("compile_commands.json"));
        assert!(!storage.exists());

        storage.save(&CompileDatabase::default())?;

        assert!(storage.exists());
        assert_eq!(fs::read_to_string(storage.path())?, "[]");
        Ok(())
    }

    #[test]
    fn pretty_output_uses_two_spaces() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let storage = DatabaseStorage::new(temp.path().join("compile_commands.json"));
        storage.save(&CompileDatabase::new(vec![entry("/proj/b", "y")]))?;

        let expected = r#"[
  {
    "arguments": [
      "/usr/bin/g++",
      "-o",
      "/proj/b/y",
      "/proj/b/y.cpp"
    ],
    "directory": "/proj",
    "file": "/proj/b/y.cpp",
    "output": "/proj/b/y"
  }
]"#;
        assert_eq!(fs::read_to_string(storage.path())?, expected);
        Ok(())
    }

    #[test]
    fn non_ascii_paths_are_not_escaped() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let storage = DatabaseStorage::new(temp.path().join("compile_commands.json"));
        let db = CompileDatabase::new(vec![entry("/proj/回声服务器", "服务端")]);
        storage.save(&db)?;

        let content = fs::read_to_string(storage.path())?;
        assert!(content.contains("/proj/回声服务器/服务端.cpp"));
        assert!(!content.contains("\\u"));
        assert_eq!(storage.load()?, db);
        Ok(())
    }

    #[test]
    fn save_overwrites_existing_file() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("compile_commands.json");
        fs::write(&path, "stale content that is much longer than an empty array")?;

        DatabaseStorage::new(&path).save(&CompileDatabase::default())?;
        assert_eq!(fs::read_to_string(&path)?, "[]");
        Ok(())
    }

    #[test]
    fn unwritable_destination_is_an_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("compile_commands.json");
        fs::create_dir(&path)?;

        let err = DatabaseStorage::new(&path).save(&CompileDatabase::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to open database file"));
        Ok(())
    }
}
