use std::path::{Component, Path, PathBuf};
use std::fs;
use anyhow::{Result, Context, anyhow};
use log::{debug, trace};

/// Make a path absolute against the current directory.
///
/// `.` and `..` are collapsed lexically; symlinks are not resolved.
pub fn absolute_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve absolute path for {}", path.display()))?;
    Ok(normalize(&absolute))
}

/// Collapse `.` and `..` components without touching the filesystem
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Check that a directory exists and return its absolute form
pub fn existing_dir(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = absolute_path(dir)?;
    let meta = fs::metadata(&dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    if !meta.is_dir() {
        return Err(anyhow!("{} is not a directory", dir.display()));
    }
    trace!("Using directory: {}", dir.display());
    Ok(dir)
}

/// Directory that holds the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .context("Failed to locate the running executable")?;
    let dir = exe.parent()
        .ok_or_else(|| anyhow!("Executable {} has no parent directory", exe.display()))?;
    debug!("Executable directory: {}", dir.display());
    absolute_path(dir)
}

/// Check if a file name ends with the given suffix (case-sensitive)
pub fn has_suffix(path: impl AsRef<Path>, suffix: &str) -> bool {
    path.as_ref()
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}

/// Path as a UTF-8 string, replacing invalid sequences
pub fn path_string(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().into_owned()
}
