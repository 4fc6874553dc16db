use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::debug;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the exact content
    Unchanged,
}

/// A generated file ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Leaves the file untouched when it already holds the same content.
    pub fn write(&self) -> Result<WriteResult> {
        let existing = std::fs::read_to_string(&self.path).ok();
        if existing.as_deref() == Some(self.content.as_str()) {
            debug!(path = %self.path.display(), "unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "written");
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("python").join("constants").join("user.py");

        let result = File::new(&path, "ACTIVE = 1\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "ACTIVE = 1\n");
    }

    #[test]
    fn test_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.ts");
        fs::write(&path, "stale").unwrap();

        let result = File::new(&path, "fresh").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.go");
        let file = File::new(&path, "package cons\n");

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_write_reports_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = File::new(blocker.join("user.kt"), "object User")
            .write()
            .unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
