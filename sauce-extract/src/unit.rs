use std::path::{Path, PathBuf};

/// One parsable file of previously generated source.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    path: PathBuf,
    source: String,
}

impl SourceUnit {
    /// Create a unit from an in-memory source.
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Read a unit from disk.
    pub fn read(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        Ok(Self::new(path, source))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// File name used in diagnostics.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.xo.go");
        std::fs::write(&path, "package xo\n").unwrap();

        let unit = SourceUnit::read(&path).unwrap();
        assert_eq!(unit.path(), path);
        assert_eq!(unit.source(), "package xo\n");
        assert_eq!(unit.file_name(), "user.xo.go");
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(SourceUnit::read(temp.path().join("gone.xo.go")).is_err());
    }
}
