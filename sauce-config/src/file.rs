use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sauce.toml";

/// Represents a sauce.toml file with both raw content and parsed config.
pub struct SauceToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl SauceToml {
    /// Open and parse a sauce.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path`, or fall back to built-in defaults when it does not exist
    /// and `required` is false.
    pub fn open_or_default(path: impl AsRef<Path>, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if required || path.exists() {
            return Self::open(path);
        }
        Ok(Self {
            path: path.to_path_buf(),
            content: String::new(),
            config: Config::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the configuration came from disk.
    pub fn is_loaded(&self) -> bool {
        !self.content.is_empty() || self.path.exists()
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
