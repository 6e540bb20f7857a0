//! Configuration tables.

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext, validate};

/// Root of sauce.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// External schema-to-source generator
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// External formatter / import resolver run over written files
    #[serde(default)]
    pub formatter: FormatterConfig,

    /// Output file naming
    #[serde(default)]
    pub output: OutputConfig,

    /// Descriptor extraction
    #[serde(default)]
    pub extract: ExtractConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Program invoked as `<program> <data-source> -o <dir>`
    pub program: String,
    /// Generator output directory, relative to the output path
    pub subdir: String,
    /// Extra arguments appended to the invocation
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "xo".to_string(),
            subdir: "xo".to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub program: String,
    /// Arguments placed before the file list
    pub args: Vec<String>,
    pub enabled: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            program: "goimports".to_string(),
            args: vec!["-w".to_string()],
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Suffix of hand-editable wrapper files
    pub editable_suffix: String,
    /// Suffix of machine-owned body files
    pub generated_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            editable_suffix: ".go".to_string(),
            generated_suffix: ".generated.go".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractConfig {
    /// Generator output files whose name contains any of these are deleted
    /// instead of parsed
    pub exclude: Vec<String>,
    /// Bare type names qualified with the declaring unit's package
    pub marker_types: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            marker_types: vec!["XODB".to_string()],
        }
    }
}

impl ExtractConfig {
    /// Returns true if a generator output file must be pruned.
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude
            .iter()
            .any(|pattern| file_name.contains(pattern.as_str()))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Config::from_str_with_filename(s, "sauce.toml")
    }
}

impl Config {
    /// Parse a sauce.toml from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Config::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a sauce.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        validate::validate(&config, &ctx)?;
        Ok(config)
    }

    /// Render as TOML, e.g. for `sauce init`.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
