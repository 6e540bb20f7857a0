//! External collaborators: the source generator and the source formatter.
//!
//! Both are blocking calls. A non-zero exit is fatal and carries the
//! process output verbatim.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use eyre::Result;
use tracing::{debug, info};
use xosauce_config::{FormatterConfig, GeneratorConfig};

use crate::RunError;

/// Produces source units from a data source reference.
pub trait SourceGenerator: Send + Sync {
    /// Write source units for `data_source` into `out_dir`.
    fn generate(&self, data_source: &str, out_dir: &Path, template_dir: Option<&Path>)
    -> Result<()>;
}

/// Formats written files in place.
pub trait SourceFormatter: Send + Sync {
    fn format(&self, paths: &[PathBuf]) -> Result<()>;
}

/// Generator backed by an external program, `xo` by default.
#[derive(Debug, Clone)]
pub struct ExternalGenerator {
    program: String,
    args: Vec<String>,
}

impl ExternalGenerator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// Full argument list for one invocation.
    pub fn args_for(
        &self,
        data_source: &str,
        out_dir: &Path,
        template_dir: Option<&Path>,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![data_source.into(), "-o".into(), out_dir.into()];
        if let Some(dir) = template_dir {
            args.push("--template-path".into());
            args.push(dir.into());
        }
        args.extend(self.args.iter().map(OsString::from));
        args
    }
}

impl SourceGenerator for ExternalGenerator {
    fn generate(
        &self,
        data_source: &str,
        out_dir: &Path,
        template_dir: Option<&Path>,
    ) -> Result<()> {
        info!(program = %self.program, out = %out_dir.display(), "running generator");
        run(&self.program, self.args_for(data_source, out_dir, template_dir))
    }
}

/// Formatter backed by an external program, `goimports -w` by default.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `None` when formatting is disabled.
    pub fn from_config(config: &FormatterConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(config.program.clone(), config.args.clone()))
    }

    pub fn args_for(&self, paths: &[PathBuf]) -> Vec<OsString> {
        self.args
            .iter()
            .map(OsString::from)
            .chain(paths.iter().map(OsString::from))
            .collect()
    }
}

impl SourceFormatter for ExternalFormatter {
    fn format(&self, paths: &[PathBuf]) -> Result<()> {
        info!(program = %self.program, files = paths.len(), "running formatter");
        run(&self.program, self.args_for(paths))
    }
}

/// Run `program` to completion; stdout and stderr are captured together.
fn run(program: &str, args: Vec<OsString>) -> Result<()> {
    debug!(%program, ?args, "spawning");
    let output = Command::new(program)
        .args(&args)
        .output()
        .map_err(|source| RunError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(RunError::Process {
        program: program.to_string(),
        status: output.status,
        output: format!("{stdout}{stderr}"),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_args() {
        let generator = ExternalGenerator::new("xo");
        assert_eq!(
            generator.args_for("pgsql://localhost/db", Path::new("models/xo"), None),
            ["pgsql://localhost/db", "-o", "models/xo"].map(OsString::from)
        );
        assert_eq!(
            generator.args_for(
                "pgsql://localhost/db",
                Path::new("models/xo"),
                Some(Path::new("tpl"))
            ),
            [
                "pgsql://localhost/db",
                "-o",
                "models/xo",
                "--template-path",
                "tpl"
            ]
            .map(OsString::from)
        );
    }

    #[test]
    fn test_generator_extra_args_come_last() {
        let config = GeneratorConfig {
            args: vec!["--verbose".to_string()],
            ..GeneratorConfig::default()
        };
        let args = ExternalGenerator::from_config(&config).args_for("db", Path::new("o"), None);
        assert_eq!(args.last().map(OsString::as_os_str), Some(std::ffi::OsStr::new("--verbose")));
    }

    #[test]
    fn test_formatter_args_and_toggle() {
        let config = FormatterConfig::default();
        let formatter = ExternalFormatter::from_config(&config).unwrap();
        assert_eq!(
            formatter.args_for(&[PathBuf::from("a.go"), PathBuf::from("b.go")]),
            ["-w", "a.go", "b.go"].map(OsString::from)
        );

        let disabled = FormatterConfig {
            enabled: false,
            ..FormatterConfig::default()
        };
        assert!(ExternalFormatter::from_config(&disabled).is_none());
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let err = run("xosauce-no-such-program", Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RunError>(),
            Some(RunError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_carries_output() {
        let args = ["-c", "echo out; echo err >&2; exit 3"].map(OsString::from).to_vec();
        let err = run("sh", args).unwrap_err();
        match err.downcast_ref::<RunError>() {
            Some(RunError::Process { output, status, .. }) => {
                assert_eq!(output, "out\nerr\n");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
