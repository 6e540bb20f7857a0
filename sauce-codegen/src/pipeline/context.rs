//! Run context passed through pipeline phases.

use std::path::{Path, PathBuf};

use eyre::Result;
use xosauce_config::{Config, GeneratorConfig};
use xosauce_core::OutputLayout;
use xosauce_extract::{SourceUnit, UnitDescriptors};

use super::diagnostic::{Diagnostic, Severity};
use crate::{HeaderContext, Segment, TemplateSet, WriteSummary};

/// Per-run options, usually taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Data source reference handed to the generator.
    pub data_source: String,
    /// Directory the regenerated files are written to.
    pub out_dir: PathBuf,
    /// User template directory.
    pub template_dir: Option<PathBuf>,
    /// Stop after rendering.
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(data_source: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_source: data_source.into(),
            out_dir: out_dir.into(),
            template_dir: None,
            dry_run: false,
        }
    }

    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Package of the regenerated files: the output directory's name.
    pub fn package(&self) -> String {
        base_name(&self.out_dir)
    }

    /// Directory the generator writes into.
    pub fn generator_dir(&self, generator: &GeneratorConfig) -> PathBuf {
        self.out_dir.join(&generator.subdir)
    }
}

/// Descriptors of one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUnit {
    /// Logical name shared by every segment of the unit.
    pub name: String,
    /// Unit file name.
    pub file: String,
    pub descriptors: UnitDescriptors,
}

/// Context passed through all pipeline phases.
///
/// Carries the state of one run, accumulating results and diagnostics
/// along the way. Nothing here outlives the run.
pub struct RunContext {
    pub config: Config,
    pub options: RunOptions,
    pub templates: TemplateSet,
    pub header: HeaderContext,
    /// Units collected by the generate phase, in file name order.
    pub units: Vec<SourceUnit>,
    /// Generator output files deleted by an exclusion pattern.
    pub pruned: Vec<PathBuf>,
    /// Populated by the extract phase.
    pub extracted: Vec<ExtractedUnit>,
    /// Populated by the render phase.
    pub segments: Vec<Segment>,
    /// Populated by the write phase.
    pub summary: Option<WriteSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunContext {
    /// Create a run context, loading templates from the options.
    pub fn new(config: Config, options: RunOptions) -> Result<Self> {
        let templates = TemplateSet::new(options.template_dir.as_deref())?;
        let generator_dir = options.generator_dir(&config.generator);
        let header = HeaderContext {
            package: options.package(),
            path: options.out_dir.clone(),
            generator_package: base_name(&generator_dir),
            generator_dir,
        };

        Ok(Self {
            config,
            options,
            templates,
            header,
            units: Vec::new(),
            pruned: Vec::new(),
            extracted: Vec::new(),
            segments: Vec::new(),
            summary: None,
            diagnostics: Vec::new(),
        })
    }

    /// Where segments land.
    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(
            &self.options.out_dir,
            &self.config.output.editable_suffix,
            &self.config.output.generated_suffix,
        )
    }

    pub fn generator_dir(&self) -> &Path {
        &self.header.generator_dir
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "main".to_string())
}
