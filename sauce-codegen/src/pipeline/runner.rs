//! Pipeline orchestrator.

use std::sync::Arc;

use eyre::Result;
use tracing::info;
use xosauce_config::Config;
use xosauce_extract::{GoExtractor, StructuralExtractor};

use super::{
    Phase, RunContext, RunOptions,
    phases::{ExtractPhase, GeneratePhase, RenderPhase, WritePhase},
};
use crate::{ExternalFormatter, ExternalGenerator, SourceFormatter, SourceGenerator};

/// The regeneration pipeline.
///
/// Runs generate, extract, render and write in that order, stopping after
/// render for dry runs. Every run gets a fresh [`RunContext`], so nothing
/// leaks between runs.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(Arc::new(generator), Arc::new(GoExtractor::new()))
///     .formatter(Arc::new(formatter));
///
/// let ctx = pipeline.run(config, options)?;
/// ```
pub struct Pipeline {
    generator: Arc<dyn SourceGenerator>,
    extractor: Arc<dyn StructuralExtractor>,
    formatter: Option<Arc<dyn SourceFormatter>>,
}

impl Pipeline {
    /// Create a pipeline without a formatter.
    pub fn new(
        generator: Arc<dyn SourceGenerator>,
        extractor: Arc<dyn StructuralExtractor>,
    ) -> Self {
        Self {
            generator,
            extractor,
            formatter: None,
        }
    }

    /// Run `formatter` over the written files.
    pub fn formatter(mut self, formatter: Arc<dyn SourceFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Process-backed collaborators and the Go extractor, as configured.
    pub fn from_config(config: &Config) -> Self {
        let generator = ExternalGenerator::from_config(&config.generator);
        let extractor = GoExtractor::with_marker_types(config.extract.marker_types.iter().cloned());
        let pipeline = Self::new(Arc::new(generator), Arc::new(extractor));

        match ExternalFormatter::from_config(&config.formatter) {
            Some(formatter) => pipeline.formatter(Arc::new(formatter)),
            None => pipeline,
        }
    }

    /// Phases in execution order.
    pub fn phases(&self, dry_run: bool) -> Vec<Box<dyn Phase>> {
        let mut phases: Vec<Box<dyn Phase>> = vec![
            Box::new(GeneratePhase::new(
                self.generator.clone(),
                self.extractor.clone(),
            )),
            Box::new(ExtractPhase::new(self.extractor.clone())),
            Box::new(RenderPhase),
        ];
        if !dry_run {
            phases.push(Box::new(WritePhase::new(self.formatter.clone())));
        }
        phases
    }

    /// Run every phase for one regeneration.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error. Files written before it stay as they
    /// are; re-running the whole pipeline is the recovery path.
    pub fn run(&self, config: Config, options: RunOptions) -> Result<RunContext> {
        let mut ctx = RunContext::new(config, options)?;

        for phase in self.phases(ctx.options.dry_run) {
            info!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}
