//! Generate phase - runs the generator and collects its output.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, warn};
use xosauce_extract::{SourceUnit, StructuralExtractor};

use crate::{
    RunError, SourceGenerator,
    pipeline::{Phase, RunContext},
};

/// Phase that invokes the generator, prunes excluded files and reads the
/// remaining units.
///
/// Units are collected in file name order. Files the extractor does not
/// accept are left alone.
pub struct GeneratePhase {
    generator: Arc<dyn SourceGenerator>,
    extractor: Arc<dyn StructuralExtractor>,
}

impl GeneratePhase {
    pub fn new(generator: Arc<dyn SourceGenerator>, extractor: Arc<dyn StructuralExtractor>) -> Self {
        Self {
            generator,
            extractor,
        }
    }
}

impl Phase for GeneratePhase {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn description(&self) -> &'static str {
        "Run the generator and collect source units"
    }

    fn run(&self, ctx: &mut RunContext) -> Result<()> {
        let dir = ctx.generator_dir().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| RunError::io("failed to create", dir.clone(), e))?;

        self.generator.generate(
            &ctx.options.data_source,
            &dir,
            ctx.options.template_dir.as_deref(),
        )?;

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(|e| RunError::io("failed to list", dir.clone(), e))? {
            let entry = entry.map_err(|e| RunError::io("failed to list", dir.clone(), e))?;
            if entry.path().is_file() {
                entries.push(entry.path());
            }
        }
        entries.sort();

        for path in entries {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if ctx.config.extract.is_excluded(&name) {
                std::fs::remove_file(&path)
                    .map_err(|e| RunError::io("failed to remove", path.clone(), e))?;
                warn!(file = %name, "removed excluded generator output");
                ctx.pruned.push(path);
                continue;
            }

            if !self.extractor.accepts(&path) {
                debug!(file = %name, dialect = self.extractor.dialect(), "not a source unit");
                continue;
            }

            let unit = SourceUnit::read(&path)
                .map_err(|e| RunError::io("failed to read", path.clone(), e))?;
            ctx.units.push(unit);
        }

        debug!(units = ctx.units.len(), pruned = ctx.pruned.len(), "collected source units");
        Ok(())
    }
}
