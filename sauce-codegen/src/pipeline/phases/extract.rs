//! Extract phase - turns source units into descriptors.

use std::sync::Arc;

use eyre::Result;
use tracing::{debug, warn};
use xosauce_core::unit_stem;
use xosauce_extract::StructuralExtractor;

use crate::{
    RunError,
    pipeline::{Diagnostic, ExtractedUnit, Phase, RunContext},
};

/// Phase that extracts records and functions from every unit.
///
/// A unit that fails to parse aborts the run. Shape warnings become
/// warning diagnostics.
pub struct ExtractPhase {
    extractor: Arc<dyn StructuralExtractor>,
}

impl ExtractPhase {
    pub fn new(extractor: Arc<dyn StructuralExtractor>) -> Self {
        Self { extractor }
    }
}

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Extract record and function descriptors"
    }

    fn run(&self, ctx: &mut RunContext) -> Result<()> {
        let mut extracted = Vec::with_capacity(ctx.units.len());

        for unit in &ctx.units {
            let descriptors = self.extractor.extract(unit).map_err(RunError::from)?;
            let file = unit.file_name();
            debug!(
                file = %file,
                records = descriptors.records.len(),
                functions = descriptors.functions.len(),
                "extracted"
            );

            for warning in &descriptors.warnings {
                warn!("{warning}");
                ctx.diagnostics
                    .push(Diagnostic::from_shape(self.name(), warning));
            }

            extracted.push(ExtractedUnit {
                name: unit_stem(&file).to_string(),
                file,
                descriptors,
            });
        }

        ctx.extracted = extracted;
        Ok(())
    }
}
