//! Write phase - deterministic output.

use std::sync::Arc;

use eyre::Result;

use crate::{
    FileMultiplexer, SourceFormatter, write_all,
    pipeline::{Phase, RunContext},
};

/// Phase that writes every segment, closes the files and runs the
/// formatter over them.
pub struct WritePhase {
    formatter: Option<Arc<dyn SourceFormatter>>,
}

impl WritePhase {
    pub fn new(formatter: Option<Arc<dyn SourceFormatter>>) -> Self {
        Self { formatter }
    }
}

impl Phase for WritePhase {
    fn name(&self) -> &'static str {
        "write"
    }

    fn description(&self) -> &'static str {
        "Write, close and format output files"
    }

    fn run(&self, ctx: &mut RunContext) -> Result<()> {
        if self.formatter.is_none() {
            ctx.add_info(self.name(), "formatter disabled");
        }

        let mux = FileMultiplexer::new(ctx.layout(), &ctx.templates, &ctx.header);
        let summary = write_all(ctx.segments.clone(), mux, self.formatter.as_deref())?;
        ctx.summary = Some(summary);
        Ok(())
    }
}
