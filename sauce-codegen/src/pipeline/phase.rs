//! Pipeline phase trait.

use eyre::Result;

use super::RunContext;

/// A phase of a regeneration run.
///
/// Phases are executed in order by the pipeline. Each phase reads what
/// earlier phases left in the [`RunContext`] and adds its own results.
///
/// Built-in phases:
/// - `GeneratePhase` - runs the generator and collects source units
/// - `ExtractPhase` - extracts descriptors from every unit
/// - `RenderPhase` - renders one segment per descriptor
/// - `WritePhase` - writes, closes and formats the output files
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the run context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues are
    /// recorded as diagnostics instead.
    fn run(&self, ctx: &mut RunContext) -> Result<()>;
}
