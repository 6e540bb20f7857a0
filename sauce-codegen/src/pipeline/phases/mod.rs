//! Built-in pipeline phases.
//!
//! - [`GeneratePhase`] - runs the generator and collects source units
//! - [`ExtractPhase`] - extracts descriptors from every unit
//! - [`RenderPhase`] - renders one segment per descriptor
//! - [`WritePhase`] - writes, closes and formats the output files

mod extract;
mod generate;
mod render;
mod write;

pub use extract::ExtractPhase;
pub use generate::GeneratePhase;
pub use render::RenderPhase;
pub use write::WritePhase;
